use crate::config::Config;
use crate::db::Store;
use crate::domain::RecordError;

pub async fn cmd_create_admin(config: &Config, username: &str) -> anyhow::Result<()> {
    println!("Enter password for '{}':", username.trim());

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let password = input.trim_end_matches(['\r', '\n']);

    if password.is_empty() {
        println!("Password cannot be empty. Cancelled.");
        return Ok(());
    }

    let store = Store::new(&config.general.database_path).await?;

    match store
        .create_admin_with_config(username, password, &config.security)
        .await
    {
        Ok(admin) => println!("✓ Created admin '{}' (ID: {})", admin.username, admin.id),
        Err(RecordError::Duplicate(_)) => {
            println!("Admin '{}' already exists.", username.trim());
        }
        Err(RecordError::Validation(msg)) => println!("Invalid admin account: {msg}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
