//! Crew command handlers

use crate::config::Config;
use crate::db::Store;
use crate::domain::{CrewId, CrewStatus, RecordError, status};

pub async fn cmd_list_crew(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let crew = store.list_crew_members().await?;

    if crew.is_empty() {
        println!("No crew members registered.");
        return Ok(());
    }

    println!("Crew Members ({} total)", crew.len());
    println!("{:-<70}", "");

    for member in crew {
        let indicator = if member.status.is_terminal() { "✓" } else { "•" };
        println!("{} {} ({})", indicator, member.name, member.rank);
        println!(
            "  ID: {} | Passport: {} | Status: {}",
            member.id, member.passport, member.status
        );
    }

    Ok(())
}

pub async fn cmd_stats(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let stats = store.crew_stats().await?;

    println!("Registrations: {}", stats.total);
    println!("{:-<40}", "");
    println!("  {:<22} {}", CrewStatus::Registered.label(), stats.registered);
    println!("  {:<22} {}", CrewStatus::Screening.label(), stats.screening);
    println!(
        "  {:<22} {}",
        CrewStatus::DocumentsVerified.label(),
        stats.documents_verified
    );
    println!("  {:<22} {}", CrewStatus::Approved.label(), stats.approved);

    Ok(())
}

pub async fn cmd_advance(config: &Config, id: i32) -> anyhow::Result<()> {
    if id <= 0 {
        println!("Invalid crew member ID: {id}");
        println!("Use 'maricheck list' to see crew member IDs.");
        return Ok(());
    }

    let store = Store::new(&config.general.database_path).await?;

    match store.advance_status(CrewId::new(id)).await {
        Ok(member) => {
            println!("✓ {} is now at stage: {}", member.name, member.status);
        }
        Err(RecordError::AlreadyAtMax) => {
            println!("Crew member {id} is already at the final stage.");
        }
        Err(RecordError::NotFound(_)) => {
            println!("Crew member with ID {id} not found.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

pub async fn cmd_track(config: &Config, passport: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;

    let Some(member) = store.get_crew_member_by_passport(passport).await? else {
        println!("No registration found for passport {}", passport.trim());
        return Ok(());
    };

    println!("{} ({})", member.name, member.rank);
    println!("  Passport: {}", member.passport);
    println!("  Status:   {}", member.status);
    println!("  Updated:  {}", member.updated_at);

    Ok(())
}

pub fn cmd_stages() {
    println!("Review Stages");
    println!("{:-<40}", "");
    for stage in status::stages() {
        println!("  [{}] {} ({})", stage.status, stage.label, stage.color_tag);
    }
}
