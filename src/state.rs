use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{AuthService, CrewService, SeaOrmAuthService, SeaOrmCrewService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub crew_service: Arc<dyn CrewService>,

    pub auth_service: Arc<dyn AuthService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let crew_service: Arc<dyn CrewService> = Arc::new(SeaOrmCrewService::new(store.clone()));

        let auth_service: Arc<dyn AuthService> = Arc::new(SeaOrmAuthService::new(
            store.clone(),
            config.security.clone(),
            config.bootstrap.clone(),
        ));

        auth_service.ensure_bootstrap_admin().await?;

        Ok(Self {
            config: Arc::new(config),
            store,
            crew_service,
            auth_service,
        })
    }
}
