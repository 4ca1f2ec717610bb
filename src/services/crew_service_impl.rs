//! `SeaORM` implementation of the `CrewService` trait.

use async_trait::async_trait;

use crate::db::Store;
use crate::domain::{CrewId, RecordError};
use crate::models::crew::{CrewMember, CrewRegistration, CrewStats};
use crate::services::crew_service::CrewService;

pub struct SeaOrmCrewService {
    store: Store,
}

impl SeaOrmCrewService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CrewService for SeaOrmCrewService {
    async fn register(&self, registration: CrewRegistration) -> Result<CrewMember, RecordError> {
        let result = self.store.create_crew_member(&registration).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(RecordError::Duplicate(_)) => "duplicate",
            Err(RecordError::Validation(_)) => "invalid",
            Err(_) => "error",
        };
        metrics::counter!("crew_registrations_total", "outcome" => outcome).increment(1);

        result
    }

    async fn track(&self, passport: &str) -> Result<CrewMember, RecordError> {
        self.store
            .get_crew_member_by_passport(passport)
            .await?
            .ok_or_else(|| RecordError::not_found("Crew member with this passport number"))
    }

    async fn list(&self) -> Result<Vec<CrewMember>, RecordError> {
        self.store.list_crew_members().await
    }

    async fn get(&self, id: CrewId) -> Result<CrewMember, RecordError> {
        self.store
            .get_crew_member(id)
            .await?
            .ok_or_else(|| RecordError::not_found(format!("Crew member {id}")))
    }

    async fn advance(&self, id: CrewId) -> Result<CrewMember, RecordError> {
        let updated = self.store.advance_status(id).await?;

        metrics::counter!(
            "crew_status_advances_total",
            "stage" => updated.status.label()
        )
        .increment(1);

        Ok(updated)
    }

    async fn stats(&self) -> Result<CrewStats, RecordError> {
        self.store.crew_stats().await
    }
}
