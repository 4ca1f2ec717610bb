//! Domain service for crew registration, tracking and status progression.

use crate::domain::{CrewId, RecordError};
use crate::models::crew::{CrewMember, CrewRegistration, CrewStats};

/// Domain service trait for crew records.
#[async_trait::async_trait]
pub trait CrewService: Send + Sync {
    /// Registers a new crew member at the initial stage.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Validation`] for missing or malformed fields and
    /// [`RecordError::Duplicate`] when the passport is already registered.
    async fn register(&self, registration: CrewRegistration) -> Result<CrewMember, RecordError>;

    /// Public status lookup. Unknown and malformed passports both yield
    /// [`RecordError::NotFound`].
    async fn track(&self, passport: &str) -> Result<CrewMember, RecordError>;

    async fn list(&self) -> Result<Vec<CrewMember>, RecordError>;

    async fn get(&self, id: CrewId) -> Result<CrewMember, RecordError>;

    /// Moves a record one stage forward.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::AlreadyAtMax`] at the terminal stage.
    async fn advance(&self, id: CrewId) -> Result<CrewMember, RecordError>;

    async fn stats(&self) -> Result<CrewStats, RecordError>;
}
