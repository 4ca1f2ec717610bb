use serde::{Deserialize, Serialize};

use crate::domain::{CrewId, CrewStatus};
use crate::models::crew::CrewMember;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CrewMemberDto {
    pub id: CrewId,
    pub name: String,
    pub rank: String,
    pub passport: String,
    pub status: CrewStatus,
    pub status_label: &'static str,
    pub color_tag: &'static str,
    pub is_final: bool,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub years_experience: Option<i32>,
    pub last_vessel_type: Option<String>,
    pub availability_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CrewMember> for CrewMemberDto {
    fn from(crew: CrewMember) -> Self {
        Self {
            id: crew.id,
            status_label: crew.status.label(),
            color_tag: crew.status.color_tag(),
            is_final: crew.status.is_terminal(),
            status: crew.status,
            name: crew.name,
            rank: crew.rank,
            passport: crew.passport,
            nationality: crew.nationality,
            date_of_birth: crew.date_of_birth.map(|d| d.to_string()),
            years_experience: crew.years_experience,
            last_vessel_type: crew.last_vessel_type,
            availability_date: crew.availability_date.map(|d| d.to_string()),
            created_at: crew.created_at,
            updated_at: crew.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub id: CrewId,
    pub passport: String,
    pub status: CrewStatus,
    pub status_label: &'static str,
    pub color_tag: &'static str,
}

impl From<CrewMember> for RegistrationResponse {
    fn from(crew: CrewMember) -> Self {
        Self {
            id: crew.id,
            passport: crew.passport,
            status: crew.status,
            status_label: crew.status.label(),
            color_tag: crew.status.color_tag(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    #[serde(default)]
    pub passport: String,
}

/// Public tracking view; omits the optional personal fields.
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub name: String,
    pub rank: String,
    pub passport: String,
    pub status: CrewStatus,
    pub status_label: &'static str,
    pub color_tag: &'static str,
    pub updated_at: String,
}

impl From<CrewMember> for TrackResponse {
    fn from(crew: CrewMember) -> Self {
        Self {
            name: crew.name,
            rank: crew.rank,
            passport: crew.passport,
            status: crew.status,
            status_label: crew.status.label(),
            color_tag: crew.status.color_tag(),
            updated_at: crew.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub database: bool,
}
