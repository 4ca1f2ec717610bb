use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DATE_FORMAT;
use crate::constants::limits::{
    MAX_NAME_LEN, MAX_NATIONALITY_LEN, MAX_RANK_LEN, MAX_VESSEL_TYPE_LEN, MAX_YEARS_EXPERIENCE,
};
use crate::domain::{CrewId, CrewStatus, Passport, RecordError};
use crate::entities::crew_members;

/// A stored crew member record.
#[derive(Debug, Clone, Serialize)]
pub struct CrewMember {
    pub id: CrewId,
    pub name: String,
    pub rank: String,
    pub passport: String,
    pub status: CrewStatus,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub years_experience: Option<i32>,
    pub last_vessel_type: Option<String>,
    pub availability_date: Option<NaiveDate>,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<crew_members::Model> for CrewMember {
    type Error = RecordError;

    fn try_from(model: crew_members::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CrewId::new(model.id),
            status: CrewStatus::try_from(model.status)?,
            name: model.name,
            rank: model.rank,
            passport: model.passport,
            nationality: model.nationality,
            date_of_birth: model.date_of_birth.as_deref().and_then(parse_stored_date),
            years_experience: model.years_experience,
            last_vessel_type: model.last_vessel_type,
            availability_date: model.availability_date.as_deref().and_then(parse_stored_date),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

fn parse_stored_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Raw registration input as submitted by the public form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrewRegistration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub passport: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Accepted as a JSON number or as text (form fields arrive as strings).
    #[serde(default, deserialize_with = "number_or_text")]
    pub years_experience: Option<String>,
    #[serde(default)]
    pub last_vessel_type: Option<String>,
    #[serde(default)]
    pub availability_date: Option<String>,
}

/// Registration input that passed validation and normalization.
#[derive(Debug, Clone)]
pub struct ValidRegistration {
    pub name: String,
    pub rank: String,
    pub passport: Passport,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub years_experience: Option<i32>,
    pub last_vessel_type: Option<String>,
    pub availability_date: Option<NaiveDate>,
}

impl CrewRegistration {
    pub fn new(
        name: impl Into<String>,
        rank: impl Into<String>,
        passport: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rank: rank.into(),
            passport: passport.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<ValidRegistration, RecordError> {
        let name = required(&self.name, "Name", MAX_NAME_LEN)?;
        let rank = required(&self.rank, "Rank", MAX_RANK_LEN)?;

        let passport = Passport::parse(&self.passport).ok_or_else(|| {
            if self.passport.trim().is_empty() {
                RecordError::validation("Passport number is required")
            } else {
                RecordError::validation(
                    "Passport number must be 1-32 letters, digits or hyphens",
                )
            }
        })?;

        let years_experience = years(self.years_experience.as_deref())?;

        Ok(ValidRegistration {
            name,
            rank,
            passport,
            nationality: optional(self.nationality.as_deref(), "Nationality", MAX_NATIONALITY_LEN)?,
            date_of_birth: optional_date(self.date_of_birth.as_deref(), "Date of birth")?,
            years_experience,
            last_vessel_type: optional(
                self.last_vessel_type.as_deref(),
                "Last vessel type",
                MAX_VESSEL_TYPE_LEN,
            )?,
            availability_date: optional_date(
                self.availability_date.as_deref(),
                "Availability date",
            )?,
        })
    }
}

fn required(value: &str, field: &str, max_len: usize) -> Result<String, RecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordError::validation(format!("{field} is required")));
    }
    if trimmed.chars().count() > max_len {
        return Err(RecordError::validation(format!(
            "{field} must be {max_len} characters or less"
        )));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<&str>, field: &str, max_len: usize) -> Result<Option<String>, RecordError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.chars().count() > max_len => Err(RecordError::validation(format!(
            "{field} must be {max_len} characters or less"
        ))),
        Some(v) => Ok(Some(v.to_string())),
    }
}

fn years(value: Option<&str>) -> Result<Option<i32>, RecordError> {
    let out_of_range = || {
        RecordError::validation(format!(
            "Years of experience must be a whole number between 0 and {MAX_YEARS_EXPERIENCE}"
        ))
    };

    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => {
            let years: i32 = v.parse().map_err(|_| out_of_range())?;
            if (0..=MAX_YEARS_EXPERIENCE).contains(&years) {
                Ok(Some(years))
            } else {
                Err(out_of_range())
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

fn number_or_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<NumberOrText>::deserialize(deserializer)?.map(|value| match value {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s,
        }),
    )
}

fn optional_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, RecordError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, DATE_FORMAT)
            .map(Some)
            .map_err(|_| RecordError::validation(format!("{field} must be a YYYY-MM-DD date"))),
    }
}

/// Record counts per pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CrewStats {
    pub total: u64,
    pub registered: u64,
    pub screening: u64,
    pub documents_verified: u64,
    pub approved: u64,
}

impl CrewStats {
    pub fn add(&mut self, status: CrewStatus, count: u64) {
        match status {
            CrewStatus::Registered => self.registered += count,
            CrewStatus::Screening => self.screening += count,
            CrewStatus::DocumentsVerified => self.documents_verified += count,
            CrewStatus::Approved => self.approved += count,
        }
        self.total += count;
    }
}
