//! The four-stage crew processing pipeline.
//!
//! ```text
//! 0 Registered -> 1 Screening -> 2 Documents Verified -> 3 Approved
//! ```
//!
//! Pure logic only: nothing here touches the database.

use serde::Serialize;
use std::fmt;

use super::RecordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CrewStatus {
    #[default]
    Registered,
    Screening,
    DocumentsVerified,
    Approved,
}

/// Display metadata for a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageInfo {
    pub status: i32,
    pub label: &'static str,
    pub color_tag: &'static str,
}

impl CrewStatus {
    pub const ALL: [Self; 4] = [
        Self::Registered,
        Self::Screening,
        Self::DocumentsVerified,
        Self::Approved,
    ];

    pub const INITIAL: Self = Self::Registered;

    pub const TERMINAL: Self = Self::Approved;

    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Registered => 0,
            Self::Screening => 1,
            Self::DocumentsVerified => 2,
            Self::Approved => 3,
        }
    }

    pub fn from_value(value: i32) -> Result<Self, RecordError> {
        match value {
            0 => Ok(Self::Registered),
            1 => Ok(Self::Screening),
            2 => Ok(Self::DocumentsVerified),
            3 => Ok(Self::Approved),
            other => Err(RecordError::InvalidStatus(other)),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Registered => "Registered",
            Self::Screening => "Screening",
            Self::DocumentsVerified => "Documents Verified",
            Self::Approved => "Approved",
        }
    }

    #[must_use]
    pub const fn color_tag(self) -> &'static str {
        match self {
            Self::Registered => "secondary",
            Self::Screening => "warning",
            Self::DocumentsVerified => "info",
            Self::Approved => "success",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved)
    }

    /// The stage after this one; rejected at the terminal stage.
    pub fn next(self) -> Result<Self, RecordError> {
        match self {
            Self::Registered => Ok(Self::Screening),
            Self::Screening => Ok(Self::DocumentsVerified),
            Self::DocumentsVerified => Ok(Self::Approved),
            Self::Approved => Err(RecordError::AlreadyAtMax),
        }
    }

    #[must_use]
    pub const fn info(self) -> StageInfo {
        StageInfo {
            status: self.value(),
            label: self.label(),
            color_tag: self.color_tag(),
        }
    }
}

impl fmt::Display for CrewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i32> for CrewStatus {
    type Error = RecordError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<CrewStatus> for i32 {
    fn from(status: CrewStatus) -> Self {
        status.value()
    }
}

impl Serialize for CrewStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.value())
    }
}

/// Advances a raw status value by one stage.
pub fn advance(status: i32) -> Result<i32, RecordError> {
    CrewStatus::from_value(status)?.next().map(CrewStatus::value)
}

/// Returns `(label, color_tag)` for a raw status value.
pub fn describe(status: i32) -> Result<(&'static str, &'static str), RecordError> {
    let stage = CrewStatus::from_value(status)?;
    Ok((stage.label(), stage.color_tag()))
}

/// The whole pipeline in order.
#[must_use]
pub fn stages() -> Vec<StageInfo> {
    CrewStatus::ALL.iter().map(|s| s.info()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_matches_stage_table() {
        assert_eq!(describe(0).unwrap(), ("Registered", "secondary"));
        assert_eq!(describe(1).unwrap(), ("Screening", "warning"));
        assert_eq!(describe(2).unwrap(), ("Documents Verified", "info"));
        assert_eq!(describe(3).unwrap(), ("Approved", "success"));
    }

    #[test]
    fn describe_rejects_out_of_range() {
        for value in [-1, 4, 99, i32::MIN, i32::MAX] {
            assert!(matches!(
                describe(value),
                Err(RecordError::InvalidStatus(v)) if v == value
            ));
        }
    }

    #[test]
    fn advance_walks_the_chain() {
        assert_eq!(advance(0).unwrap(), 1);
        assert_eq!(advance(1).unwrap(), 2);
        assert_eq!(advance(2).unwrap(), 3);
    }

    #[test]
    fn advance_stops_at_terminal() {
        assert!(matches!(advance(3), Err(RecordError::AlreadyAtMax)));
        assert!(CrewStatus::TERMINAL.is_terminal());
        assert!(!CrewStatus::INITIAL.is_terminal());
    }

    #[test]
    fn advance_never_leaves_range() {
        assert!(matches!(advance(-1), Err(RecordError::InvalidStatus(-1))));
        assert!(matches!(advance(4), Err(RecordError::InvalidStatus(4))));
    }

    #[test]
    fn value_round_trips_for_every_stage() {
        for stage in CrewStatus::ALL {
            assert_eq!(CrewStatus::try_from(stage.value()).unwrap(), stage);
        }
    }

    #[test]
    fn stages_are_ordered() {
        let all = stages();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].label, "Registered");
        assert_eq!(all[3].color_tag, "success");
        assert!(all.windows(2).all(|w| w[0].status + 1 == w[1].status));
    }

    #[test]
    fn status_serializes_as_integer() {
        let json = serde_json::to_string(&CrewStatus::DocumentsVerified).unwrap();
        assert_eq!(json, "2");
    }
}
