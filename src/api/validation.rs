use super::ApiError;
use crate::domain::CrewId;

/// Ids are assigned from 1, so a non-positive id names no record.
pub fn validate_crew_id(id: i32) -> Result<CrewId, ApiError> {
    if id <= 0 {
        return Err(ApiError::NotFound(format!("Crew member {id} not found")));
    }
    Ok(CrewId::new(id))
}

pub fn validate_credentials<'a>(
    username: &'a str,
    password: &'a str,
) -> Result<(&'a str, &'a str), ApiError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::validation(
            "Please enter both username and password",
        ));
    }
    Ok((username, password))
}
