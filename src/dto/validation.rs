//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest team name accepted from clients, in characters.
pub const MAX_TEAM_NAME_CHARS: usize = 64;

/// Validates a team name supplied by a client.
///
/// Empty names are accepted: they mean "keep the current name".
///
/// # Examples
///
/// ```ignore
/// validate_team_name("Los Primos") // Ok
/// validate_team_name("")           // Ok - ignored downstream
/// validate_team_name("tab\there")  // Err - control character
/// ```
pub fn validate_team_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if length > MAX_TEAM_NAME_CHARS {
        let mut err = ValidationError::new("team_name_length");
        err.message = Some(
            format!(
                "Team name must be at most {} characters (got {})",
                MAX_TEAM_NAME_CHARS, length
            )
            .into(),
        );
        return Err(err);
    }

    if name.chars().any(char::is_control) {
        let mut err = ValidationError::new("team_name_format");
        err.message = Some("Team name must not contain control characters".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_team_name_valid() {
        assert!(validate_team_name("foo").is_ok());
        assert!(validate_team_name("Los Primos").is_ok());
        assert!(validate_team_name("").is_ok());
        assert!(validate_team_name(&"ñ".repeat(MAX_TEAM_NAME_CHARS)).is_ok());
    }

    #[test]
    fn test_validate_team_name_too_long() {
        assert!(validate_team_name(&"a".repeat(MAX_TEAM_NAME_CHARS + 1)).is_err());
    }

    #[test]
    fn test_validate_team_name_control_characters() {
        assert!(validate_team_name("tab\there").is_err());
        assert!(validate_team_name("line\nbreak").is_err());
    }
}
