use crate::error::AppError;

/// Maximum accepted name length, in characters, after trimming.
pub const MAX_NAME_LENGTH: usize = 50;

/// Validate and normalize a submitted name
///
/// Trims surrounding whitespace, then checks what remains. This is the one
/// validation pass the service performs; anything the client may have
/// checked is not trusted. Rejected names never reach the database.
///
/// # Arguments
/// * `raw` - Name exactly as submitted
///
/// # Returns
/// The trimmed name, ready for insertion
///
/// # Errors
/// - `Validation("Name cannot be empty.")` if nothing remains after trimming
/// - `Validation("Name too long (max 50).")` if more than 50 characters remain
///
/// # Examples
/// ```
/// use namelist::validation::validate_name;
///
/// let name = validate_name("  Ada Lovelace  ").unwrap();
/// assert_eq!(name, "Ada Lovelace");
/// ```
pub fn validate_name(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(AppError::Validation("Name cannot be empty.".to_string()));
    }

    // Characters, not bytes, so multibyte names are not over-rejected
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "Name too long (max {MAX_NAME_LENGTH})."
        )));
    }

    Ok(trimmed.to_string())
}
