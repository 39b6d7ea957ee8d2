use serenity::all::UserId;

use crate::error::AppError;

/// Parses a Discord user ID typed by a user.
///
/// # Arguments
/// - `value` - Raw snowflake as entered, surrounding whitespace is ignored
///
/// # Returns
/// - `Ok(UserId)` - Successfully parsed non-zero snowflake
/// - `Err(AppError::BadRequest)` - Not a number, or zero
pub fn parse_user_id(value: &str) -> Result<UserId, AppError> {
    let invalid = || AppError::BadRequest(format!("'{}' is not a valid user ID", value.trim()));

    let id = value.trim().parse::<u64>().map_err(|_| invalid())?;
    if id == 0 {
        return Err(invalid());
    }

    Ok(UserId::new(id))
}
