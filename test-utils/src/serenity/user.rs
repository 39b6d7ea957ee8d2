//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// The user is built by deserializing JSON shaped like a Discord API user
/// object. The account is a regular (non-bot) user without an avatar, so
/// `User::face()` resolves to the default avatar URL.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, name: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
