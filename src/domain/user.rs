use serde::{Deserialize, Serialize};

/// A worker tracked by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub hours_worked: i64,
}

/// Payload for creating a new user.
///
/// `name` stays optional so that a missing field is reported the same way as
/// a blank one.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub name: Option<String>,
}

/// Payload for renaming an existing user. An absent or blank name leaves the
/// user untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
}

/// Hours to add to a user's running total. Negative values subtract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursDelta {
    pub hours_to_add: Option<i64>,
}

impl User {
    /// Creates a new User instance with no hours logged.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `name` - User's display name, stored as given
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hours_worked: 0,
        }
    }
}

/// Returns the trimmed name when it has any non-whitespace content.
pub fn normalized_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}
