/// Custom actions for User entities.
///
/// These actions represent domain-specific operations that can be performed
/// on a user beyond standard CRUD operations.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Adds hours to the user's running total.
    ///
    /// # Arguments
    /// * `Option<i64>` - The hours to add, possibly negative
    ///
    /// # Errors
    /// Will fail if no amount was supplied.
    AddHours(Option<i64>),
}
