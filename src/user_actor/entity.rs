use crate::actor_framework::Entity;
use crate::domain::{normalized_name, HoursDelta, User, UserCreate, UserPatch};
use super::actions::UserAction;
use super::error::{INVALID_HOURS, NAME_REQUIRED};

impl Entity for User {
    type Id = u64;
    type CreatePayload = UserCreate;
    type Patch = UserPatch;
    type Action = UserAction;
    type ActionResult = User;

    fn id(&self) -> &u64 { &self.id }

    /// Creates a new User from creation parameters.
    ///
    /// The name is trimmed before it is stored and hours start at zero.
    fn from_create(id: u64, payload: UserCreate) -> Result<Self, String> {
        match normalized_name(payload.name.as_deref()) {
            Some(name) => Ok(User::new(id, name)),
            None => Err(NAME_REQUIRED.to_string()),
        }
    }

    /// Replaces the user's name when the patch carries a non-blank one.
    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        if let Some(name) = normalized_name(patch.name.as_deref()) {
            self.name = name.to_string();
        }
        Ok(())
    }

    /// Handles user-specific actions.
    ///
    /// # Actions
    /// - `AddHours(delta)`: Adds `delta` to `hours_worked`
    ///
    /// # Errors
    /// Returns an error if no delta was supplied or the total would overflow.
    fn handle_action(&mut self, action: UserAction) -> Result<User, String> {
        match action {
            UserAction::AddHours(Some(delta)) => {
                self.hours_worked = self
                    .hours_worked
                    .checked_add(delta)
                    .ok_or_else(|| INVALID_HOURS.to_string())?;
                Ok(self.clone())
            }
            UserAction::AddHours(None) => Err(INVALID_HOURS.to_string()),
        }
    }
}

impl From<HoursDelta> for UserAction {
    fn from(delta: HoursDelta) -> Self {
        UserAction::AddHours(delta.hours_to_add)
    }
}
