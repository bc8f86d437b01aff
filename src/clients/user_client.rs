use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{HoursDelta, User, UserCreate, UserPatch};
use crate::user_actor::{UserAction, UserError};

/// Client for interacting with the User actor.
///
/// Every call is a single message to the actor, so operations never
/// interleave with one another.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        self.inner.list().await.map_err(|e| to_user_error(e, None))
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: u64) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.get(id).await.map_err(|e| to_user_error(e, Some(id)))
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, payload: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(|e| to_user_error(e, None))
    }

    #[instrument(skip(self))]
    pub async fn rename_user(&self, id: u64, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(|e| to_user_error(e, Some(id)))
    }

    #[instrument(skip(self))]
    pub async fn add_hours(&self, id: u64, delta: HoursDelta) -> Result<User, UserError> {
        debug!("Sending request");
        let action: UserAction = delta.into();
        self.inner.perform_action(id, action).await.map_err(|e| to_user_error(e, Some(id)))
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: u64) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(|e| to_user_error(e, Some(id)))
    }

    #[instrument(skip(self))]
    pub async fn clear_users(&self) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        self.inner.clear().await.map_err(|e| to_user_error(e, None))
    }
}

fn to_user_error(error: FrameworkError, id: Option<u64>) -> UserError {
    match (error, id) {
        (FrameworkError::NotFound(_), Some(id)) => UserError::NotFound(id),
        (FrameworkError::Rejected(msg), _) => UserError::InvalidInput(msg),
        (e, _) => UserError::ActorCommunicationError(e.to_string()),
    }
}
