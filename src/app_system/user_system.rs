use tracing::{info, error};
use crate::actor_framework::ResourceActor;
use crate::clients::UserClient;
use crate::domain::User;

/// The application system that owns the user store actor.
///
/// Responsible for starting the actor, handing out its client, and handling shutdown.
pub struct UserSystem {
    pub user_client: UserClient,
    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    pub fn new(buffer_size: usize) -> Self {
        let (user_actor, user_resource_client) = ResourceActor::<User>::new(buffer_size);
        let user_client = UserClient::new(user_resource_client);
        let handle = tokio::spawn(user_actor.run());

        Self { user_client, handle }
    }

    /// Stops the actor. Any clones of the client handed out earlier must be
    /// dropped first, otherwise the actor keeps waiting for messages.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
