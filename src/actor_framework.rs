use std::fmt::{Debug, Display};
use std::hash::Hash;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Payloads, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    /// Ids are minted by the actor from a sequence starting at 1.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    ///
    /// Returning `Err` rejects the payload; the candidate id is not consumed.
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Errors surfaced by the framework itself, independent of the entity type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Clear {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns the entities of one type and serves requests one at a time.
///
/// Iteration order is insertion order; removing an entity does not disturb
/// the relative order of the rest.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
    next_id: u64,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs until every client handle has been dropped.
    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("Actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(id));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Clear { respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_clear()));
                }
            }
        }

        info!("Actor stopped");
    }

    #[instrument(skip(self, payload))]
    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let id = T::Id::from(self.next_id);
        match T::from_create(id.clone(), payload) {
            Ok(item) => {
                self.next_id += 1;
                self.store.insert(item.id().clone(), item.clone());
                info!(id = %id, "Item created");
                Ok(item)
            }
            Err(e) => {
                warn!(error = %e, "Create rejected");
                Err(FrameworkError::Rejected(e))
            }
        }
    }

    #[instrument(skip(self))]
    fn handle_get(&self, id: T::Id) -> Result<T, FrameworkError> {
        match self.store.get(&id) {
            Some(item) => Ok(item.clone()),
            None => {
                debug!("Item not found");
                Err(FrameworkError::NotFound(id.to_string()))
            }
        }
    }

    #[instrument(skip(self, patch))]
    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let Some(item) = self.store.get_mut(&id) else {
            debug!("Item not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        item.on_update(patch).map_err(FrameworkError::Rejected)?;
        info!("Item updated");
        Ok(item.clone())
    }

    #[instrument(skip(self))]
    fn handle_action(&mut self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let Some(item) = self.store.get_mut(&id) else {
            debug!("Item not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        item.handle_action(action).map_err(|e| {
            warn!(error = %e, "Action rejected");
            FrameworkError::Rejected(e)
        })
    }

    #[instrument(skip(self))]
    fn handle_delete(&mut self, id: T::Id) -> Result<T, FrameworkError> {
        match self.store.shift_remove(&id) {
            Some(item) => {
                info!("Item deleted");
                Ok(item)
            }
            None => {
                debug!("Item not found");
                Err(FrameworkError::NotFound(id.to_string()))
            }
        }
    }

    /// Empties the store and restarts the id sequence at 1.
    #[instrument(skip(self))]
    fn handle_clear(&mut self) -> Vec<T> {
        let removed = self.store.len();
        self.store.clear();
        self.next_id = 1;
        info!(removed, "Store cleared");
        Vec::new()
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn clear(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Clear { respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
