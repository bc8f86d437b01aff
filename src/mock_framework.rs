//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The receiver stands in for a `ResourceActor`: the test reads each request
/// and answers it through the request's responder.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreatePayload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Patch, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::clients::UserClient;
    use crate::domain::{HoursDelta, User, UserCreate, UserPatch};
    use crate::user_actor::{UserAction, UserError};

    #[tokio::test]
    async fn test_create_forwards_payload() {
        let (inner, mut rx) = create_mock_client::<User>(4);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move {
            client.create_user(UserCreate { name: Some("Alice".into()) }).await
        });

        let (payload, responder) = expect_create(&mut rx).await.expect("Expected User Create");
        assert_eq!(payload.name.as_deref(), Some("Alice"));
        responder.send(Ok(User::new(1, "Alice"))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(User::new(1, "Alice")));
    }

    #[tokio::test]
    async fn test_not_found_carries_requested_id() {
        let (inner, mut rx) = create_mock_client::<User>(4);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.get_user(42).await });

        let (id, responder) = expect_get(&mut rx).await.expect("Expected User Get");
        assert_eq!(id, 42);
        responder.send(Err(FrameworkError::NotFound("42".into()))).unwrap();

        assert_eq!(task.await.unwrap(), Err(UserError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_rejection_becomes_invalid_input() {
        let (inner, mut rx) = create_mock_client::<User>(4);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move {
            client.add_hours(1, HoursDelta { hours_to_add: None }).await
        });

        let (id, action, responder) = expect_action(&mut rx).await.expect("Expected User Action");
        assert_eq!(id, 1);
        match action {
            UserAction::AddHours(delta) => assert_eq!(delta, None),
        }
        responder.send(Err(FrameworkError::Rejected("bad hours".into()))).unwrap();

        assert_eq!(task.await.unwrap(), Err(UserError::InvalidInput("bad hours".into())));
    }

    #[tokio::test]
    async fn test_rename_and_delete_round_trip_through_actor_messages() {
        let (inner, mut rx) = create_mock_client::<User>(4);
        let client = UserClient::new(inner);

        let renamer = client.clone();
        let task = tokio::spawn(async move {
            renamer.rename_user(5, UserPatch { name: Some("Bob".into()) }).await
        });
        let (id, patch, responder) = expect_update(&mut rx).await.expect("Expected User Update");
        assert_eq!((id, patch.name.as_deref()), (5, Some("Bob")));
        responder.send(Ok(User::new(5, "Bob"))).unwrap();
        assert_eq!(task.await.unwrap().unwrap().name, "Bob");

        let task = tokio::spawn(async move { client.delete_user(5).await });
        let (id, responder) = expect_delete(&mut rx).await.expect("Expected User Delete");
        assert_eq!(id, 5);
        responder.send(Ok(User::new(5, "Bob"))).unwrap();
        assert_eq!(task.await.unwrap().unwrap().id, 5);
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (inner, mut rx) = create_mock_client::<User>(4);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.get_user(1).await });
        let (_, responder) = expect_get(&mut rx).await.expect("Expected User Get");
        drop(responder);

        assert_eq!(
            task.await.unwrap(),
            Err(UserError::ActorCommunicationError("Actor dropped".into()))
        );
    }
}
