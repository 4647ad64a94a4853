//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_action`] to assert behavior
//! and script the collection's reply.

use crate::actor_framework::{Entity, Filter, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

pub type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// No `ResourceActor` runs behind the client: the test reads each request off
/// `receiver` and answers it, which makes failures and odd replies easy to
/// simulate.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Put request
pub async fn expect_put<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T, Responder<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Put { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(Filter<T>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::{CartAction, CartError};
    use crate::clients::{CartClient, OrderClient, UserClient};
    use crate::domain::{Cart, Order, OrderCreate, StoredCart, User, UserAuth};
    use crate::order_actor::OrderError;
    use crate::domain::product::fixtures::product;

    #[tokio::test]
    async fn test_cart_client_returns_stored_cart() {
        let (inner, mut receiver) = create_mock_client::<StoredCart>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move {
            client
                .apply("user_1".into(), CartAction::Add { product: product("1", "Milk", 2.0), quantity: 1 })
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action");
        assert_eq!(id, "user_1");
        let mut cart = Cart::new();
        action.apply(&mut cart);
        responder.send(Ok(cart.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(cart));
    }

    #[tokio::test]
    async fn test_cart_client_maps_communication_errors() {
        let (inner, mut receiver) = create_mock_client::<StoredCart>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move { client.load_cart("user_1".into()).await });
        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get");
        drop(responder);

        assert!(matches!(task.await.unwrap(), Err(CartError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_order_client_maps_rejected_create() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let task = tokio::spawn(async move {
            client
                .create_order(OrderCreate { user_id: "user_1".into(), items: Vec::new(), total_amount: 0.0 })
                .await
        });
        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create");
        assert_eq!(params.user_id, "user_1");
        responder.send(Err(FrameworkError::Rejected("no items".into()))).unwrap();

        assert_eq!(task.await.unwrap(), Err(OrderError::ValidationError("no items".into())));
    }

    #[tokio::test]
    async fn test_find_by_email_filters_case_insensitively() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let (credentials, _credentials_receiver) = create_mock_client::<UserAuth>(10);
        let client = UserClient::new(inner, credentials);

        let task = tokio::spawn(async move { client.find_by_email(" John@Example.com ").await });
        let (filter, responder) = expect_query(&mut receiver).await.expect("Expected Query");

        let john = User {
            id: "user1".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            role: Default::default(),
        };
        let mut jane = john.clone();
        jane.email = "jane@example.com".into();
        assert!(filter(&john));
        assert!(!filter(&jane));
        responder.send(Ok(vec![john.clone()])).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Some(john)));
    }
}
