//! HTTP surface of the service using axum.

mod error;
mod routes;

use std::future::Future;

use axum::{
    http::{header, Method},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::clients::UserClient;

/// Browsers may call the API from any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the application router around a user store client
pub fn app(client: UserClient) -> Router {
    routes::routes().layer(cors_layer()).with_state(client)
}

/// Serve the API on `listener` until `shutdown` resolves
pub async fn serve(
    listener: TcpListener,
    client: UserClient,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, app(client))
        .with_graceful_shutdown(shutdown)
        .await
}
