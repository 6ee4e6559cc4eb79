//! Route configuration for the notification endpoint.

use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{receive_notification, NotificationAppState};

/// Creates the notification router.
///
/// Routes:
/// - `POST <state.request_target>` - Receive a signed payment notification
pub fn notification_router(state: NotificationAppState) -> Router {
    let path = state.request_target.clone();
    Router::new()
        .route(&path, post(receive_notification))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
