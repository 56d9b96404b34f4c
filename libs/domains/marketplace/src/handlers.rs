use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    routing::post,
};
use axum_helpers::method_not_allowed;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::NotificationResult;
use crate::models::Acknowledgement;
use crate::providers::WebhookProvider;
use crate::service::NotificationService;

/// Query string of the notify endpoint.
#[derive(Debug, Deserialize)]
pub struct NotifyQuery {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// Router exposing `POST /notify`. Any other method gets an empty 405.
pub fn router<P: WebhookProvider + 'static>(service: NotificationService<P>) -> Router {
    Router::new()
        .route("/notify", post(notify::<P>).fallback(method_not_allowed))
        .with_state(Arc::new(service))
}

/// Receive a marketplace event and forward it to the matching webhook.
///
/// An unparsable query string is treated like a missing `type`, which fails
/// validation.
async fn notify<P: WebhookProvider>(
    State(service): State<Arc<NotificationService<P>>>,
    query: Result<Query<NotifyQuery>, QueryRejection>,
    body: Bytes,
) -> NotificationResult<Json<Acknowledgement>> {
    let event_type = query.ok().and_then(|Query(query)| query.event_type);
    let ack = service.notify(event_type.as_deref(), &body).await?;
    Ok(Json(ack))
}
