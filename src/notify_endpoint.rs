//! HTTP endpoint that receives onboarding notifications
//!
//! Mirrors the edge function the form notifies: CORS preflight, then a JSON
//! body that is logged and acknowledged. Email delivery is not done here.

use crate::catalog::expand_labels;
use crate::services::NotificationPayload;
use anyhow::Result;
use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub const NOTIFY_PATH: &str = "/functions/v1/send-onboarding-email";

const ALLOW_ORIGIN: &str = "*";
const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Router serving the notification function path
pub fn router() -> Router {
    Router::new()
        .route(NOTIFY_PATH, post(receive).options(preflight))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until Ctrl+C
pub async fn serve(addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "notification endpoint listening");
    axum::serve(listener, router())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}

async fn preflight() -> Response {
    with_cors(StatusCode::OK.into_response())
}

async fn receive(body: Bytes) -> Response {
    let payload: NotificationPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!(error = %e, "invalid onboarding notification body");
            return with_cors(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": e.to_string() })),
                )
                    .into_response(),
            );
        }
    };

    let labels = if payload.service_labels.is_empty() {
        expand_labels(&payload.services)
    } else {
        payload.service_labels.clone()
    };
    info!(
        company = %payload.company,
        contact = %payload.contact_name,
        email = %payload.email,
        services = %labels.join("; "),
        budget = %payload.budget,
        timeline = %payload.timeline,
        "onboarding submission received"
    );

    with_cors(
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Onboarding data received successfully"
            })),
        )
            .into_response(),
    )
}
