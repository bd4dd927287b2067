use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderName, Request, Response},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{MakeSpan, OnRequest, OnResponse, TraceLayer},
};
use tracing::{info, Span};

use crate::{
    web::{midware, routes::routes, REQUEST_ID_HEADER},
    App, AppState, Result,
};

/// Serves the landing page and the waitlist routes on the listener the `App` was built with.
///
/// Runs until the listener fails or the process receives Ctrl+C.
pub async fn serve(app: App) -> Result<()> {
    let App {
        app_state,
        listener,
    } = app;

    axum::serve(listener, app_router(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// All routes wrapped in the request id, tracing and response mapping middleware.
pub fn app_router(app_state: AppState) -> Router {
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Responses travel the stack bottom up: the id is propagated before the mapper reads it.
    let middleware_stack = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
        .layer(request_trace_layer())
        .layer(middleware::map_response(midware::response_mapper))
        .layer(PropagateRequestIdLayer::new(x_request_id));

    routes(app_state).layer(middleware_stack)
}

async fn shutdown_signal() {
    if let Err(er) = tokio::signal::ctrl_c().await {
        tracing::error!("{:<20} - failed to listen for Ctrl+C: {er}", "SHUTDOWN");
        std::future::pending::<()>().await;
    }
    info!("{:<20} - Ctrl+C received", "SHUTDOWN");
}

fn request_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let request_id = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|id| id.to_str().ok())
                .unwrap_or_default()
                .to_string();

            tracing::info_span!(
                "request",
                request_id,
                method = %req.method(),
                path = req.uri().path()
            )
        })
        .on_request(|_req: &Request<Body>, _s: &Span| tracing::debug!("started"))
        .on_response(|res: &Response<Body>, latency: Duration, _s: &Span| {
            let status = res.status();

            if status.is_server_error() {
                tracing::error!(?latency, status = status.as_u16(), "finished")
            } else if status.is_client_error() {
                tracing::warn!(?latency, status = status.as_u16(), "finished")
            } else {
                tracing::info!(?latency, status = status.as_u16(), "finished")
            }
        })
}
