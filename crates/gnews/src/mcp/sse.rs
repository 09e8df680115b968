use crate::client::{NewsApi, NewsClient};
use crate::prelude::*;
use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream};
use std::convert::Infallible;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

type SharedApi = Arc<dyn NewsApi>;

pub async fn run_sse(options: super::cli::SseOptions, client: NewsClient) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("MCP server listening on http://{addr}");
    log::debug!("SSE endpoint: http://{addr}/sse");
    log::debug!("Message endpoint: http://{addr}/message");

    axum::serve(listener, router(Arc::new(client)))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

fn router(api: SharedApi) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/sse", get(sse_handler))
        .route("/message", post(message_handler))
        .layer(cors)
        .with_state(api)
}

async fn sse_handler() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = stream::once(async { Ok(Event::default().data("MCP SSE endpoint ready")) });
    Sse::new(stream)
}

async fn message_handler(
    State(api): State<SharedApi>,
    Json(request): Json<serde_json::Value>,
) -> Response {
    let request_str = request.to_string();
    match super::handle_request(&request_str, api.as_ref()).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
