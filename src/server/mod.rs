mod cors;
pub mod handlers;
pub mod types;

use crate::{Result, config::Config, inference::WorkersAiClient};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    let client = Arc::new(WorkersAiClient::new(config.inference.clone()));

    let app_state = handlers::AppState { client };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the proxy router. `POST` on any path outside the image route is
/// chat mode, so the chat handler sits on the router fallback.
pub fn router(state: handlers::AppState) -> Router {
    let chat_routes = post(handlers::chat)
        .fallback(handlers::method_not_allowed)
        .with_state(state.clone());

    Router::new()
        .route(
            cors::IMAGE_PATH,
            get(handlers::image_get)
                .post(handlers::image_post)
                .fallback(handlers::method_not_allowed),
        )
        .fallback_service(chat_routes)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors::apply))
        .with_state(state)
}
