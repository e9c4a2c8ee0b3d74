mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use shutl::store::LocationStore;
use std::sync::Arc;
use tracing::info;

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let start_logo = include_str!("../start_logo.txt");
    println!("{}", start_logo);

    info!("Starting server...");
    let state = Arc::new(AppState::new(LocationStore::new()));

    let app = axum::Router::new()
        .route("/gps", get(api::query).post(api::report))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app).await.unwrap();
}
