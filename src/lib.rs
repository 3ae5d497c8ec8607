pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies/", get(routes::list_movies))
        .route("/movies/{id}", get(routes::get_movie))
        .route("/directors/", get(routes::list_directors).post(routes::create_director))
        .route(
            "/directors/{id}",
            get(routes::get_director)
                .put(routes::replace_director)
                .delete(routes::delete_director),
        )
        .route("/genres/", get(routes::list_genres).post(routes::create_genre))
        .route(
            "/genres/{id}",
            get(routes::get_genre).put(routes::replace_genre).delete(routes::delete_genre),
        )
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
