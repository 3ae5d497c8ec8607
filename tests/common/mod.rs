#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use kinoteka::{
    AppState,
    entities::{director, genre, movie},
    router,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

/// Connects an in-memory SQLite, applies migrations and mounts the real
/// router. A single pooled connection keeps every query on the same
/// in-memory database.
pub async fn setup() -> (TestServer, DatabaseConnection) {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);

    let db = Database::connect(opts).await.expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    let server =
        TestServer::new(router(Arc::new(AppState { db: db.clone() }))).expect("test server");
    (server, db)
}

pub async fn seed_director(db: &DatabaseConnection, name: &str) -> i32 {
    director::ActiveModel { name: Set(name.to_string()), ..Default::default() }
        .insert(db)
        .await
        .expect("insert director")
        .id
}

pub async fn seed_genre(db: &DatabaseConnection, name: &str) -> i32 {
    genre::ActiveModel { name: Set(name.to_string()), ..Default::default() }
        .insert(db)
        .await
        .expect("insert genre")
        .id
}

pub async fn seed_movie(
    db: &DatabaseConnection,
    title: &str,
    director_id: Option<i32>,
    genre_id: Option<i32>,
) -> i32 {
    movie::ActiveModel {
        title: Set(title.to_string()),
        description: Set(format!("{title} synopsis")),
        trailer: Set("https://example.com/trailer".to_string()),
        year: Set(2010),
        rating: Set(7.5),
        director_id: Set(director_id),
        genre_id: Set(genre_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert movie")
    .id
}
