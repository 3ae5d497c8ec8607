use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set,
};

use crate::{
    AppState,
    entities::{director, genre, movie},
    error::{AppError, AppResult},
    models::{DirectorInput, GenreInput, MovieListQuery},
};

fn parse_id_filter(field: &str, value: Option<&str>) -> AppResult<Option<i32>> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .parse::<i32>()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("{field} must be an integer"))),
    }
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieListQuery>,
) -> AppResult<Json<Vec<movie::Model>>> {
    let mut find = movie::Entity::find();

    if let Some(id) = parse_id_filter("director_id", q.director_id.as_deref())? {
        find = find.filter(movie::Column::DirectorId.eq(id));
    }
    if let Some(id) = parse_id_filter("genre_id", q.genre_id.as_deref())? {
        find = find.filter(movie::Column::GenreId.eq(id));
    }

    Ok(Json(find.all(&state.db).await?))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<movie::Model>> {
    let movie = movie::Entity::find_by_id(id).one(&state.db).await?.ok_or(AppError::NotFound)?;
    Ok(Json(movie))
}

pub async fn list_directors(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<director::Model>>> {
    Ok(Json(director::Entity::find().all(&state.db).await?))
}

pub async fn create_director(
    State(state): State<Arc<AppState>>,
    Json(input): Json<DirectorInput>,
) -> AppResult<StatusCode> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be blank".to_string()));
    }

    director::ActiveModel { name: Set(input.name), ..Default::default() }
        .insert(&state.db)
        .await?;
    Ok(StatusCode::CREATED)
}

pub async fn get_director(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<director::Model>> {
    let director =
        director::Entity::find_by_id(id).one(&state.db).await?.ok_or(AppError::NotFound)?;
    Ok(Json(director))
}

pub async fn replace_director(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(input): Json<DirectorInput>,
) -> AppResult<StatusCode> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be blank".to_string()));
    }

    let existing =
        director::Entity::find_by_id(id).one(&state.db).await?.ok_or(AppError::NotFound)?;

    let mut active: director::ActiveModel = existing.into();
    active.name = Set(input.name);
    active.update(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_director(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let existing =
        director::Entity::find_by_id(id).one(&state.db).await?.ok_or(AppError::NotFound)?;

    let referenced = movie::Entity::find()
        .filter(movie::Column::DirectorId.eq(id))
        .count(&state.db)
        .await?;
    if referenced > 0 {
        return Err(AppError::Conflict("director is referenced by existing movies".to_string()));
    }

    existing.delete(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_genres(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<genre::Model>>> {
    Ok(Json(genre::Entity::find().all(&state.db).await?))
}

pub async fn create_genre(
    State(state): State<Arc<AppState>>,
    Json(input): Json<GenreInput>,
) -> AppResult<StatusCode> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be blank".to_string()));
    }

    genre::ActiveModel { name: Set(input.name), ..Default::default() }.insert(&state.db).await?;
    Ok(StatusCode::CREATED)
}

pub async fn get_genre(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<genre::Model>> {
    let genre = genre::Entity::find_by_id(id).one(&state.db).await?.ok_or(AppError::NotFound)?;
    Ok(Json(genre))
}

pub async fn replace_genre(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(input): Json<GenreInput>,
) -> AppResult<StatusCode> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be blank".to_string()));
    }

    let existing = genre::Entity::find_by_id(id).one(&state.db).await?.ok_or(AppError::NotFound)?;

    let mut active: genre::ActiveModel = existing.into();
    active.name = Set(input.name);
    active.update(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_genre(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let existing = genre::Entity::find_by_id(id).one(&state.db).await?.ok_or(AppError::NotFound)?;

    let referenced =
        movie::Entity::find().filter(movie::Column::GenreId.eq(id)).count(&state.db).await?;
    if referenced > 0 {
        return Err(AppError::Conflict("genre is referenced by existing movies".to_string()));
    }

    existing.delete(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::parse_id_filter;

    #[test]
    fn id_filter_absent() {
        assert!(parse_id_filter("director_id", None).unwrap().is_none());
    }

    #[test]
    fn id_filter_numeric() {
        assert_eq!(parse_id_filter("director_id", Some("42")).unwrap(), Some(42));
    }

    #[test]
    fn id_filter_rejects_garbage() {
        assert!(parse_id_filter("genre_id", Some("abc")).is_err());
        assert!(parse_id_filter("genre_id", Some("")).is_err());
        assert!(parse_id_filter("genre_id", Some("1.5")).is_err());
    }
}
