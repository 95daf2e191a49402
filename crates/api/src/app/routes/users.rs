use axum::{
    extract::Extension,
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};

use sampleapi_core::Entity;
use sampleapi_users::{User, UserRequest};

use crate::app::directory::SharedDirectory;
use crate::app::errors::ApiError;
use crate::app::extract::{RecordIdPath, ValidatedJson};
use crate::app::routes::{created, posts};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/:id/posts", get(posts::list_user_posts))
}

pub async fn list_users(Extension(directory): Extension<SharedDirectory>) -> Json<Vec<User>> {
    Json(directory.users())
}

pub async fn get_user(
    Extension(directory): Extension<SharedDirectory>,
    RecordIdPath(id): RecordIdPath,
) -> Result<Json<User>, ApiError> {
    let user = directory.user(id).ok_or_not_found(User::RESOURCE, id)?;
    Ok(Json(user))
}

pub async fn create_user(ValidatedJson(body): ValidatedJson<UserRequest>) -> Response {
    let user = body.into_created();
    tracing::info!(user_id = user.id, "user created");
    created(user)
}

pub async fn update_user(
    Extension(directory): Extension<SharedDirectory>,
    RecordIdPath(id): RecordIdPath,
    ValidatedJson(body): ValidatedJson<UserRequest>,
) -> Result<Json<User>, ApiError> {
    directory.user(id).ok_or_not_found(User::RESOURCE, id)?;
    Ok(Json(body.into_user(id)))
}

pub async fn delete_user(
    Extension(directory): Extension<SharedDirectory>,
    RecordIdPath(id): RecordIdPath,
) -> Result<StatusCode, ApiError> {
    directory.user(id).ok_or_not_found(User::RESOURCE, id)?;
    tracing::info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
