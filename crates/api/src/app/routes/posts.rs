use axum::{
    extract::Extension,
    response::Response,
    routing::get,
    Json, Router,
};

use sampleapi_core::Entity;
use sampleapi_posts::{Post, PostRequest};
use sampleapi_users::User;

use crate::app::directory::SharedDirectory;
use crate::app::errors::ApiError;
use crate::app::extract::{RecordIdPath, ValidatedJson};
use crate::app::routes::created;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post))
}

pub async fn list_posts(Extension(directory): Extension<SharedDirectory>) -> Json<Vec<Post>> {
    Json(directory.posts())
}

pub async fn get_post(
    Extension(directory): Extension<SharedDirectory>,
    RecordIdPath(id): RecordIdPath,
) -> Result<Json<Post>, ApiError> {
    let post = directory.post(id).ok_or_not_found(Post::RESOURCE, id)?;
    Ok(Json(post))
}

pub async fn create_post(ValidatedJson(body): ValidatedJson<PostRequest>) -> Response {
    let post = body.into_created();
    tracing::info!(post_id = post.id, user_id = post.user_id, "post created");
    created(post)
}

/// `GET /users/:id/posts` (mounted by the users router).
pub async fn list_user_posts(
    Extension(directory): Extension<SharedDirectory>,
    RecordIdPath(user_id): RecordIdPath,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = directory
        .user_posts(user_id)
        .ok_or_not_found(User::RESOURCE, user_id)?;
    Ok(Json(posts))
}
