use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_teacher;
use get::get_all_teachers;
use post::add_teacher;
use put::update_teacher;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/management/teachers` route group.
///
/// `/registerTeacher` lives beside this group (see `management_routes`)
/// because it is not nested under the `/teachers` path.
pub fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_teachers))
        .route("/", post(add_teacher))
        .route("/{teacher_id}", put(update_teacher))
        .route("/{teacher_id}", delete(delete_teacher))
}
