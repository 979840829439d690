use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::delete_student;
use get::get_all_students;
use post::add_student;
use put::update_student;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/management/students` route group.
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_students))
        .route("/", post(add_student))
        .route("/{student_id}", put(update_student))
        .route("/{student_id}", delete(delete_student))
}
