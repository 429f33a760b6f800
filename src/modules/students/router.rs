use crate::modules::students::controller::{
    create_form, create_student, delete_all_students, delete_confirmation, delete_student,
    edit_form, list_students, student_details, update_student,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students))
        .route("/create", get(create_form).post(create_student))
        .route("/edit", post(update_student))
        .route("/edit/{id}", get(edit_form))
        .route("/details/{id}", get(student_details))
        .route(
            "/delete/{id}",
            get(delete_confirmation).post(delete_student),
        )
        .route("/delete-all", post(delete_all_students))
}
