use crate::modules::students::model::{
    EditStudentForm, PageQuery, Student, StudentForm, StudentFormView, StudentsIndexView,
};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use roster_core::{AppError, ErrorResponse};
use tracing::instrument;

pub const STUDENTS_INDEX: &str = "/students";

fn redisplay(view: StudentFormView) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response()
}

#[utoipa::path(
    get,
    path = "/students",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of students", body = StudentsIndexView),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<StudentsIndexView>, AppError> {
    let query = PageQuery::from_pairs(pairs);
    let view = StudentService::list_students(&state.db, &query)
        .await
        .map_err(|e| e.into_app_error())?;
    Ok(Json(view))
}

#[utoipa::path(
    get,
    path = "/students/create",
    responses(
        (status = 200, description = "Empty create form", body = StudentFormView)
    ),
    tag = "Students"
)]
pub async fn create_form() -> Json<StudentFormView> {
    Json(StudentFormView::blank())
}

#[utoipa::path(
    post,
    path = "/students/create",
    request_body(content = StudentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Student created, redirects to the listing"),
        (status = 422, description = "Form redisplayed with errors", body = StudentFormView),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn create_student(
    State(state): State<AppState>,
    Form(form): Form<StudentForm>,
) -> Result<Response, AppError> {
    match StudentService::create_student(&state.db, form.clone()).await {
        Ok(_) => Ok(Redirect::to(STUDENTS_INDEX).into_response()),
        Err(err) => {
            let errors = err.into_form_errors()?;
            Ok(redisplay(StudentFormView::redisplay(None, form, errors)))
        }
    }
}

#[utoipa::path(
    get,
    path = "/students/edit/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Edit form prefilled with the student", body = StudentFormView),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StudentFormView>, AppError> {
    let student = StudentService::get_student(&state.db, id)
        .await
        .map_err(|e| e.into_app_error())?;
    Ok(Json(StudentFormView::for_edit(student)))
}

/// Saves an edit. The submitted `id` may differ from `originalId`, in which
/// case the student is moved to the new id.
#[utoipa::path(
    post,
    path = "/students/edit",
    request_body(content = EditStudentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Student saved, redirects to the listing"),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Form redisplayed with errors", body = StudentFormView),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn update_student(
    State(state): State<AppState>,
    Form(form): Form<EditStudentForm>,
) -> Result<Response, AppError> {
    let EditStudentForm {
        original_id,
        student,
    } = form;

    match StudentService::update_student(&state.db, original_id, student.clone()).await {
        Ok(_) => Ok(Redirect::to(STUDENTS_INDEX).into_response()),
        Err(err) => {
            let errors = err.into_form_errors()?;
            Ok(redisplay(StudentFormView::redisplay(
                original_id,
                student,
                errors,
            )))
        }
    }
}

#[utoipa::path(
    get,
    path = "/students/details/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn student_details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student(&state.db, id)
        .await
        .map_err(|e| e.into_app_error())?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/students/delete/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student to confirm deletion of", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_confirmation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student(&state.db, id)
        .await
        .map_err(|e| e.into_app_error())?;
    Ok(Json(student))
}

#[utoipa::path(
    post,
    path = "/students/delete/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 303, description = "Student deleted, redirects to the listing"),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    StudentService::delete_student(&state.db, id)
        .await
        .map_err(|e| e.into_app_error())?;
    Ok(Redirect::to(STUDENTS_INDEX))
}

#[utoipa::path(
    post,
    path = "/students/delete-all",
    responses(
        (status = 303, description = "All students removed, redirects to the listing"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_all_students(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let removed = StudentService::delete_all_students(&state.db)
        .await
        .map_err(|e| e.into_app_error())?;
    tracing::debug!(removed, "Cleared student roster");
    Ok(Redirect::to(STUDENTS_INDEX))
}
