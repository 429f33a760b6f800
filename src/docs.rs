use utoipa::OpenApi;

use crate::modules::students::model::{
    EditStudentForm, FormErrors, PageQuery, Student, StudentForm, StudentFormView,
    StudentsIndexView,
};
use roster_core::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::list_students,
        crate::modules::students::controller::create_form,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::edit_form,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::student_details,
        crate::modules::students::controller::delete_confirmation,
        crate::modules::students::controller::delete_student,
        crate::modules::students::controller::delete_all_students,
    ),
    components(
        schemas(
            Student,
            StudentForm,
            EditStudentForm,
            FormErrors,
            StudentFormView,
            StudentsIndexView,
            PageQuery,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Students", description = "Student roster management")
    ),
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Student roster service built with Rust, Axum, and SQLite.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
