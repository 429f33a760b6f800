//! Student domain models, forms, and view models.
//!
//! A [`Student`] is the persisted record. [`StudentForm`] is what the create
//! and edit forms submit; [`EditStudentForm`] adds the id of the record being
//! edited so the key itself can change. The view models describe what a page
//! displays: [`StudentsIndexView`] for the paginated listing and
//! [`StudentFormView`] for a form, with any errors attached.

use std::collections::BTreeMap;

use roster_core::pagination::{ALLOWED_PAGE_SIZES, PageWindow};
use roster_core::serde::deserialize_lenient_i64;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::validation::{validate_email, validate_mobile, validate_name};

pub const ID_FIELD: &str = "id";
pub const ID_POSITIVE_MESSAGE: &str = "Id must be a positive integer greater than zero.";
pub const DUPLICATE_ID_MESSAGE: &str = "A student with this Id already exists.";
pub const NO_CHANGES_MESSAGE: &str = "No changes detected. Nothing to save.";

/// A student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl Student {
    /// Whether the editable fields match `form` once surrounding whitespace
    /// is ignored. The id is not compared.
    pub fn has_same_fields(&self, form: &StudentForm) -> bool {
        self.name.trim() == form.name.trim()
            && self.email.trim() == form.email.trim()
            && self.mobile.trim() == form.mobile.trim()
    }
}

impl From<Student> for StudentForm {
    fn from(student: Student) -> Self {
        Self {
            id: Some(student.id),
            name: student.name,
            email: student.email,
            mobile: student.mobile,
        }
    }
}

/// Submitted student fields.
///
/// `id` is optional on create, where the store assigns the next free id
/// when it is left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct StudentForm {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    #[validate(range(min = 1, message = "Id must be a positive integer greater than zero."))]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "validate_mobile"))]
    pub mobile: String,
}

/// Edit form body: the id of the stored record plus the submitted fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct EditStudentForm {
    #[serde(
        default,
        rename = "originalId",
        alias = "original_id",
        deserialize_with = "deserialize_lenient_i64"
    )]
    pub original_id: Option<i64>,
    #[serde(flatten)]
    pub student: StudentForm,
}

/// Errors shown on a redisplayed form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormErrors {
    /// Messages per field name
    pub fields: BTreeMap<String, Vec<String>>,
    /// Messages that are not tied to a single field
    pub form: Vec<String>,
}

impl FormErrors {
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut form_errors = Self::default();
        for (field, errors) in errors.field_errors() {
            for error in errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                form_errors.add_field(&field, message);
            }
        }
        form_errors
    }

    pub fn for_field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add_field(field, message);
        errors
    }

    pub fn for_form(message: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            form: vec![message.into()],
        }
    }

    pub fn add_field(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.form.is_empty()
    }
}

/// A create or edit form as displayed to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct StudentFormView {
    /// Id of the record being edited; absent on the create form
    pub original_id: Option<i64>,
    /// Field values, exactly as submitted when redisplaying
    pub student: StudentForm,
    pub errors: FormErrors,
}

impl StudentFormView {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn for_edit(student: Student) -> Self {
        Self {
            original_id: Some(student.id),
            student: student.into(),
            errors: FormErrors::default(),
        }
    }

    pub fn redisplay(original_id: Option<i64>, student: StudentForm, errors: FormErrors) -> Self {
        Self {
            original_id,
            student,
            errors,
        }
    }
}

/// One page of the student listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentsIndexView {
    pub students: Vec<Student>,
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub start_item: i64,
    pub end_item: i64,
    pub remaining_items: i64,
    pub has_previous: bool,
    pub has_next: bool,
    pub allowed_page_sizes: Vec<i64>,
}

impl StudentsIndexView {
    pub fn new(students: Vec<Student>, window: PageWindow) -> Self {
        Self {
            students,
            page: window.page,
            page_size: window.page_size,
            total_items: window.total_items,
            total_pages: window.total_pages,
            start_item: window.start_item(),
            end_item: window.end_item(),
            remaining_items: window.remaining_items(),
            has_previous: window.has_previous(),
            has_next: window.has_next(),
            allowed_page_sizes: ALLOWED_PAGE_SIZES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> StudentForm {
        StudentForm {
            id: Some(1),
            name: "John Smith".to_string(),
            email: "john123@gmail.com".to_string(),
            mobile: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_form_without_id_is_valid() {
        let form = StudentForm {
            id: None,
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_non_positive_id_is_invalid() {
        for id in [0, -1, -100] {
            let form = StudentForm {
                id: Some(id),
                ..valid_form()
            };
            let errors = FormErrors::from_validation(&form.validate().unwrap_err());
            assert_eq!(errors.fields["id"], vec![ID_POSITIVE_MESSAGE.to_string()]);
        }
    }

    #[test]
    fn test_uppercase_gmail_is_invalid() {
        let form = StudentForm {
            email: "John@GMAIL.com".to_string(),
            ..valid_form()
        };
        let errors = FormErrors::from_validation(&form.validate().unwrap_err());
        assert_eq!(
            errors.fields["email"],
            vec!["Capital letters are not allowed.".to_string()]
        );
        assert!(!errors.fields.contains_key("name"));
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let form = StudentForm {
            id: Some(0),
            name: "R2D2".to_string(),
            email: "r2d2@yahoo.com".to_string(),
            mobile: "123".to_string(),
        };
        let errors = FormErrors::from_validation(&form.validate().unwrap_err());
        let fields: Vec<&str> = errors.fields.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["email", "id", "mobile", "name"]);
        assert!(errors.form.is_empty());
    }

    #[test]
    fn test_has_same_fields_ignores_surrounding_whitespace() {
        let student = Student {
            id: 5,
            name: "John Smith".to_string(),
            email: "john123@gmail.com".to_string(),
            mobile: "9876543210".to_string(),
        };
        let form = StudentForm {
            id: Some(9),
            name: "  John Smith ".to_string(),
            ..valid_form()
        };
        assert!(student.has_same_fields(&form));

        let changed = StudentForm {
            name: "John Smyth".to_string(),
            ..valid_form()
        };
        assert!(!student.has_same_fields(&changed));
    }

    #[test]
    fn test_has_same_fields_is_case_sensitive() {
        let student = Student {
            id: 5,
            name: "John Smith".to_string(),
            email: "john123@gmail.com".to_string(),
            mobile: "9876543210".to_string(),
        };
        let form = StudentForm {
            name: "john smith".to_string(),
            ..valid_form()
        };
        assert!(!student.has_same_fields(&form));
    }

    #[test]
    fn test_form_errors_helpers() {
        let mut errors = FormErrors::for_field(ID_FIELD, DUPLICATE_ID_MESSAGE);
        errors.add_field(ID_FIELD, "second");
        assert_eq!(errors.fields["id"].len(), 2);
        assert!(!errors.is_empty());

        let errors = FormErrors::for_form(NO_CHANGES_MESSAGE);
        assert_eq!(errors.form, vec![NO_CHANGES_MESSAGE.to_string()]);
        assert!(errors.fields.is_empty());

        assert!(FormErrors::default().is_empty());
    }

    #[test]
    fn test_edit_form_deserialize() {
        let form: EditStudentForm = serde_json::from_str(
            r#"{"originalId":"5","id":"9","name":"John Smith","email":"john123@gmail.com","mobile":"9876543210"}"#,
        )
        .unwrap();
        assert_eq!(form.original_id, Some(5));
        assert_eq!(form.student.id, Some(9));
        assert_eq!(form.student.name, "John Smith");
    }

    #[test]
    fn test_edit_form_missing_ids() {
        let form: EditStudentForm =
            serde_json::from_str(r#"{"originalId":"","name":"John Smith"}"#).unwrap();
        assert_eq!(form.original_id, None);
        assert_eq!(form.student.id, None);
        assert_eq!(form.student.email, "");
    }

    #[test]
    fn test_form_view_for_edit() {
        let view = StudentFormView::for_edit(Student {
            id: 3,
            name: "Ada".to_string(),
            email: "ada@gmail.com".to_string(),
            mobile: "1234567890".to_string(),
        });
        assert_eq!(view.original_id, Some(3));
        assert_eq!(view.student.id, Some(3));
        assert!(view.errors.is_empty());
    }

    #[test]
    fn test_index_view_from_window() {
        let window = PageWindow::new(Some(3), Some(3), 7);
        let view = StudentsIndexView::new(Vec::new(), window);
        assert_eq!(view.page, 3);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.start_item, 7);
        assert_eq!(view.end_item, 7);
        assert_eq!(view.remaining_items, 0);
        assert_eq!(view.allowed_page_sizes, vec![2, 3, 5, 10]);
    }
}
