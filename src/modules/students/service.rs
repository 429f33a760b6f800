use crate::audit_event;
use crate::metrics::{track_student_created, track_student_deleted, track_student_updated};
use crate::modules::students::error::StudentError;
use crate::modules::students::model::{
    FormErrors, ID_FIELD, ID_POSITIVE_MESSAGE, PageQuery, Student, StudentForm, StudentsIndexView,
};
use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::instrument;
use validator::Validate;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn list_students(
        db: &SqlitePool,
        query: &PageQuery,
    ) -> Result<StudentsIndexView, StudentError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(db)
            .await?;

        let window = query.window(total);

        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email, mobile
            FROM students
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(db)
        .await?;

        Ok(StudentsIndexView::new(students, window))
    }

    #[instrument(skip(db))]
    pub async fn get_student(db: &SqlitePool, id: i64) -> Result<Student, StudentError> {
        if id <= 0 {
            return Err(StudentError::NotFound(id));
        }

        find_student(db, id)
            .await?
            .ok_or(StudentError::NotFound(id))
    }

    #[instrument(skip(db, form))]
    pub async fn create_student(
        db: &SqlitePool,
        form: StudentForm,
    ) -> Result<Student, StudentError> {
        validate_form(&form)?;

        if let Some(id) = form.id {
            if find_student(db, id).await?.is_some() {
                return Err(StudentError::DuplicateKey(id));
            }
        }

        let student = insert_student(db, form.id, &form)
            .await
            .map_err(|e| insert_error(e, form.id))?;

        audit_event!("create", "student", student.id = student.id);
        track_student_created();

        Ok(student)
    }

    /// Applies an edit to the record stored under `original_id`.
    ///
    /// When the submitted id differs from `original_id` the record is moved:
    /// the new row is inserted and the old one deleted in one transaction.
    #[instrument(skip(db, form))]
    pub async fn update_student(
        db: &SqlitePool,
        original_id: Option<i64>,
        form: StudentForm,
    ) -> Result<Student, StudentError> {
        let original_id = match original_id {
            Some(id) if id > 0 => id,
            _ => form.id.unwrap_or(0),
        };
        if original_id <= 0 {
            return Err(StudentError::NotFound(original_id));
        }

        // The new id is required here, unlike on create; report it with
        // the other field errors.
        let mut errors = match form.validate() {
            Ok(()) => FormErrors::default(),
            Err(e) => FormErrors::from_validation(&e),
        };
        let new_id = match form.id {
            Some(id) if id > 0 => Some(id),
            _ => {
                if !errors.fields.contains_key(ID_FIELD) {
                    errors.add_field(ID_FIELD, ID_POSITIVE_MESSAGE);
                }
                None
            }
        };
        let new_id = match new_id {
            Some(id) if errors.is_empty() => id,
            _ => return Err(StudentError::Validation(errors)),
        };

        if new_id == original_id {
            Self::update_in_place(db, original_id, &form).await
        } else {
            Self::relocate(db, original_id, new_id, &form).await
        }
    }

    async fn update_in_place(
        db: &SqlitePool,
        id: i64,
        form: &StudentForm,
    ) -> Result<Student, StudentError> {
        let existing = find_student(db, id)
            .await?
            .ok_or(StudentError::NotFound(id))?;

        if existing.has_same_fields(form) {
            return Err(StudentError::NoChange);
        }

        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = ?, email = ?, mobile = ?
            WHERE id = ?
            RETURNING id, name, email, mobile
            "#,
        )
        .bind(form.name.as_str())
        .bind(form.email.as_str())
        .bind(form.mobile.as_str())
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(StudentError::NotFound(id))?;

        audit_event!("update", "student", student.id = id);
        track_student_updated("in_place");

        Ok(student)
    }

    #[instrument(skip(db, form))]
    async fn relocate(
        db: &SqlitePool,
        original_id: i64,
        new_id: i64,
        form: &StudentForm,
    ) -> Result<Student, StudentError> {
        // Dropping `tx` on any early return rolls the whole move back.
        let mut tx = db.begin().await?;

        if find_student(&mut *tx, new_id).await?.is_some() {
            return Err(StudentError::DuplicateKey(new_id));
        }

        let existing = find_student(&mut *tx, original_id)
            .await?
            .ok_or(StudentError::NotFound(original_id))?;

        if existing.id == new_id && existing.has_same_fields(form) {
            return Err(StudentError::NoChange);
        }

        let student = insert_student(&mut *tx, Some(new_id), form)
            .await
            .map_err(|e| insert_error(e, Some(new_id)))?;

        let deleted = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(original_id)
            .execute(&mut *tx)
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(StudentError::NotFound(original_id));
        }

        tx.commit().await?;

        audit_event!(
            "relocate",
            "student",
            student.original_id = original_id,
            student.id = new_id
        );
        track_student_updated("relocated");

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &SqlitePool, id: i64) -> Result<(), StudentError> {
        if id <= 0 {
            return Err(StudentError::NotFound(id));
        }

        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StudentError::NotFound(id));
        }

        audit_event!("delete", "student", student.id = id);
        track_student_deleted(1);

        Ok(())
    }

    /// Removes every student. Returns how many were removed; an empty table
    /// is not an error.
    #[instrument(skip(db))]
    pub async fn delete_all_students(db: &SqlitePool) -> Result<u64, StudentError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(db)
            .await?;
        if total == 0 {
            return Ok(0);
        }

        let removed = sqlx::query("DELETE FROM students")
            .execute(db)
            .await?
            .rows_affected();

        audit_event!("delete_all", "student", removed = removed);
        track_student_deleted(removed);

        Ok(removed)
    }
}

fn validate_form(form: &StudentForm) -> Result<(), StudentError> {
    form.validate()
        .map_err(|e| StudentError::Validation(FormErrors::from_validation(&e)))
}

async fn find_student<'e, E>(executor: E, id: i64) -> Result<Option<Student>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Student>("SELECT id, name, email, mobile FROM students WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Inserts a row. A `None` id lets SQLite assign `max(id) + 1`.
async fn insert_student<'e, E>(
    executor: E,
    id: Option<i64>,
    form: &StudentForm,
) -> Result<Student, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Student>(
        r#"
        INSERT INTO students (id, name, email, mobile)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, email, mobile
        "#,
    )
    .bind(id)
    .bind(form.name.as_str())
    .bind(form.email.as_str())
    .bind(form.mobile.as_str())
    .fetch_one(executor)
    .await
}

fn insert_error(err: sqlx::Error, id: Option<i64>) -> StudentError {
    if let (sqlx::Error::Database(db_err), Some(id)) = (&err, id) {
        if db_err.is_unique_violation() {
            return StudentError::DuplicateKey(id);
        }
    }
    StudentError::Database(err)
}
