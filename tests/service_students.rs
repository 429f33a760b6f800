mod common;

use common::{count_students, fetch_student, insert_student, insert_students};
use roster::modules::students::error::StudentError;
use roster::modules::students::model::{PageQuery, StudentForm};
use roster::modules::students::service::StudentService;
use sqlx::SqlitePool;

fn form(id: Option<i64>, name: &str, email: &str, mobile: &str) -> StudentForm {
    StudentForm {
        id,
        name: name.to_string(),
        email: email.to_string(),
        mobile: mobile.to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_students_window(pool: SqlitePool) {
    insert_students(&pool, 7).await;

    let query = PageQuery {
        page: Some(2),
        page_size: Some(2),
    };
    let view = StudentService::list_students(&pool, &query).await.unwrap();
    let ids: Vec<i64> = view.students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 4]);
    assert_eq!(view.total_pages, 4);
    assert_eq!(view.remaining_items, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_returns_stored_student(pool: SqlitePool) {
    let student = StudentService::create_student(
        &pool,
        form(None, "Ada Lovelace", "ada@gmail.com", "1234567890"),
    )
    .await
    .unwrap();

    assert_eq!(student.id, 1);
    assert_eq!(fetch_student(&pool, 1).await.unwrap(), student);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_duplicate(pool: SqlitePool) {
    insert_student(&pool, 2, "Ada Lovelace", "ada@gmail.com", "1234567890").await;

    let err = StudentService::create_student(
        &pool,
        form(Some(2), "Grace Hopper", "grace@gmail.com", "0987654321"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StudentError::DuplicateKey(2)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_relocate_moves_record(pool: SqlitePool) {
    insert_student(&pool, 5, "Ada Lovelace", "ada@gmail.com", "1234567890").await;

    let student = StudentService::update_student(
        &pool,
        Some(5),
        form(Some(9), "Ada King", "ada.king@gmail.com", "1234567899"),
    )
    .await
    .unwrap();

    assert_eq!(student.id, 9);
    assert!(fetch_student(&pool, 5).await.is_none());
    assert_eq!(fetch_student(&pool, 9).await.unwrap(), student);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_relocate_to_taken_id_leaves_both(pool: SqlitePool) {
    insert_student(&pool, 5, "Ada Lovelace", "ada@gmail.com", "1234567890").await;
    insert_student(&pool, 9, "Grace Hopper", "grace@gmail.com", "0987654321").await;

    let err = StudentService::update_student(
        &pool,
        Some(5),
        form(Some(9), "Ada King", "ada.king@gmail.com", "1234567899"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StudentError::DuplicateKey(9)));

    assert_eq!(fetch_student(&pool, 5).await.unwrap().name, "Ada Lovelace");
    assert_eq!(fetch_student(&pool, 9).await.unwrap().name, "Grace Hopper");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_relocate_is_all_or_nothing(pool: SqlitePool) {
    insert_student(&pool, 5, "Ada Lovelace", "ada@gmail.com", "1234567890").await;

    // Fails the delete-old step after the new row has been inserted
    sqlx::query(
        r#"
        CREATE TRIGGER block_delete BEFORE DELETE ON students
        WHEN OLD.id = 5
        BEGIN
            SELECT RAISE(ABORT, 'simulated failure');
        END;
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    let err = StudentService::update_student(
        &pool,
        Some(5),
        form(Some(9), "Ada King", "ada.king@gmail.com", "1234567899"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StudentError::Database(_)));

    assert!(fetch_student(&pool, 9).await.is_none());
    assert_eq!(fetch_student(&pool, 5).await.unwrap().name, "Ada Lovelace");
    assert_eq!(count_students(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_without_changes(pool: SqlitePool) {
    insert_student(&pool, 5, "Ada Lovelace", "ada@gmail.com", "1234567890").await;

    let err = StudentService::update_student(
        &pool,
        Some(5),
        form(Some(5), "Ada Lovelace ", "ada@gmail.com", "1234567890"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StudentError::NoChange));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_falls_back_to_submitted_id(pool: SqlitePool) {
    insert_student(&pool, 5, "Ada Lovelace", "ada@gmail.com", "1234567890").await;

    let student = StudentService::update_student(
        &pool,
        None,
        form(Some(5), "Ada King", "ada@gmail.com", "1234567890"),
    )
    .await
    .unwrap();
    assert_eq!(student.id, 5);
    assert_eq!(student.name, "Ada King");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_requires_new_id(pool: SqlitePool) {
    insert_student(&pool, 5, "Ada Lovelace", "ada@gmail.com", "1234567890").await;

    let err = StudentService::update_student(
        &pool,
        Some(5),
        form(None, "Ada King", "ada@gmail.com", "1234567890"),
    )
    .await
    .unwrap_err();
    match err {
        StudentError::Validation(errors) => assert!(errors.fields.contains_key("id")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_reports_blank_id_with_other_field_errors(pool: SqlitePool) {
    insert_student(&pool, 5, "Ada Lovelace", "ada@gmail.com", "1234567890").await;

    let err = StudentService::update_student(
        &pool,
        Some(5),
        form(None, "Ada King", "Ada@GMAIL.com", "1234567890"),
    )
    .await
    .unwrap_err();
    match err {
        StudentError::Validation(errors) => {
            assert_eq!(
                errors.fields["id"],
                vec!["Id must be a positive integer greater than zero.".to_string()]
            );
            assert_eq!(
                errors.fields["email"],
                vec!["Capital letters are not allowed.".to_string()]
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fetch_student(&pool, 5).await.unwrap().name, "Ada Lovelace");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_non_positive_id_reported_once(pool: SqlitePool) {
    insert_student(&pool, 5, "Ada Lovelace", "ada@gmail.com", "1234567890").await;

    let err = StudentService::update_student(
        &pool,
        Some(5),
        form(Some(0), "Ada King", "ada@gmail.com", "1234567890"),
    )
    .await
    .unwrap_err();
    match err {
        StudentError::Validation(errors) => assert_eq!(errors.fields["id"].len(), 1),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_record(pool: SqlitePool) {
    let err = StudentService::update_student(
        &pool,
        Some(3),
        form(Some(3), "Ada King", "ada@gmail.com", "1234567890"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StudentError::NotFound(3)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_student(pool: SqlitePool) {
    insert_student(&pool, 5, "Ada Lovelace", "ada@gmail.com", "1234567890").await;

    StudentService::delete_student(&pool, 5).await.unwrap();
    assert!(fetch_student(&pool, 5).await.is_none());

    let err = StudentService::delete_student(&pool, 5).await.unwrap_err();
    assert!(matches!(err, StudentError::NotFound(5)));

    let err = StudentService::delete_student(&pool, 0).await.unwrap_err();
    assert!(matches!(err, StudentError::NotFound(0)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_all_students(pool: SqlitePool) {
    assert_eq!(StudentService::delete_all_students(&pool).await.unwrap(), 0);

    insert_students(&pool, 4).await;
    assert_eq!(StudentService::delete_all_students(&pool).await.unwrap(), 4);
    assert_eq!(count_students(&pool).await, 0);
}
