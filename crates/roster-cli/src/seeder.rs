//! Student seeding and maintenance.
//!
//! Generated students always pass the same field rules as the web forms:
//! names are letters and spaces, emails are lowercase `@gmail.com`
//! addresses starting with a letter, and mobiles are exactly ten digits.

use fake::Fake;
use fake::faker::name::en::*;
use roster_core::pagination::{PageQuery, PageWindow};
use roster_models::{Student, StudentForm};
use sqlx::SqlitePool;
use std::time::Instant;
use validator::Validate;

/// Generates up to `count` valid students. Ids are left for the store to
/// assign; candidates that fail validation are dropped.
pub fn generate_students(count: usize) -> Vec<StudentForm> {
    (0..count)
        .filter_map(|idx| {
            let first_name = letters_only(&FirstName().fake::<String>());
            let last_name = letters_only(&LastName().fake::<String>());
            let mobile: u64 = (1_000_000_000u64..10_000_000_000).fake();

            let form = StudentForm {
                id: None,
                name: format!("{} {}", first_name, last_name),
                email: format!(
                    "{}.{}{}@gmail.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase(),
                    idx
                ),
                mobile: mobile.to_string(),
            };

            form.validate().is_ok().then_some(form)
        })
        .collect()
}

fn letters_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

/// Seeds students into the database in a single transaction
pub async fn seed_students(
    db: &SqlitePool,
    count: usize,
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", count);

    let students = generate_students(count);
    let mut tx = db.begin().await?;

    for student in &students {
        sqlx::query("INSERT INTO students (name, email, mobile) VALUES (?, ?, ?)")
            .bind(&student.name)
            .bind(&student.email)
            .bind(&student.mobile)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    let inserted = students.len() as u64;
    println!(
        "   ✓ Inserted {} students in {:?}",
        inserted,
        start_time.elapsed()
    );
    if inserted < count as u64 {
        println!("   ⚠ Skipped {} invalid candidates", count as u64 - inserted);
    }

    Ok(inserted)
}

/// Loads one page of students using the same normalization as the web listing
pub async fn list_page(
    db: &SqlitePool,
    query: &PageQuery,
) -> Result<(Vec<Student>, PageWindow), Box<dyn std::error::Error>> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(db)
        .await?;
    let window = query.window(total);

    let students = sqlx::query_as::<_, Student>(
        "SELECT id, name, email, mobile FROM students ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(window.limit())
    .bind(window.offset())
    .fetch_all(db)
    .await?;

    Ok((students, window))
}

/// Removes every student, returning how many rows were deleted
pub async fn clear_students(db: &SqlitePool) -> Result<u64, Box<dyn std::error::Error>> {
    let result = sqlx::query("DELETE FROM students").execute(db).await?;
    Ok(result.rows_affected())
}
