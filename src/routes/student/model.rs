use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Serialize, FromRow)]
pub struct Student {
    pub student_id: i32,
    pub student_name: String,
    pub gpa: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub student_name: String,
    pub gpa: Option<f64>,
}

impl Student {
    pub async fn create(pool: &PgPool, req: CreateStudentRequest) -> Result<Self, sqlx::Error> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (student_name, gpa)
            VALUES ($1, $2)
            RETURNING student_id, student_name, gpa
            "#,
        )
        .bind(&req.student_name)
        .bind(req.gpa)
        .fetch_one(pool)
        .await?;

        Ok(student)
    }

    pub async fn find_by_id(pool: &PgPool, student_id: i32) -> Result<Option<Self>, sqlx::Error> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, student_name, gpa
            FROM students
            WHERE student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_optional(pool)
        .await?;

        Ok(student)
    }
}
