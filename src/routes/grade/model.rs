use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Serialize, FromRow)]
pub struct Grade {
    pub grade_id: i32,
    pub student_id: i32,
    pub course_name: String,
    pub grade: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: i32,
    pub course_name: String,
    pub grade: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGradeRequest {
    pub course_name: Option<String>,
    pub grade: Option<f64>,
}

/// 绩点取值范围为 0.0 到 4.0
pub fn is_valid_grade(value: f64) -> bool {
    (0.0..=4.0).contains(&value)
}

impl Grade {
    pub async fn create(pool: &PgPool, req: CreateGradeRequest) -> Result<Self, sqlx::Error> {
        let grade = sqlx::query_as::<_, Grade>(
            r#"
            INSERT INTO grades (student_id, course_name, grade)
            VALUES ($1, $2, $3)
            RETURNING grade_id, student_id, course_name, grade
            "#,
        )
        .bind(req.student_id)
        .bind(&req.course_name)
        .bind(req.grade)
        .fetch_one(pool)
        .await?;

        Ok(grade)
    }

    /// 部分更新，未提供的字段保持原值
    pub async fn update(
        pool: &PgPool,
        grade_id: i32,
        req: UpdateGradeRequest,
    ) -> Result<Option<Self>, sqlx::Error> {
        let grade = sqlx::query_as::<_, Grade>(
            r#"
            UPDATE grades
            SET course_name = COALESCE($2, course_name),
                grade = COALESCE($3, grade)
            WHERE grade_id = $1
            RETURNING grade_id, student_id, course_name, grade
            "#,
        )
        .bind(grade_id)
        .bind(req.course_name.as_deref())
        .bind(req.grade)
        .fetch_optional(pool)
        .await?;

        Ok(grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_range_is_inclusive() {
        assert!(is_valid_grade(0.0));
        assert!(is_valid_grade(2.7));
        assert!(is_valid_grade(4.0));
        assert!(!is_valid_grade(-0.1));
        assert!(!is_valid_grade(4.1));
        assert!(!is_valid_grade(f64::NAN));
    }
}
