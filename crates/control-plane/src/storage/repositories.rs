// Repository layer for database operations

use anyhow::{Context, Result};
use sqlx::PgPool;

use super::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    // ============================================
    // Form statuses
    // ============================================

    pub async fn get_status(&self, id: i64) -> Result<Option<StatusRow>> {
        let row = sqlx::query_as::<_, StatusRow>(
            r#"
            SELECT id, name
            FROM form_statuses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_statuses(&self) -> Result<Vec<StatusRow>> {
        let rows = sqlx::query_as::<_, StatusRow>(
            r#"
            SELECT id, name
            FROM form_statuses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // ============================================
    // Forms
    // ============================================

    pub async fn list_forms(&self) -> Result<Vec<FormRow>> {
        let rows = sqlx::query_as::<_, FormRow>(
            r#"
            SELECT f.id, f.date, f.number, f.evaluation, f.status_id, s.name AS status_name,
                   f.provider_id, f.category_id, f.appraiser_id
            FROM forms f
            JOIN form_statuses s ON s.id = f.status_id
            ORDER BY f.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_form(&self, id: i64) -> Result<Option<FormRow>> {
        let row = sqlx::query_as::<_, FormRow>(
            r#"
            SELECT f.id, f.date, f.number, f.evaluation, f.status_id, s.name AS status_name,
                   f.provider_id, f.category_id, f.appraiser_id
            FROM forms f
            JOIN form_statuses s ON s.id = f.status_id
            WHERE f.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn create_form(&self, input: UpsertFormRow) -> Result<FormRow> {
        let row = sqlx::query_as::<_, FormRow>(
            r#"
            WITH inserted AS (
                INSERT INTO forms (date, number, evaluation, status_id, provider_id, category_id, appraiser_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, date, number, evaluation, status_id, provider_id, category_id, appraiser_id
            )
            SELECT i.id, i.date, i.number, i.evaluation, i.status_id, s.name AS status_name,
                   i.provider_id, i.category_id, i.appraiser_id
            FROM inserted i
            JOIN form_statuses s ON s.id = i.status_id
            "#,
        )
        .bind(input.date)
        .bind(&input.number)
        .bind(&input.evaluation)
        .bind(input.status_id)
        .bind(input.provider_id)
        .bind(input.category_id)
        .bind(input.appraiser_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update_form(&self, id: i64, input: UpsertFormRow) -> Result<Option<FormRow>> {
        let row = sqlx::query_as::<_, FormRow>(
            r#"
            WITH updated AS (
                UPDATE forms
                SET
                    date = $2,
                    number = $3,
                    evaluation = $4,
                    status_id = $5,
                    provider_id = $6,
                    category_id = $7,
                    appraiser_id = $8
                WHERE id = $1
                RETURNING id, date, number, evaluation, status_id, provider_id, category_id, appraiser_id
            )
            SELECT u.id, u.date, u.number, u.evaluation, u.status_id, s.name AS status_name,
                   u.provider_id, u.category_id, u.appraiser_id
            FROM updated u
            JOIN form_statuses s ON s.id = u.status_id
            "#,
        )
        .bind(id)
        .bind(input.date)
        .bind(&input.number)
        .bind(&input.evaluation)
        .bind(input.status_id)
        .bind(input.provider_id)
        .bind(input.category_id)
        .bind(input.appraiser_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_form(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM forms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
