//! PostgreSQL implementation of WebinarRepository.
//!
//! Persists Webinar aggregates to the `webinars` table.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{RepositoryError, Timestamp, UserId, WebinarId};
use crate::domain::webinar::{Webinar, WebinarProps};
use crate::ports::WebinarRepository;

/// PostgreSQL implementation of WebinarRepository.
#[derive(Clone)]
pub struct PostgresWebinarRepository {
    pool: PgPool,
}

impl PostgresWebinarRepository {
    /// Creates a new PostgresWebinarRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl WebinarRepository for PostgresWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO webinars (
                id, organizer_id, title, seats, start_date, end_date
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(webinar.id().as_str())
        .bind(webinar.organizer_id().as_str())
        .bind(webinar.title())
        .bind(webinar.seats())
        .bind(webinar.start_date().as_datetime())
        .bind(webinar.end_date().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("insert webinar", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, organizer_id, title, seats, start_date, end_date
            FROM webinars
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("fetch webinar", e))?;

        match row {
            Some(row) => Ok(Some(row_to_webinar(row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE webinars SET
                organizer_id = $2,
                title = $3,
                seats = $4,
                start_date = $5,
                end_date = $6
            WHERE id = $1
            "#,
        )
        .bind(webinar.id().as_str())
        .bind(webinar.organizer_id().as_str())
        .bind(webinar.title())
        .bind(webinar.seats())
        .bind(webinar.start_date().as_datetime())
        .bind(webinar.end_date().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::database("update webinar", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(webinar.id().clone()));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_webinar(row: sqlx::postgres::PgRow) -> Result<Webinar, RepositoryError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| RepositoryError::database("read webinar.id", e))?;

    let organizer_id: String = row
        .try_get("organizer_id")
        .map_err(|e| RepositoryError::database("read webinar.organizer_id", e))?;

    let title: String = row
        .try_get("title")
        .map_err(|e| RepositoryError::database("read webinar.title", e))?;

    let seats: i32 = row
        .try_get("seats")
        .map_err(|e| RepositoryError::database("read webinar.seats", e))?;

    let start_date: chrono::DateTime<chrono::Utc> = row
        .try_get("start_date")
        .map_err(|e| RepositoryError::database("read webinar.start_date", e))?;

    let end_date: chrono::DateTime<chrono::Utc> = row
        .try_get("end_date")
        .map_err(|e| RepositoryError::database("read webinar.end_date", e))?;

    // Stored rows are trusted; they may predate the current validation rules.
    Ok(Webinar::reconstitute(WebinarProps {
        id: WebinarId::new(id).map_err(|e| RepositoryError::database("read webinar.id", e))?,
        organizer_id: UserId::new(organizer_id)
            .map_err(|e| RepositoryError::database("read webinar.organizer_id", e))?,
        title,
        seats,
        start_date: Timestamp::from_datetime(start_date),
        end_date: Timestamp::from_datetime(end_date),
    }))
}
