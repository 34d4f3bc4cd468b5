//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;

/// Row shape shared by every link query.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    key: String,
    destination: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.key, row.destination, row.created_at)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Key uniqueness is enforced by the `links_key_unique` constraint; the
/// conditional insert leans on it instead of any application-side
/// check-then-insert sequencing.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        // A single statement: the database decides who wins a key race.
        // `DO NOTHING` returns no row for the loser, which maps to KeyTaken.
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links ("key", destination)
            VALUES ($1, $2)
            ON CONFLICT ("key") DO NOTHING
            RETURNING id, "key", destination, created_at
            "#,
        )
        .bind(&new_link.key)
        .bind(&new_link.destination)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(match row {
            Some(row) => InsertOutcome::Inserted(row.into()),
            None => InsertOutcome::KeyTaken,
        })
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, "key", destination, created_at
            FROM links
            WHERE "key" = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_destination(&self, destination: &str) -> Result<Option<Link>, AppError> {
        // The tolerated creation race can leave several keys for one
        // destination; pick the earliest so dedup answers stay stable.
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, "key", destination, created_at
            FROM links
            WHERE destination = $1
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(destination)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }
}
