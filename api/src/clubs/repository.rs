use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use super::{Club, ClubParams};

/// Storage for clubs. Handlers receive it through router state, so tests can
/// swap in their own implementation.
#[async_trait]
pub trait ClubRepository: Send + Sync {
    async fn create(&self, params: &ClubParams) -> Result<Club>;

    async fn list(&self) -> Result<Vec<Club>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Club>>;

    /// Returns `None` when no club has this id.
    async fn update(&self, id: i64, params: &ClubParams) -> Result<Option<Club>>;

    /// Returns `false` when no club has this id.
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct SqliteClubRepository {
    pool: SqlitePool,
}

impl SqliteClubRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for SqliteClubRepository {
    #[instrument(skip(self))]
    async fn create(&self, params: &ClubParams) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            INSERT INTO clubs (name, nickname)
            VALUES (?, ?)
            RETURNING id, name, nickname
            "#,
        )
        .bind(&params.name)
        .bind(&params.nickname)
        .fetch_one(&self.pool)
        .await?;

        Ok(club)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Club>> {
        let clubs = sqlx::query_as::<_, Club>(
            r#"
            SELECT id, name, nickname
            FROM clubs
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clubs)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Club>> {
        let club = sqlx::query_as::<_, Club>("SELECT id, name, nickname FROM clubs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(club)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, params: &ClubParams) -> Result<Option<Club>> {
        let club = sqlx::query_as::<_, Club>(
            r#"
            UPDATE clubs SET name = ?, nickname = ?
            WHERE id = ?
            RETURNING id, name, nickname
            "#,
        )
        .bind(&params.name)
        .bind(&params.nickname)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(club)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM clubs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
