use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::models::bot::{Bot, BotPatch, NewBot};
use crate::store::{BotStore, StoreError};

/// Postgres-backed bot store.
pub struct PgBotStore {
    pool: PgPool,
}

impl PgBotStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        info!("connected to database");
        Ok(Self::new(pool))
    }

    /// Create the bots table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bots (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                availability BOOLEAN NOT NULL DEFAULT TRUE,
                description VARCHAR(255),
                base_personality VARCHAR(50),
                formality VARCHAR(50),
                enthusiasm VARCHAR(50),
                humor VARCHAR(50),
                use_case_template VARCHAR(100)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl BotStore for PgBotStore {
    async fn create(&self, new: NewBot) -> Result<Bot, StoreError> {
        let bot = sqlx::query_as::<_, Bot>(
            r#"
            INSERT INTO bots
                (name, price, description, base_personality, formality,
                 enthusiasm, humor, use_case_template)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(new.price)
        .bind(&new.description)
        .bind(&new.base_personality)
        .bind(&new.formality)
        .bind(&new.enthusiasm)
        .bind(&new.humor)
        .bind(&new.use_case_template)
        .fetch_one(&self.pool)
        .await?;
        Ok(bot)
    }

    async fn find_all(&self) -> Result<Vec<Bot>, StoreError> {
        let bots = sqlx::query_as::<_, Bot>("SELECT * FROM bots ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(bots)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Bot>, StoreError> {
        let bot = sqlx::query_as::<_, Bot>("SELECT * FROM bots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(bot)
    }

    async fn update(&self, id: i32, patch: BotPatch) -> Result<Bot, StoreError> {
        // COALESCE keeps the current value for every field the patch leaves
        // unset, so the whole update is a single round trip.
        let bot = sqlx::query_as::<_, Bot>(
            r#"
            UPDATE bots SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                availability = COALESCE($4, availability),
                description = COALESCE($5, description),
                base_personality = COALESCE($6, base_personality),
                formality = COALESCE($7, formality),
                enthusiasm = COALESCE($8, enthusiasm),
                humor = COALESCE($9, humor),
                use_case_template = COALESCE($10, use_case_template)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(patch.price)
        .bind(patch.availability)
        .bind(&patch.description)
        .bind(&patch.base_personality)
        .bind(&patch.formality)
        .bind(&patch.enthusiasm)
        .bind(&patch.humor)
        .bind(&patch.use_case_template)
        .fetch_optional(&self.pool)
        .await?;

        bot.ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM bots WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
