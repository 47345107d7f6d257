pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::bot::{Bot, BotPatch, NewBot};

pub use memory::MemoryBotStore;
pub use postgres::PgBotStore;

/// Errors surfaced by a bot store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence collaborator behind the bot handlers.
///
/// Implementations assign ids monotonically and never reuse an id after
/// deletion. Updates are pure commands: apply a patch to the record with the
/// given id and return the new row, or `NotFound`.
#[async_trait]
pub trait BotStore: Send + Sync {
    async fn create(&self, new: NewBot) -> Result<Bot, StoreError>;

    /// Every record, newest id first.
    async fn find_all(&self) -> Result<Vec<Bot>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Bot>, StoreError>;

    async fn update(&self, id: i32, patch: BotPatch) -> Result<Bot, StoreError>;

    /// Hard removal. The id is retired, not recycled.
    async fn delete(&self, id: i32) -> Result<(), StoreError>;
}
