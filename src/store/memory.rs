use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::bot::{Bot, BotPatch, NewBot};
use crate::store::{BotStore, StoreError};

/// In-memory store used by the test suite and as a fallback when no
/// database is configured. Ids keep counting up after deletions so a
/// retired id never comes back.
#[derive(Debug, Default)]
pub struct MemoryBotStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, Bot>,
}

impl MemoryBotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BotStore for MemoryBotStore {
    async fn create(&self, new: NewBot) -> Result<Bot, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;

        let bot = Bot {
            id: inner.next_id,
            name: new.name,
            price: new.price,
            availability: true,
            description: new.description,
            base_personality: new.base_personality,
            formality: new.formality,
            enthusiasm: new.enthusiasm,
            humor: new.humor,
            use_case_template: new.use_case_template,
        };
        inner.rows.insert(bot.id, bot.clone());
        Ok(bot)
    }

    async fn find_all(&self) -> Result<Vec<Bot>, StoreError> {
        let inner = self.inner.lock().await;
        // BTreeMap iterates ascending; the contract wants newest id first.
        Ok(inner.rows.values().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Bot>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, patch: BotPatch) -> Result<Bot, StoreError> {
        let mut inner = self.inner.lock().await;
        let bot = inner.rows.get_mut(&id).ok_or(StoreError::NotFound)?;
        patch.apply(bot);
        Ok(bot.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner.rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_bot(name: &str, price: f64) -> NewBot {
        NewBot::from_body(&json!({ "name": name, "price": price }))
    }

    #[tokio::test]
    async fn creation_defaults_availability_to_true() {
        let store = MemoryBotStore::new();
        let bot = store.create(new_bot("GPT 8", 300.0)).await.unwrap();
        assert_eq!(bot.id, 1);
        assert!(bot.availability);
    }

    #[tokio::test]
    async fn find_all_lists_newest_first() {
        let store = MemoryBotStore::new();
        store.create(new_bot("first", 10.0)).await.unwrap();
        store.create(new_bot("second", 20.0)).await.unwrap();

        let bots = store.find_all().await.unwrap();
        let ids: Vec<i32> = bots.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryBotStore::new();
        let first = store.create(new_bot("first", 10.0)).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(new_bot("second", 20.0)).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn update_applies_patch_or_reports_not_found() {
        let store = MemoryBotStore::new();
        let bot = store.create(new_bot("GPT 8", 300.0)).await.unwrap();

        let updated = store
            .update(bot.id, BotPatch::availability(false))
            .await
            .unwrap();
        assert!(!updated.availability);
        assert_eq!(updated.name, "GPT 8");

        let missing = store.update(2000, BotPatch::availability(true)).await;
        assert!(matches!(missing, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn delete_is_permanent() {
        let store = MemoryBotStore::new();
        let bot = store.create(new_bot("GPT 8", 300.0)).await.unwrap();

        store.delete(bot.id).await.unwrap();
        assert!(store.find_by_id(bot.id).await.unwrap().is_none());
        assert!(matches!(store.delete(bot.id).await, Err(StoreError::NotFound)));
    }
}
