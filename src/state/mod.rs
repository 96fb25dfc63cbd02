use crate::error::StoreError;
use crate::types::ReminderLedger;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Application context shared by the command handlers and the scheduler.
pub struct BotState {
    pub http: reqwest::Client,
    pub store_path: PathBuf,
    pub subscribers: Mutex<Vec<i64>>,
    pub ledger: Mutex<ReminderLedger>,
}

impl BotState {
    pub fn load(store_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store_path = store_path.into();
        let subscribers = load_subscribers(&store_path)?;
        Ok(Self {
            http: reqwest::Client::new(),
            store_path,
            subscribers: Mutex::new(subscribers),
            ledger: Mutex::new(ReminderLedger::new()),
        })
    }

    /// Appends the chat id and persists; no-op if already subscribed.
    /// Returns whether the id was added.
    pub async fn subscribe(&self, chat_id: i64) -> Result<bool, StoreError> {
        let mut subscribers = self.subscribers.lock().await;
        if subscribers.contains(&chat_id) {
            return Ok(false);
        }
        subscribers.push(chat_id);
        save_subscribers(&self.store_path, &subscribers).await?;
        Ok(true)
    }

    /// Removes the chat id and persists; no-op if not subscribed.
    /// Returns whether the id was removed.
    pub async fn unsubscribe(&self, chat_id: i64) -> Result<bool, StoreError> {
        let mut subscribers = self.subscribers.lock().await;
        let before = subscribers.len();
        subscribers.retain(|&id| id != chat_id);
        if subscribers.len() == before {
            return Ok(false);
        }
        save_subscribers(&self.store_path, &subscribers).await?;
        Ok(true)
    }

    pub async fn subscriber_ids(&self) -> Vec<i64> {
        self.subscribers.lock().await.clone()
    }
}

/// Missing file means no one has subscribed yet; an unparseable file is an
/// error the operator has to look at, not something to silently discard.
pub fn load_subscribers(path: &Path) -> Result<Vec<i64>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let json = fs::read_to_string(path)?;
    let subscribers = serde_json::from_str(&json)?;
    Ok(subscribers)
}

async fn save_subscribers(path: &Path, subscribers: &[i64]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(subscribers)?;

    // Write a temporary file first, then rename over the real one.
    let temp_path = path.with_extension("tmp.json");
    let mut temp_file = File::create(&temp_path).await?;
    temp_file.write_all(json.as_bytes()).await?;

    tokio::fs::rename(&temp_path, path).await?;

    Ok(())
}
