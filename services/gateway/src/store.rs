//! Order store — append-only per-symbol persistence
//!
//! One JSON file per symbol under the configured orders directory, holding
//! the full ordered sequence of that symbol's orders. Appending is a
//! read-modify-append-rewrite cycle serialized per symbol by a lazily
//! created async mutex, so concurrent creates for the same symbol cannot
//! lose updates. Operations on different symbols share no lock.

use dashmap::DashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use types::errors::StoreError;
use types::order::Order;

/// File-backed order store with per-symbol mutual exclusion.
pub struct OrderStore {
    dir: PathBuf,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl OrderStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            locks: DashMap::new(),
        }
    }

    fn file_path(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{symbol}.json"))
    }

    fn lock_for(&self, symbol: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(symbol.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Append one order to its symbol's file.
    ///
    /// Holds the symbol's lock across the whole read-append-rewrite cycle;
    /// a read issued after this returns observes the write.
    pub async fn append(&self, order: &Order) -> Result<(), StoreError> {
        let lock = self.lock_for(&order.symbol);
        let _guard = lock.lock().await;

        let mut orders = self.read_unlocked(&order.symbol).await?;
        orders.push(order.clone());

        let payload = serde_json::to_vec_pretty(&orders)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.file_path(&order.symbol), payload).await?;
        Ok(())
    }

    /// Load all orders for a symbol, oldest first.
    ///
    /// An absent file and an empty file both mean "no orders yet".
    pub async fn load(&self, symbol: &str) -> Result<Vec<Order>, StoreError> {
        let lock = self.lock_for(symbol);
        let _guard = lock.lock().await;

        self.read_unlocked(symbol).await
    }

    async fn read_unlocked(&self, symbol: &str) -> Result<Vec<Order>, StoreError> {
        match tokio::fs::read(self.file_path(symbol)).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| StoreError::Corrupt {
                symbol: symbol.to_string(),
                reason: err.to_string(),
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }
}
