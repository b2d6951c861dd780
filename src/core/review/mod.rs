mod practicum;

pub use practicum::PracticumClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::TransportError;

/// Source of homework status payloads.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Fetch the raw status payload for everything changed since `from_date`
    /// (seconds since the epoch). No retries happen here.
    async fn fetch(&self, from_date: i64) -> Result<Value, TransportError>;
}
