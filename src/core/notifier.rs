use async_trait::async_trait;

/// Outbound channel for user-facing notifications.
///
/// Implementations must swallow (and log) delivery failures: a failed send
/// never interrupts the poll loop.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str);
}
