// Extension point for free-text chat queries
use async_trait::async_trait;

/// Receives whatever the user typed into the chat input.
///
/// The rendered chat screen never depends on the query; a real
/// conversational backend would plug in here.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn accept_query(&self, text: &str);
}
