// Chat backend that has nothing to answer with
use crate::application::chat_backend::ChatBackend;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct CannedChatBackend;

#[async_trait]
impl ChatBackend for CannedChatBackend {
    async fn accept_query(&self, text: &str) {
        tracing::debug!(chars = text.chars().count(), "Ignoring chat query");
    }
}
