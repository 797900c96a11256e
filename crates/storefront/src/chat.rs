//! Scripted chat assistant proxy.

use reqwest::Method;

use tienda_core::session::SessionStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{ChatInit, ChatMessage, ChatReply};

impl<S: SessionStore> ApiClient<S> {
    /// Open a chat session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the chat backend is unavailable.
    pub async fn chat_init(&self) -> Result<ChatInit> {
        self.send_empty(Method::POST, "/api/chat/init").await
    }

    /// Send a message to the chat assistant.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the chat backend rejects the
    /// message.
    pub async fn chat_send(&self, message: &str, session_id: Option<&str>) -> Result<ChatReply> {
        let message = ChatMessage {
            message: message.to_string(),
            session_id: session_id.map(str::to_string),
        };
        self.send_json(Method::POST, "/api/chat", &message).await
    }
}
