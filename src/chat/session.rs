use crate::chat::r#trait::Responder;
use crate::config::Config;
use crate::constants::PDF_MIME;
use crate::error::IntakeError;
use crate::intake::{PreviewRef, PreviewRegistry};
use crate::models::UploadedFile;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// A conversation about an (optionally) attached document
pub struct ChatSession {
    responder: Arc<dyn Responder>,
    reply_delay: Duration,
    accepted_mime: String,
    previews: PreviewRegistry,
    document: Option<UploadedFile>,
    preview: Option<PreviewRef>,
    messages: Vec<Message>,
}

impl ChatSession {
    pub fn new(responder: Arc<dyn Responder>, reply_delay: Duration, previews: PreviewRegistry) -> Self {
        Self {
            responder,
            reply_delay,
            accepted_mime: PDF_MIME.to_string(),
            previews,
            document: None,
            preview: None,
            messages: Vec::new(),
        }
    }

    pub fn from_config(config: &Config, responder: Arc<dyn Responder>) -> Self {
        let mut session = Self::new(responder, config.chat.reply_delay(), PreviewRegistry::new());
        session.accepted_mime = config.intake.accepted_mime.clone();
        session
    }

    /// Attach a document, replacing (and releasing) any previous one.
    /// Invalid files leave the current attachment in place.
    pub fn attach(&mut self, file: UploadedFile) -> Result<&UploadedFile, IntakeError> {
        if file.mime_type != self.accepted_mime {
            tracing::warn!(file = %file.name, mime_type = %file.mime_type, "Rejected chat attachment");
            return Err(IntakeError::InvalidFileType {
                name: file.name,
                mime_type: file.mime_type,
            });
        }

        if let Some(previous) = self.preview.take() {
            self.previews.release(&previous);
        }
        self.preview = Some(self.previews.acquire(&file));
        tracing::info!(file = %file.name, "Attached document to chat");

        Ok(self.document.insert(file))
    }

    pub fn document(&self) -> Option<&UploadedFile> {
        self.document.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewRef> {
        self.preview.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Send a message and wait for the assistant's reply.
    /// Blank messages are ignored and return `None`.
    pub async fn send(&mut self, text: &str) -> Result<Option<&Message>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        self.messages.push(Message {
            role: Role::User,
            content: text.to_string(),
        });

        tokio::time::sleep(self.reply_delay).await;
        let reply = self.responder.reply(text, self.document.as_ref()).await?;

        self.messages.push(Message {
            role: Role::Assistant,
            content: reply,
        });
        Ok(self.messages.last())
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        if let Some(preview) = self.preview.take() {
            self.previews.release(&preview);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::KeywordResponder;
    use tokio::time::Instant;

    fn session(previews: &PreviewRegistry) -> ChatSession {
        ChatSession::new(
            Arc::new(KeywordResponder::new()),
            Duration::from_millis(1000),
            previews.clone(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_appends_both_messages_after_delay() {
        let mut chat = session(&PreviewRegistry::new());

        let start = Instant::now();
        let reply = chat.send("What is the total?").await.unwrap().cloned().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));

        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[0].role, Role::User);
        assert_eq!(chat.messages()[0].content, "What is the total?");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_message_ignored() {
        let mut chat = session(&PreviewRegistry::new());
        assert!(chat.send("   ").await.unwrap().is_none());
        assert!(chat.messages().is_empty());
    }

    #[tokio::test]
    async fn test_attach_rejects_non_pdf() {
        let previews = PreviewRegistry::new();
        let mut chat = session(&previews);
        chat.attach(UploadedFile::new("invoice.pdf", PDF_MIME, b"%PDF".to_vec()))
            .unwrap();

        let err = chat
            .attach(UploadedFile::new("notes.txt", "text/plain", b"x".to_vec()))
            .unwrap_err();
        assert!(matches!(err, IntakeError::InvalidFileType { .. }));
        assert_eq!(chat.document().map(|f| f.name.as_str()), Some("invoice.pdf"));
        assert_eq!(previews.live_count(), 1);
    }

    #[tokio::test]
    async fn test_reattach_releases_previous_preview() {
        let previews = PreviewRegistry::new();
        let mut chat = session(&previews);
        chat.attach(UploadedFile::new("a.pdf", PDF_MIME, b"a".to_vec())).unwrap();
        let first = chat.preview().cloned().unwrap();
        chat.attach(UploadedFile::new("b.pdf", PDF_MIME, b"b".to_vec())).unwrap();

        assert!(!previews.is_live(&first));
        assert_eq!(previews.live_count(), 1);

        drop(chat);
        assert_eq!(previews.live_count(), 0);
    }
}
