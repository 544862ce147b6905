use crate::chat::r#trait::Responder;
use crate::constants::{CHAT_FALLBACK_REPLY, CHAT_KEYWORD_REPLIES};
use crate::models::UploadedFile;
use anyhow::Result;

/// Answers from a fixed keyword table; the first keyword found wins
pub struct KeywordResponder {
    rules: Vec<(String, String)>,
    fallback: String,
}

impl KeywordResponder {
    pub fn new() -> Self {
        Self::with_rules(
            CHAT_KEYWORD_REPLIES
                .iter()
                .map(|(keyword, reply)| (keyword.to_string(), reply.to_string())),
            CHAT_FALLBACK_REPLY,
        )
    }

    pub fn with_rules<I>(rules: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(keyword, reply)| (keyword.to_lowercase(), reply))
                .collect(),
            fallback: fallback.into(),
        }
    }

    pub fn answer(&self, message: &str) -> &str {
        let message = message.to_lowercase();
        self.rules
            .iter()
            .find(|(keyword, _)| message.contains(keyword.as_str()))
            .map(|(_, reply)| reply.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Responder for KeywordResponder {
    async fn reply(&self, message: &str, _document: Option<&UploadedFile>) -> Result<String> {
        Ok(self.answer(message).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let responder = KeywordResponder::new();
        assert_eq!(
            responder.answer("What is the TOTAL?"),
            "Could you please specify which total you're referring to?"
        );
        assert!(responder.answer("Which Date applies?").starts_with("The invoice date"));
        assert!(responder.answer("how much tax").starts_with("Taxes are typically"));
    }

    #[test]
    fn test_first_rule_wins() {
        let responder = KeywordResponder::new();
        // "total" is checked before "tax"
        assert!(responder.answer("total tax").starts_with("Could you please specify"));
    }

    #[test]
    fn test_fallback_reply() {
        let responder = KeywordResponder::new();
        assert_eq!(responder.answer("who signed it?"), CHAT_FALLBACK_REPLY);
    }

    #[test]
    fn test_custom_rules() {
        let responder = KeywordResponder::with_rules(
            vec![("Commission".to_string(), "15%".to_string())],
            "no idea",
        );
        assert_eq!(responder.answer("what commission rate?"), "15%");
        assert_eq!(responder.answer("hello"), "no idea");
    }
}
