//! Category suggestion for an expense description

use super::client::{ChatMessage, CompletionBackend, Prompt};
use crate::models::{DEFAULT_CATEGORIES, FALLBACK_CATEGORY};

fn categorize_prompt(description: &str) -> Prompt {
    Prompt {
        messages: vec![
            ChatMessage::system(format!(
                "You are a helpful assistant that categorizes expenses. Respond with ONLY one category name from this list: {}",
                DEFAULT_CATEGORIES.join(", ")
            )),
            ChatMessage::user(format!(
                "Categorize this expense: \"{}\". Reply with only the category name, nothing else.",
                description
            )),
        ],
        temperature: 0.3,
        max_tokens: 10,
    }
}

/// Map the model's reply to a canonical category, or the fallback
pub fn parse_category(reply: &str) -> &'static str {
    let reply = reply.trim();
    DEFAULT_CATEGORIES
        .iter()
        .copied()
        .find(|c| *c == reply)
        .unwrap_or(FALLBACK_CATEGORY)
}

/// Suggest one of the six canonical categories for `description`.
///
/// Never fails: a blank description, a request error or an unrecognized
/// reply all yield `Other`. Blank input makes no request.
pub async fn categorize<B: CompletionBackend>(backend: &B, description: &str) -> String {
    if description.trim().is_empty() {
        return FALLBACK_CATEGORY.to_string();
    }

    match backend.complete(&categorize_prompt(description)).await {
        Ok(reply) => {
            let category = parse_category(&reply);
            tracing::debug!(reply = %reply.trim(), category, "categorized expense");
            category.to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "categorization failed, using fallback");
            FALLBACK_CATEGORY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::testing::StubBackend;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Food"), "Food");
        assert_eq!(parse_category("  Transport\n"), "Transport");
        assert_eq!(parse_category("food"), "Other");
        assert_eq!(parse_category("Food."), "Other");
        assert_eq!(parse_category("Groceries"), "Other");
    }

    #[tokio::test]
    async fn test_blank_description_skips_request() {
        let backend = StubBackend::replying("Food");
        assert_eq!(categorize(&backend, "   ").await, "Other");
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_valid_reply() {
        let backend = StubBackend::replying(" Entertainment ");
        assert_eq!(categorize(&backend, "Cinema tickets").await, "Entertainment");

        let seen = backend.seen.lock().unwrap();
        let prompt = &seen[0];
        assert_eq!(prompt.temperature, 0.3);
        assert_eq!(prompt.max_tokens, 10);
        assert!(prompt.messages[1].content.contains("\"Cinema tickets\""));
    }

    #[tokio::test]
    async fn test_unexpected_reply_falls_back() {
        let backend = StubBackend::replying("I think this is Food");
        assert_eq!(categorize(&backend, "Pizza").await, "Other");
    }

    #[tokio::test]
    async fn test_error_falls_back() {
        let backend = StubBackend::failing();
        assert_eq!(categorize(&backend, "Pizza").await, "Other");
        assert_eq!(backend.calls(), 1);
    }
}
