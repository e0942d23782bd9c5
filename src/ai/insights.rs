//! Spending tips generated from the expense list

use super::client::{ChatMessage, CompletionBackend, Prompt};
use crate::display::format::format_currency;
use crate::models::Expense;
use crate::reports::aggregate;

/// Shown instead of a request when there is nothing to analyze
pub const EMPTY_MESSAGE: &str = "Start tracking expenses to get personalized insights!";

/// Shown when the request fails or the reply cannot be read
pub const FALLBACK_MESSAGE: &str = "Unable to generate insights at this moment";

/// How many tips to ask for, scaled by how much data there is
pub fn tip_count(expense_count: usize) -> usize {
    match expense_count {
        0..=2 => 2,
        3..=5 => 3,
        6..=10 => 4,
        _ => 5,
    }
}

/// Category totals as a JSON object in first-seen order
fn category_breakdown(expenses: &[Expense]) -> String {
    let fields: Vec<String> = aggregate::by_category(expenses)
        .iter()
        .map(|(name, total)| {
            let key = serde_json::to_string(name).unwrap_or_else(|_| format!("\"{}\"", name));
            format!("{}:{}", key, total.to_plain_string())
        })
        .collect();
    format!("{{{}}}", fields.join(","))
}

fn insights_prompt(expenses: &[Expense], currency: &str) -> Prompt {
    let tips = tip_count(expenses.len());
    let intro = "You're a friendly expense tracking assistant helping someone manage their money better.";

    let body = format!(
        "{intro} Analyze their spending and give exactly {tips} casual, specific tips.\n\
         \n\
         Total spent: {total}\n\
         Category breakdown: {breakdown}\n\
         Number of expenses: {count}\n\
         \n\
         Rules:\n\
         - Be conversational and friendly (use \"you\" and \"your\")\n\
         - Reference SPECIFIC amounts from their actual spending\n\
         - Mention the actual categories they spent on\n\
         - Keep each tip under 20 words\n\
         - Be encouraging, not judgmental\n\
         - No generic advice - make it personal to THEIR data\n\
         - Use varied punctuation (periods, commas, exclamation marks, ellipsis) instead of dashes\n\
         \n\
         Return ONLY a JSON array of exactly {tips} strings. Example: [\"You spent $50 on Entertainment. Maybe try one free activity this week!\", \"Your Food spending is $120. Meal prepping could save you $30-40!\"]",
        intro = intro,
        tips = tips,
        total = format_currency(aggregate::total(expenses), currency),
        breakdown = category_breakdown(expenses),
        count = expenses.len(),
    );

    Prompt {
        messages: vec![
            ChatMessage::system(
                "You are a friendly expense tracking assistant helping someone manage their money better.",
            ),
            ChatMessage::user(body),
        ],
        temperature: 0.8,
        max_tokens: 400,
    }
}

/// Read a JSON array of strings from the reply, tolerating text or code
/// fences around it. Empty arrays count as unreadable.
pub fn parse_insights(reply: &str) -> Option<Vec<String>> {
    let reply = reply.trim();
    let parsed = serde_json::from_str::<Vec<String>>(reply).ok().or_else(|| {
        let start = reply.find('[')?;
        let end = reply.rfind(']')?;
        if end <= start {
            return None;
        }
        serde_json::from_str::<Vec<String>>(&reply[start..=end]).ok()
    })?;

    let tips: Vec<String> = parsed
        .into_iter()
        .map(|tip| tip.trim().to_string())
        .filter(|tip| !tip.is_empty())
        .collect();

    if tips.is_empty() {
        None
    } else {
        Some(tips)
    }
}

/// Generate spending tips for `expenses`.
///
/// Never fails: an empty list yields [`EMPTY_MESSAGE`] without a request,
/// and any request or parse problem yields [`FALLBACK_MESSAGE`].
pub async fn generate_insights<B: CompletionBackend>(
    backend: &B,
    expenses: &[Expense],
    currency: &str,
) -> Vec<String> {
    if expenses.is_empty() {
        return vec![EMPTY_MESSAGE.to_string()];
    }

    match backend.complete(&insights_prompt(expenses, currency)).await {
        Ok(reply) => parse_insights(&reply).unwrap_or_else(|| {
            tracing::warn!(reply = %reply, "insights reply was not a JSON array of strings");
            vec![FALLBACK_MESSAGE.to_string()]
        }),
        Err(e) => {
            tracing::warn!(error = %e, "insights request failed, using fallback");
            vec![FALLBACK_MESSAGE.to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::testing::StubBackend;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expenses(n: usize) -> Vec<Expense> {
        (0..n)
            .map(|i| {
                Expense::new(
                    Money::from_cents(1000),
                    format!("Item {}", i),
                    if i % 2 == 0 { "Food" } else { "Transport" },
                    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_tip_count() {
        assert_eq!(tip_count(1), 2);
        assert_eq!(tip_count(2), 2);
        assert_eq!(tip_count(3), 3);
        assert_eq!(tip_count(5), 3);
        assert_eq!(tip_count(10), 4);
        assert_eq!(tip_count(11), 5);
    }

    #[test]
    fn test_category_breakdown_order() {
        assert_eq!(
            category_breakdown(&expenses(3)),
            "{\"Food\":20,\"Transport\":10}"
        );
    }

    #[test]
    fn test_parse_insights() {
        assert_eq!(
            parse_insights("[\"a\", \"b\"]"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            parse_insights("Here you go:\n```json\n[\"tip\"]\n```"),
            Some(vec!["tip".to_string()])
        );
        assert_eq!(parse_insights("[]"), None);
        assert_eq!(parse_insights("[1, 2]"), None);
        assert_eq!(parse_insights("no array here"), None);
    }

    #[tokio::test]
    async fn test_empty_list_skips_request() {
        let backend = StubBackend::replying("[\"x\"]");
        let tips = generate_insights(&backend, &[], "USD").await;
        assert_eq!(tips, vec![EMPTY_MESSAGE.to_string()]);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_prompt_contents() {
        let backend = StubBackend::replying("[\"one\", \"two\", \"three\"]");
        let tips = generate_insights(&backend, &expenses(4), "USD").await;
        assert_eq!(tips.len(), 3);

        let seen = backend.seen.lock().unwrap();
        let prompt = &seen[0];
        assert_eq!(prompt.temperature, 0.8);
        assert_eq!(prompt.max_tokens, 400);
        let body = &prompt.messages[1].content;
        assert!(body.contains("exactly 3 casual"));
        assert!(body.contains("Total spent: $40.00"));
        assert!(body.contains("Number of expenses: 4"));
    }

    #[tokio::test]
    async fn test_malformed_reply_falls_back() {
        let backend = StubBackend::replying("Spend less!");
        let tips = generate_insights(&backend, &expenses(1), "USD").await;
        assert_eq!(tips, vec![FALLBACK_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_error_falls_back() {
        let backend = StubBackend::failing();
        let tips = generate_insights(&backend, &expenses(1), "USD").await;
        assert_eq!(tips, vec![FALLBACK_MESSAGE.to_string()]);
    }
}
