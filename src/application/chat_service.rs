// Chat service - Canned transcript and purchase pattern for the chat screen
use crate::application::chat_backend::ChatBackend;
use crate::domain::chat::{ChatExchange, FrequencyBar, LineItem, PurchaseGroup};
use crate::domain::dashboard::{ChartData, ChartKind, ChatScreen};
use chrono::NaiveDate;
use std::fmt::Write;
use std::sync::Arc;

pub const CHAT_TITLE: &str = "Interactive Chat Interface";
const BOT_NAME: &str = "GHB";
const INPUT_LABEL: &str = "Ask about your grocery data";
const INPUT_PLACEHOLDER: &str = "e.g., Show my purchases from last week";
const PATTERN_BUTTON_LABEL: &str = "Show Purchase Pattern";
const EXAMPLE_QUERIES: [&str; 3] = [
    "What are my most frequent purchases?",
    "Show my cross-banner shopping patterns",
    "Compare my organic vs non-organic spending",
];

#[derive(Clone)]
pub struct ChatService {
    backend: Arc<dyn ChatBackend>,
}

impl ChatService {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    /// Hands the text to the backend. The chat screen is unaffected.
    pub async fn accept_query(&self, text: &str) {
        self.backend.accept_query(text).await;
    }

    pub fn chat_screen(&self, show_pattern: bool) -> ChatScreen {
        let exchange = build_canned_exchange();
        let transcript = render_transcript(&exchange);
        tracing::debug!(
            items = exchange.line_items().count(),
            total = %exchange.total,
            show_pattern,
            "Built chat screen"
        );

        let purchase_pattern = show_pattern.then(|| {
            ChartData::new(
                "purchase-pattern",
                "Most Frequently Purchased Items",
                ChartKind::Bar,
                build_frequency_bars(),
            )
            .with_axis_labels("Items", "Number of Purchases")
        });

        ChatScreen {
            title: CHAT_TITLE.to_string(),
            input_label: INPUT_LABEL.to_string(),
            input_placeholder: INPUT_PLACEHOLDER.to_string(),
            example_queries: EXAMPLE_QUERIES.iter().map(|q| q.to_string()).collect(),
            exchange,
            transcript,
            pattern_button_label: PATTERN_BUTTON_LABEL.to_string(),
            purchase_pattern,
        }
    }
}

pub fn build_canned_exchange() -> ChatExchange {
    ChatExchange::new(
        "Show my purchases from last week",
        vec![
            PurchaseGroup::new(
                "Whole Foods Market",
                purchase_date(3),
                vec![
                    LineItem::new("Organic Bananas", 299),
                    LineItem::new("Almond Milk", 399),
                    LineItem::new("Greek Yogurt", 499),
                ],
            ),
            PurchaseGroup::new(
                "Amazon Fresh",
                purchase_date(5),
                vec![
                    LineItem::new("Bread", 349),
                    LineItem::new("Eggs", 499),
                    LineItem::new("Milk", 399),
                ],
            ),
        ],
    )
}

pub fn build_frequency_bars() -> Vec<FrequencyBar> {
    let mut bars = vec![
        FrequencyBar::new("Milk", 12),
        FrequencyBar::new("Bread", 10),
        FrequencyBar::new("Eggs", 8),
        FrequencyBar::new("Bananas", 7),
        FrequencyBar::new("Yogurt", 6),
    ];
    bars.sort_by(|a, b| b.count.cmp(&a.count));
    bars
}

/// Markdown transcript of one exchange.
pub fn render_transcript(exchange: &ChatExchange) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "**You:** {}", exchange.user_text);
    let _ = writeln!(out);
    let _ = writeln!(out, "**{}:** Here are your recent purchases:", BOT_NAME);

    for group in &exchange.groups {
        let _ = writeln!(out);
        let _ = writeln!(out, "🛒 {} ({}):", group.source, group.date.format("%b %-d"));
        for item in &group.line_items {
            let _ = writeln!(out, "- {} ({})", item.name, item.price);
        }
    }

    let _ = writeln!(out);
    let _ = write!(out, "Total Spent: {}", exchange.total);
    out
}

// October 2023, the week the canned transcript talks about.
fn purchase_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::Money;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ChatBackend for RecordingBackend {
        async fn accept_query(&self, text: &str) {
            self.queries.lock().unwrap().push(text.to_string());
        }
    }

    #[test]
    fn test_canned_total_is_item_sum() {
        let exchange = build_canned_exchange();
        let item_sum: i64 = exchange.line_items().map(|i| i.price.cents()).sum();

        assert_eq!(exchange.line_items().count(), 6);
        assert_eq!(exchange.total.cents(), item_sum);
        assert_eq!(exchange.total, Money::from_cents(2444));
        assert_eq!(exchange.total.to_string(), "$24.44");
    }

    #[test]
    fn test_canned_groups() {
        let exchange = build_canned_exchange();
        let sources: Vec<&str> = exchange.groups.iter().map(|g| g.source.as_str()).collect();
        assert_eq!(sources, vec!["Whole Foods Market", "Amazon Fresh"]);
        assert!(exchange.groups.iter().all(|g| g.line_items.len() == 3));
    }

    #[test]
    fn test_frequency_bars_sorted_descending() {
        let bars = build_frequency_bars();
        let counts: Vec<u32> = bars.iter().map(|b| b.count).collect();
        let names: Vec<&str> = bars.iter().map(|b| b.item_name.as_str()).collect();

        assert_eq!(counts, vec![12, 10, 8, 7, 6]);
        assert_eq!(names, vec!["Milk", "Bread", "Eggs", "Bananas", "Yogurt"]);
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_transcript_text() {
        let transcript = render_transcript(&build_canned_exchange());

        assert!(transcript.starts_with("**You:** Show my purchases from last week\n"));
        assert!(transcript.contains("**GHB:** Here are your recent purchases:"));
        assert!(transcript.contains("🛒 Whole Foods Market (Oct 3):\n- Organic Bananas ($2.99)"));
        assert!(transcript.contains("🛒 Amazon Fresh (Oct 5):"));
        assert!(transcript.contains("- Milk ($3.99)"));
        assert!(transcript.ends_with("Total Spent: $24.44"));
    }

    #[test]
    fn test_pattern_only_on_request() {
        let service = ChatService::new(Arc::new(RecordingBackend::default()));
        assert!(service.chat_screen(false).purchase_pattern.is_none());

        let chart = service.chat_screen(true).purchase_pattern.unwrap();
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.data.len(), 5);
        assert_eq!(chart.y_label.as_deref(), Some("Number of Purchases"));
    }

    #[tokio::test]
    async fn test_accept_query_reaches_backend_and_changes_nothing() {
        let backend = Arc::new(RecordingBackend::default());
        let service = ChatService::new(backend.clone());

        let before = service.chat_screen(false);
        service.accept_query("What are my most frequent purchases?").await;
        let after = service.chat_screen(false);

        assert_eq!(before, after);
        assert_eq!(
            *backend.queries.lock().unwrap(),
            vec!["What are my most frequent purchases?".to_string()]
        );
    }
}
