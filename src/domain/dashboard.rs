// Screen payload domain models
use super::chat::{ChatExchange, FrequencyBar};
use super::metrics::{MetricCard, SegmentShare};
use super::series::{TimeSeries, TimeSeriesPoint};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    MultiLine,
    Pie,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData<T> {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub data: T,
}

impl<T> ChartData<T> {
    pub fn new(id: &str, title: &str, kind: ChartKind, data: T) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            x_label: None,
            y_label: None,
            data,
        }
    }

    pub fn with_axis_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = Some(x_label.to_string());
        self.y_label = Some(y_label.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeDashboard {
    pub title: String,
    pub metric_cards: Vec<MetricCard>,
    pub purchase_trends: ChartData<TimeSeries>,
    pub customer_segments: ChartData<Vec<SegmentShare>>,
    pub hourly_pattern: ChartData<Vec<TimeSeriesPoint>>,
    pub growth: ChartData<TimeSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatScreen {
    pub title: String,
    pub input_label: String,
    pub input_placeholder: String,
    pub example_queries: Vec<String>,
    pub exchange: ChatExchange,
    /// Markdown rendering of `exchange`.
    pub transcript: String,
    pub pattern_button_label: String,
    /// Present only after the user asked for the purchase pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_pattern: Option<ChartData<Vec<FrequencyBar>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Home(HomeDashboard),
    Chat(ChatScreen),
    Placeholder { title: String },
}
