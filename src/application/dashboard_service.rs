// Dashboard service - Use case for building the Home screen
use crate::application::random::render_rng;
use crate::application::view_model_builder::{
    build_cumulative_trend, build_hourly_pattern, build_metric_cards, build_monthly_trend,
    build_segment_shares,
};
use crate::domain::dashboard::{ChartData, ChartKind, HomeDashboard};
use crate::domain::error::ViewModelError;
use crate::domain::series::{SeriesSpec, validate_series_names};
use chrono::NaiveDate;

pub const DASHBOARD_TITLE: &str = "Grocery HeartBeat Dashboard";

/// Validated parameters for the synthetic Home screen charts.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPlan {
    pub trend_start: NaiveDate,
    pub trend_end: NaiveDate,
    pub trend_series: Vec<SeriesSpec>,
    pub hourly_hours: u32,
    pub hourly_mean: f64,
    pub hourly_stddev: f64,
    pub growth_weeks: u32,
    pub growth_series: Vec<String>,
}

impl DashboardPlan {
    /// Checks everything a render would otherwise trip over, so a plan that
    /// made it into a `DashboardService` always renders.
    pub fn validate(&self) -> Result<(), ViewModelError> {
        validate_series_names(self.trend_series.iter().map(SeriesSpec::name))?;
        SeriesSpec::new("Orders", self.hourly_mean, self.hourly_stddev)?;
        validate_series_names(self.growth_series.iter().map(String::as_str))?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct DashboardService {
    plan: DashboardPlan,
}

impl DashboardService {
    pub fn new(plan: DashboardPlan) -> Result<Self, ViewModelError> {
        plan.validate()?;
        Ok(Self { plan })
    }

    /// Renders the Home screen. One generator is drawn from `seed` and
    /// threaded through the charts in display order.
    pub fn build(&self, seed: Option<u64>) -> Result<HomeDashboard, ViewModelError> {
        let mut rng = render_rng(seed);
        let plan = &self.plan;

        let trend = build_monthly_trend(plan.trend_start, plan.trend_end, &plan.trend_series, &mut rng)?;
        if trend.is_empty() {
            tracing::warn!(
                "Purchase trend range {}..{} contains no month end",
                plan.trend_start,
                plan.trend_end
            );
        }

        let hourly = build_hourly_pattern(plan.hourly_hours, plan.hourly_mean, plan.hourly_stddev, &mut rng)?;
        let growth = build_cumulative_trend(plan.growth_weeks, &plan.growth_series, &mut rng)?;

        tracing::debug!(
            seed = ?seed,
            trend_points = trend.points.len(),
            hourly_points = hourly.len(),
            growth_points = growth.points.len(),
            "Built home dashboard"
        );

        Ok(HomeDashboard {
            title: DASHBOARD_TITLE.to_string(),
            metric_cards: build_metric_cards().to_vec(),
            purchase_trends: ChartData::new(
                "purchase-trends",
                "Monthly Purchase Trends",
                ChartKind::MultiLine,
                trend,
            )
            .with_axis_labels("Date", "Orders"),
            customer_segments: ChartData::new(
                "customer-segments",
                "Customer Segment Distribution",
                ChartKind::Pie,
                build_segment_shares(),
            ),
            hourly_pattern: ChartData::new("hourly-pattern", "Hourly Order Pattern", ChartKind::Bar, hourly)
                .with_axis_labels("Hour", "Orders"),
            growth: ChartData::new("yoy-growth", "Year-over-Year Growth", ChartKind::MultiLine, growth)
                .with_axis_labels("Week", "Cumulative Growth"),
        })
    }
}
