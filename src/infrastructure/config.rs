use crate::application::dashboard_service::DashboardPlan;
use crate::application::navigation_service::PageInfo;
use crate::domain::error::ViewModelError;
use crate::domain::series::SeriesSpec;
use chrono::NaiveDate;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid dashboard settings: {0}")]
    Invalid(#[from] ViewModelError),

    #[error("invalid server address '{0}'")]
    Address(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub page: PageSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::Address(addr))
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PageSettings {
    pub title: String,
    pub icon: String,
    pub sidebar_title: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Grocery HeartBeat".to_string(),
            icon: "🛒".to_string(),
            sidebar_title: "🛒 GHB".to_string(),
        }
    }
}

impl PageSettings {
    pub fn to_page_info(&self) -> PageInfo {
        PageInfo {
            title: self.title.clone(),
            icon: self.icon.clone(),
            sidebar_title: self.sidebar_title.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DashboardSettings {
    pub trend: TrendSettings,
    pub hourly: HourlySettings,
    pub growth: GrowthSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TrendSettings {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub series: Vec<SeriesSettings>,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or_default(),
            series: vec![
                SeriesSettings::new("WFM Orders", 100.0, 10.0),
                SeriesSettings::new("Fresh Orders", 80.0, 15.0),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeriesSettings {
    pub name: String,
    pub mean: f64,
    pub stddev: f64,
}

impl SeriesSettings {
    fn new(name: &str, mean: f64, stddev: f64) -> Self {
        Self {
            name: name.to_string(),
            mean,
            stddev,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HourlySettings {
    pub hours: u32,
    pub mean: f64,
    pub stddev: f64,
}

impl Default for HourlySettings {
    fn default() -> Self {
        Self {
            hours: 24,
            mean: 40.0,
            stddev: 15.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GrowthSettings {
    pub weeks: u32,
    pub series: Vec<String>,
}

impl Default for GrowthSettings {
    fn default() -> Self {
        Self {
            weeks: 52,
            series: vec!["WFM".to_string(), "Fresh".to_string()],
        }
    }
}

impl DashboardSettings {
    pub fn to_plan(&self) -> Result<DashboardPlan, ConfigError> {
        let trend_series = self
            .trend
            .series
            .iter()
            .map(|s| SeriesSpec::new(s.name.clone(), s.mean, s.stddev))
            .collect::<Result<Vec<_>, _>>()?;

        let plan = DashboardPlan {
            trend_start: self.trend.start,
            trend_end: self.trend.end,
            trend_series,
            hourly_hours: self.hourly.hours,
            hourly_mean: self.hourly.mean,
            hourly_stddev: self.hourly.stddev,
            growth_weeks: self.growth.weeks,
            growth_series: self.growth.series.clone(),
        };
        plan.validate()?;
        Ok(plan)
    }
}

/// Loads `config/dashboard.*` when present, then `GHB__`-prefixed
/// environment overrides (e.g. `GHB__SERVER__PORT=9000`).
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("GHB")
                .separator("__")
                .try_parsing(true),
        );

    build_app_config(builder)
}

fn build_app_config(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let app_config: AppConfig = builder.build()?.try_deserialize()?;

    // Validated once here so renders cannot fail on settings.
    app_config.dashboard.to_plan()?;
    app_config.server.socket_addr()?;

    Ok(app_config)
}
