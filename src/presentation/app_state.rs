// Application state for HTTP handlers
use crate::application::chat_backend::ChatBackend;
use crate::application::chat_service::ChatService;
use crate::application::dashboard_service::DashboardService;
use crate::application::navigation_service::NavigationService;
use crate::infrastructure::config::{AppConfig, ConfigError};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub navigation_service: NavigationService,
    pub chat_service: ChatService,
}

impl AppState {
    pub fn new(app_config: &AppConfig, chat_backend: Arc<dyn ChatBackend>) -> Result<Self, ConfigError> {
        let dashboard_service = DashboardService::new(app_config.dashboard.to_plan()?)?;
        let chat_service = ChatService::new(chat_backend);
        let navigation_service = NavigationService::new(
            app_config.page.to_page_info(),
            dashboard_service,
            chat_service.clone(),
        );

        Ok(Self {
            navigation_service,
            chat_service,
        })
    }
}
