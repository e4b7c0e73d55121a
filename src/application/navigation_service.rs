// Navigation service - Use case for picking and rendering a screen
use crate::application::chat_service::ChatService;
use crate::application::dashboard_service::DashboardService;
use crate::domain::dashboard::ScreenView;
use crate::domain::error::ViewModelError;
use crate::domain::screen::{Screen, ScreenLink};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct PageInfo {
    pub title: String,
    pub icon: String,
    pub sidebar_title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub page_title: String,
    pub page_icon: String,
    pub sidebar_title: String,
    pub screens: Vec<ScreenLink>,
}

#[derive(Clone)]
pub struct NavigationService {
    page: PageInfo,
    dashboard_service: DashboardService,
    chat_service: ChatService,
}

impl NavigationService {
    pub fn new(page: PageInfo, dashboard_service: DashboardService, chat_service: ChatService) -> Self {
        Self {
            page,
            dashboard_service,
            chat_service,
        }
    }

    pub fn navigation(&self) -> Navigation {
        Navigation {
            page_title: self.page.title.clone(),
            page_icon: self.page.icon.clone(),
            sidebar_title: self.page.sidebar_title.clone(),
            screens: Screen::ALL.into_iter().map(ScreenLink::from).collect(),
        }
    }

    pub fn render(
        &self,
        screen: Screen,
        seed: Option<u64>,
        show_pattern: bool,
    ) -> Result<ScreenView, ViewModelError> {
        let view = match screen {
            Screen::Home => ScreenView::Home(self.dashboard_service.build(seed)?),
            Screen::ChatInterface => ScreenView::Chat(self.chat_service.chat_screen(show_pattern)),
            Screen::Analytics | Screen::Settings => ScreenView::Placeholder {
                title: screen.label().to_string(),
            },
        };
        Ok(view)
    }
}
