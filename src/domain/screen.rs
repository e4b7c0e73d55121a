// Navigation domain model
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    ChatInterface,
    Analytics,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::ChatInterface,
        Screen::Analytics,
        Screen::Settings,
    ];

    /// Stable identifier used in routes.
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::ChatInterface => "chat",
            Screen::Analytics => "analytics",
            Screen::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "Dashboard",
            Screen::ChatInterface => "Chat Interface",
            Screen::Analytics => "Analytics",
            Screen::Settings => "Settings",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScreen(pub String);

impl fmt::Display for UnknownScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown screen '{}'", self.0)
    }
}

impl std::error::Error for UnknownScreen {}

impl FromStr for Screen {
    type Err = UnknownScreen;

    /// Accepts route ids and display labels, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Screen::ALL
            .into_iter()
            .find(|screen| {
                screen.id().eq_ignore_ascii_case(wanted) || screen.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreenLink {
    pub id: &'static str,
    pub label: &'static str,
}

impl From<Screen> for ScreenLink {
    fn from(screen: Screen) -> Self {
        Self {
            id: screen.id(),
            label: screen.label(),
        }
    }
}
