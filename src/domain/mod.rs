// Domain layer - View-model records handed to the presentation collaborator
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod screen;
pub mod series;
