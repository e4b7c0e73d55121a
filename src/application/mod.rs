// Application layer - Use cases that shape view-models for each screen
pub mod chat_backend;
pub mod chat_service;
pub mod dashboard_service;
pub mod navigation_service;
pub mod random;
pub mod view_model_builder;
