// Infrastructure layer - External dependencies and adapters
pub mod canned_chat_backend;
pub mod config;
pub mod http_response;
