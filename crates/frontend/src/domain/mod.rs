pub mod chat;
pub mod dashboard;
pub mod settings;
pub mod upload;
