pub mod article;
pub mod bootstrap;
pub mod client;
pub mod configuration;
pub mod error;
pub mod render;
pub mod store;
pub mod telemetry;
