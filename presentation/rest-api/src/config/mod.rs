pub mod app_config;
pub mod cors_config;
pub mod env;
pub mod openai_config;
pub mod pipeline_config;
pub mod server_config;
