pub mod config;
pub mod record;
pub mod scoring;
pub mod view;
