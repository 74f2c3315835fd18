pub mod app;
pub mod bridge;
pub mod config;
pub mod screens;
pub mod utils;
