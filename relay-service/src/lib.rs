pub mod config;
pub mod dtos;
pub mod handlers;
pub mod mime;
pub mod models;
pub mod prompts;
pub mod services;
pub mod startup;
