// Dijabeto - rule-based recipe assistant
// Library exports

// Core modules
pub mod analytics;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod config;
pub mod recommend;
pub mod text;
