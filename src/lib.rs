// Health risk screening: dataset loading, classifier training, and the
// HTTP API that serves screening reports.

pub mod api;
pub mod config;
pub mod data;
pub mod models;
pub mod services;
