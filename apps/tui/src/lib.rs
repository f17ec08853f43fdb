pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use api::{AnalysisRequest, AnalysisResponse, ApiClient, ApiError, Company};
pub use domain::{Category, ReportCode, Tier};
