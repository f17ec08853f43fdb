// HTTP client for the financial analysis backend

pub mod client;
pub mod error;
pub mod models;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiClient, DEFAULT_SEARCH_LIMIT};
pub use error::{ApiError, Operation, NETWORK_ERROR_MESSAGE};
pub use models::{AnalysisRequest, AnalysisResponse, Company, FinancialData, FinancialIndex, RadarChartData};
