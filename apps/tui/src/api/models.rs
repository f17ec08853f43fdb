use serde::{Deserialize, Serialize};

use crate::domain::{Category, ReportCode};

/// Company resolved by the backend name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub company_name: String,
    pub year: String,
    #[serde(rename = "reprt_code")]
    pub report_code: String,
}

impl AnalysisRequest {
    pub fn new(company_name: impl Into<String>, year: i32, report: ReportCode) -> Self {
        Self {
            company_name: company_name.into(),
            year: year.to_string(),
            report_code: report.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialIndex {
    #[serde(rename = "idx_cl_nm")]
    pub category_label: String,
    #[serde(rename = "idx_nm")]
    pub indicator_name: String,
    #[serde(rename = "idx_val")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialData {
    pub company_name: String,
    pub year: String,
    #[serde(rename = "data", default)]
    pub indices: Vec<FinancialIndex>,
}

impl FinancialData {
    pub fn indices_for(&self, category: Category) -> Vec<&FinancialIndex> {
        self.indices
            .iter()
            .filter(|index| index.category_label == category.as_str())
            .collect()
    }

    /// Categories with at least one indicator, in display order.
    pub fn populated_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| {
                self.indices
                    .iter()
                    .any(|index| index.category_label == category.as_str())
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChartData {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
    pub overall_score: f64,
    pub grade: String,
}

impl RadarChartData {
    pub fn is_paired(&self) -> bool {
        self.categories.len() == self.values.len()
    }

    /// Category/score pairs; a length mismatch truncates to the shorter side.
    pub fn points(&self) -> Vec<(&str, f64)> {
        self.categories
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<FinancialData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radar_data: Option<RadarChartData>,
}

impl AnalysisResponse {
    /// Financial data to chart, present only for a successful analysis.
    pub fn report(&self) -> Option<&FinancialData> {
        if self.success {
            self.data.as_ref()
        } else {
            None
        }
    }

    /// Radar scores, shown only alongside a chartable report.
    pub fn radar(&self) -> Option<&RadarChartData> {
        self.report().and(self.radar_data.as_ref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HealthResponse {
    #[serde(default)]
    pub status: String,
}
