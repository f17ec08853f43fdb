use std::time::Instant;

use throbber_widgets_tui::ThrobberState;

use crate::api::{AnalysisResponse, ApiError, Company};
use crate::app::actions::{AppEvent, Command};
use crate::app::form::SearchForm;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::lifecycle::{AnalysisEvent, AnalysisMachine, AnalysisState};
use crate::domain::Category;

/// Which part of the dashboard receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Company,
    Year,
    Report,
    Results,
}

impl Focus {
    const ORDER: [Self; 4] = [Self::Company, Self::Year, Self::Report, Self::Results];

    const fn index(self) -> usize {
        match self {
            Self::Company => 0,
            Self::Year => 1,
            Self::Report => 2,
            Self::Results => 3,
        }
    }

    pub const fn next(self) -> Self {
        Self::ORDER[wrap_increment(self.index(), Self::ORDER.len())]
    }

    pub const fn prev(self) -> Self {
        Self::ORDER[wrap_decrement(self.index(), Self::ORDER.len())]
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub form: SearchForm,
    pub focus: Focus,
    pub analysis: AnalysisMachine,
    pub status_message: String,
    pub show_help: bool,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub throbber: ThrobberState,
    pub category_tab_index: usize,
    pub card_scroll: usize,
    pub backend_healthy: Option<bool>,
    pub api_url: String,
}

impl App {
    pub fn new(latest_year: i32) -> Self {
        Self {
            running: true,
            form: SearchForm::new(latest_year),
            focus: Focus::Company,
            analysis: AnalysisMachine::new(),
            status_message: String::new(),
            show_help: false,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            throbber: ThrobberState::default(),
            category_tab_index: 0,
            card_scroll: 0,
            backend_healthy: None,
            api_url: String::new(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.is_loading() {
            self.throbber.calc_next();
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.analysis.is_loading()
    }

    pub fn response(&self) -> Option<&AnalysisResponse> {
        self.analysis.response()
    }

    pub fn error(&self) -> Option<&str> {
        self.analysis.error()
    }

    /// Categories that have indicators in the current result.
    pub fn result_categories(&self) -> Vec<Category> {
        self.response()
            .and_then(AnalysisResponse::report)
            .map(crate::api::FinancialData::populated_categories)
            .unwrap_or_default()
    }

    pub fn selected_category(&self) -> Option<Category> {
        let categories = self.result_categories();
        categories
            .get(self.category_tab_index.min(categories.len().saturating_sub(1)))
            .copied()
    }

    /// Clears the previous outcome and starts an analysis for the form.
    ///
    /// Returns `None` when the name is empty or a request is in flight.
    pub fn begin_analysis(&mut self) -> Option<Command> {
        if self.is_loading() {
            self.status_message = "An analysis is already running.".to_string();
            return None;
        }

        let Some(request) = self.form.build_request() else {
            self.status_message = "Enter a company name first.".to_string();
            return None;
        };

        match self.analysis.submit() {
            Ok(generation) => {
                self.form.hide_suggestions();
                self.status_message.clear();
                self.category_tab_index = 0;
                self.card_scroll = 0;
                tracing::info!(generation, company = %request.company_name, "analysis submitted");
                Some(Command::Analyze {
                    generation,
                    request,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "analysis submit rejected");
                None
            }
        }
    }

    pub fn finish_analysis(&mut self, generation: u64, result: Result<AnalysisResponse, ApiError>) {
        if generation != self.analysis.generation() {
            tracing::debug!(
                generation,
                latest = self.analysis.generation(),
                "dropping stale analysis result"
            );
            return;
        }

        let event = match result {
            Ok(response) => {
                tracing::info!(generation, success = response.success, "analysis finished");
                AnalysisEvent::Completed(response)
            }
            Err(e) => {
                tracing::error!(generation, error = %e, "analysis failed");
                AnalysisEvent::Failed(e.to_string())
            }
        };

        if let Err(e) = self.analysis.process_event(event) {
            tracing::warn!(error = %e, "ignoring analysis completion");
        }
    }

    /// Search failures degrade to an empty suggestion list.
    pub fn finish_search(&mut self, generation: u64, result: Result<Vec<Company>, ApiError>) {
        let companies = result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "company search failed");
            Vec::new()
        });
        self.form.apply_search_results(generation, companies);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AnalysisFinished { generation, result } => {
                self.finish_analysis(generation, result);
            }
            AppEvent::SearchFinished { generation, result } => {
                self.finish_search(generation, result);
            }
            AppEvent::HealthChecked(healthy) => {
                tracing::info!(healthy, "backend health checked");
                self.backend_healthy = Some(healthy);
            }
        }
    }

    /// Drops the shown result or error, keeping the form as typed.
    pub fn clear_results(&mut self) {
        if matches!(
            self.analysis.state(),
            AnalysisState::Success(_) | AnalysisState::Error(_)
        ) && self.analysis.process_event(AnalysisEvent::Clear).is_ok()
        {
            self.category_tab_index = 0;
            self.card_scroll = 0;
            if self.focus == Focus::Results {
                self.focus = Focus::Company;
            }
        }
    }
}
