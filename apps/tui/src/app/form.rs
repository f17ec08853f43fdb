use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::api::{AnalysisRequest, Company};
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::domain::{fiscal_years, ReportCode};

/// Characters required before search-as-you-type kicks in.
pub const MIN_SEARCH_CHARS: usize = 2;

/// A company search the form wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct SearchForm {
    pub company_name: String,
    pub years: Vec<i32>,
    pub year_index: usize,
    pub report: ReportCode,
    pub suggestions: Vec<Company>,
    pub show_suggestions: bool,
    pub suggestion_index: Option<usize>,
    search_generation: u64,
}

impl SearchForm {
    pub fn new(latest_year: i32) -> Self {
        Self {
            company_name: String::new(),
            years: fiscal_years(latest_year),
            year_index: 0,
            report: ReportCode::default(),
            suggestions: Vec::new(),
            show_suggestions: false,
            suggestion_index: None,
            search_generation: 0,
        }
    }

    pub fn year(&self) -> i32 {
        self.years.get(self.year_index).copied().unwrap_or_default()
    }

    pub const fn search_generation(&self) -> u64 {
        self.search_generation
    }

    pub fn insert_char(&mut self, ch: char) -> Option<SearchQuery> {
        self.company_name.push(ch);
        self.name_changed()
    }

    pub fn backspace(&mut self) -> Option<SearchQuery> {
        self.company_name.pop()?;
        self.name_changed()
    }

    pub fn set_company_name(&mut self, name: impl Into<String>) -> Option<SearchQuery> {
        self.company_name = name.into();
        self.name_changed()
    }

    // Every edit supersedes whatever search is still in flight.
    fn name_changed(&mut self) -> Option<SearchQuery> {
        self.search_generation += 1;
        self.suggestion_index = None;

        let query = self.company_name.trim();
        if query.chars().count() < MIN_SEARCH_CHARS {
            self.show_suggestions = false;
            return None;
        }

        Some(SearchQuery {
            generation: self.search_generation,
            query: query.to_string(),
        })
    }

    /// Applies search results if they answer the latest query.
    pub fn apply_search_results(&mut self, generation: u64, companies: Vec<Company>) -> bool {
        if generation != self.search_generation {
            tracing::debug!(
                generation,
                latest = self.search_generation,
                "dropping stale search results"
            );
            return false;
        }

        self.suggestions = rank_by_query(companies, self.company_name.trim());
        self.show_suggestions = true;
        self.suggestion_index = None;
        true
    }

    pub fn suggestions_visible(&self) -> bool {
        self.show_suggestions && !self.suggestions.is_empty()
    }

    pub fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
        self.suggestion_index = None;
    }

    pub fn next_suggestion(&mut self) {
        let len = self.suggestions.len();
        self.suggestion_index = Some(match self.suggestion_index {
            Some(index) => wrap_increment(index, len),
            None => 0,
        });
    }

    pub fn prev_suggestion(&mut self) {
        let len = self.suggestions.len();
        self.suggestion_index = Some(match self.suggestion_index {
            Some(index) => wrap_decrement(index, len),
            None => len.saturating_sub(1),
        });
    }

    /// Fills the name from a suggestion and closes the list.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(company) = self.suggestions.get(index) else {
            return false;
        };

        self.company_name = company.name.clone();
        self.search_generation += 1;
        self.hide_suggestions();
        true
    }

    pub fn next_year(&mut self) {
        self.year_index = wrap_increment(self.year_index, self.years.len());
    }

    pub fn prev_year(&mut self) {
        self.year_index = wrap_decrement(self.year_index, self.years.len());
    }

    pub fn next_report(&mut self) {
        let index = wrap_increment(self.report.index(), ReportCode::ALL.len());
        self.report = ReportCode::from_index(index).unwrap_or_default();
    }

    pub fn prev_report(&mut self) {
        let index = wrap_decrement(self.report.index(), ReportCode::ALL.len());
        self.report = ReportCode::from_index(index).unwrap_or_default();
    }

    pub fn has_company(&self) -> bool {
        !self.company_name.trim().is_empty()
    }

    /// The analysis request for the current fields, if a name was entered.
    pub fn build_request(&self) -> Option<AnalysisRequest> {
        let name = self.company_name.trim();
        if name.is_empty() {
            return None;
        }
        Some(AnalysisRequest::new(name, self.year(), self.report))
    }
}

/// Orders companies by fuzzy score against the query; ties and non-matches
/// keep the backend's order.
fn rank_by_query(mut companies: Vec<Company>, query: &str) -> Vec<Company> {
    if query.is_empty() {
        return companies;
    }

    let matcher = SkimMatcherV2::default();
    companies.sort_by_cached_key(|company| {
        std::cmp::Reverse(matcher.fuzzy_match(&company.name, query).unwrap_or(i64::MIN))
    });
    companies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str) -> Company {
        Company {
            name: name.to_string(),
            code: format!("{:08}", name.len()),
        }
    }

    #[test]
    fn defaults_to_latest_year_and_q3_report() {
        let form = SearchForm::new(2024);
        assert_eq!(form.year(), 2024);
        assert_eq!(form.years, vec![2024, 2023, 2022, 2021, 2020]);
        assert_eq!(form.report, ReportCode::ThirdQuarter);
    }

    #[test]
    fn single_character_does_not_search() {
        let mut form = SearchForm::new(2024);
        assert_eq!(form.insert_char('삼'), None);
        assert_eq!(form.set_company_name(" a "), None);
    }

    #[test]
    fn two_characters_issue_a_search() {
        let mut form = SearchForm::new(2024);
        form.insert_char('삼');
        let query = form.insert_char('성');
        assert_eq!(
            query,
            Some(SearchQuery {
                generation: 2,
                query: "삼성".to_string()
            })
        );
    }

    #[test]
    fn shrinking_below_two_characters_hides_suggestions() {
        let mut form = SearchForm::new(2024);
        let query = form.set_company_name("삼성");
        let generation = query.map(|q| q.generation).unwrap_or_default();
        assert!(form.apply_search_results(generation, vec![company("삼성전자")]));
        assert!(form.suggestions_visible());

        assert_eq!(form.backspace(), None);
        assert!(!form.suggestions_visible());
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut form = SearchForm::new(2024);
        let first = form.set_company_name("삼성").map(|q| q.generation);
        let second = form.set_company_name("삼성전").map(|q| q.generation);

        assert!(form.apply_search_results(second.unwrap_or_default(), vec![company("삼성전자")]));
        assert!(!form.apply_search_results(first.unwrap_or_default(), vec![company("삼성물산")]));
        assert_eq!(form.suggestions, vec![company("삼성전자")]);
    }

    #[test]
    fn selecting_a_suggestion_fills_name_and_hides_list() {
        let mut form = SearchForm::new(2024);
        let generation = form.set_company_name("SK").map(|q| q.generation);
        form.apply_search_results(
            generation.unwrap_or_default(),
            vec![company("SK하이닉스"), company("SK텔레콤")],
        );

        form.next_suggestion();
        form.next_suggestion();
        let index = form.suggestion_index.unwrap_or_default();
        assert!(form.select_suggestion(index));
        assert_eq!(form.company_name, form.suggestions[index].name);
        assert!(!form.suggestions_visible());
        assert!(!form.select_suggestion(99));
    }

    #[test]
    fn suggestion_cursor_wraps() {
        let mut form = SearchForm::new(2024);
        let generation = form.set_company_name("LG").map(|q| q.generation);
        form.apply_search_results(
            generation.unwrap_or_default(),
            vec![company("LG전자"), company("LG화학")],
        );

        form.prev_suggestion();
        assert_eq!(form.suggestion_index, Some(1));
        form.next_suggestion();
        assert_eq!(form.suggestion_index, Some(0));
    }

    #[test]
    fn closer_matches_rank_first() {
        let ranked = rank_by_query(
            vec![company("현대모비스"), company("현대자동차"), company("기아")],
            "현대자동",
        );
        assert_eq!(ranked[0].name, "현대자동차");
        assert_eq!(ranked[2].name, "기아");
    }

    #[test]
    fn year_and_report_cycle_through_closed_sets() {
        let mut form = SearchForm::new(2024);
        form.prev_year();
        assert_eq!(form.year(), 2020);
        form.next_year();
        assert_eq!(form.year(), 2024);

        form.prev_report();
        assert_eq!(form.report, ReportCode::FirstQuarter);
        form.next_report();
        form.next_report();
        assert_eq!(form.report, ReportCode::HalfYear);
    }

    #[test]
    fn request_requires_a_name() {
        let mut form = SearchForm::new(2024);
        form.set_company_name("   ");
        assert!(form.build_request().is_none());

        form.set_company_name(" 네이버 ");
        let request = form.build_request();
        assert_eq!(
            request,
            Some(AnalysisRequest::new("네이버", 2024, ReportCode::ThirdQuarter))
        );
    }
}
