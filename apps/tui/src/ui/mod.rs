pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::dashboard::render_dashboard(app, f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AnalysisResponse;
    use crate::app::lifecycle::AnalysisEvent;
    use crate::app::Focus;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use serde_json::json;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal.draw(|f| ui(app, f)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with(body: serde_json::Value) -> App {
        let response: AnalysisResponse = serde_json::from_value(body).expect("response");
        let mut app = App::new(2023);
        app.analysis.submit().expect("submit");
        app.analysis
            .process_event(AnalysisEvent::Completed(response))
            .expect("complete");
        app.focus = Focus::Results;
        app
    }

    fn data() -> serde_json::Value {
        json!({
            "company_name": "삼성전자",
            "year": "2023",
            "data": [
                {"idx_cl_nm": "수익성", "idx_nm": "ROE", "idx_val": 12.0},
                {"idx_cl_nm": "안정성", "idx_nm": "유동비율(%)", "idx_val": 250.3}
            ]
        })
    }

    #[test]
    fn idle_dashboard_renders_form() {
        let mut app = App::new(2023);
        app.api_url = "http://localhost:8000".to_string();
        let screen = render(&app);
        assert!(screen.contains("Dashboard"));
        assert!(screen.contains("localhost:8000"));
        assert!(!screen.contains("Indicators"));
    }

    #[test]
    fn successful_analysis_shows_both_panels() {
        let app = app_with(json!({
            "success": true,
            "message": "done",
            "data": data(),
            "radar_data": {
                "categories": ["수익성", "안정성", "성장성", "활동성"],
                "values": [60.0, 70.0, 38.75, 16.0],
                "overall_score": 46.19,
                "grade": "D"
            }
        }));
        let screen = render(&app);
        assert!(screen.contains("Indicators"));
        assert!(screen.contains("Financial Health Score"));
    }

    #[test]
    fn missing_radar_keeps_the_metrics_panel() {
        let app = app_with(json!({"success": true, "message": "done", "data": data()}));
        let screen = render(&app);
        assert!(screen.contains("Indicators"));
        assert!(!screen.contains("Financial Health Score"));
    }

    #[test]
    fn empty_radar_does_not_panic() {
        let app = app_with(json!({
            "success": true,
            "message": "done",
            "data": data(),
            "radar_data": {"categories": [], "values": [], "overall_score": 0.0, "grade": ""}
        }));
        let screen = render(&app);
        assert!(screen.contains("No category scores"));
    }

    #[test]
    fn unsuccessful_response_renders_no_charts() {
        let app = app_with(json!({
            "success": false,
            "message": "재무 데이터를 찾을 수 없습니다.",
            "data": data()
        }));
        let screen = render(&app);
        assert!(!screen.contains("Indicators"));
        assert!(!screen.contains("Financial Health Score"));
    }

    #[test]
    fn help_overlay_lists_shortcuts() {
        let mut app = App::new(2023);
        app.show_help = true;
        let screen = render(&app);
        assert!(screen.contains("Help & Keyboard Shortcuts"));
    }
}
