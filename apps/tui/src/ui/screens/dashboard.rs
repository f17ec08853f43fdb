use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::AnalysisResponse;
use crate::app::{App, Focus};
use crate::ui::screens::help::render_help_popup;
use crate::ui::widgets::form::{render_search_form, render_suggestions};
use crate::ui::widgets::metrics::render_metrics_panel;
use crate::ui::widgets::palette::{ACCENT, MUTED};
use crate::ui::widgets::radar::render_radar_panel;
use crate::ui::widgets::status::render_status;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(1, 0));
    let layout = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(6), // Search form
        Constraint::Length(4), // Status
        Constraint::Min(0),    // Results
        Constraint::Length(1), // Shortcuts hint
    ])
    .split(area);

    render_title(app, f, layout[0]);
    let anchor = render_search_form(app, f, layout[1]);
    render_status(app, f, layout[2]);
    if let Some(response) = app.response() {
        render_results(app, response, f, layout[3]);
    }
    render_shortcuts(f, layout[4]);

    if app.focus == Focus::Company && app.form.suggestions_visible() {
        render_suggestions(app, f, anchor, area);
    }

    if app.show_help {
        render_help_popup(f, area);
    }
}

fn health_span(healthy: Option<bool>) -> Span<'static> {
    match healthy {
        Some(true) => Span::styled("● online", Style::default().fg(Color::Green)),
        Some(false) => Span::styled("● offline", Style::default().fg(Color::Red)),
        None => Span::styled("● checking", Style::default().fg(MUTED)),
    }
}

fn render_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(inner);

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "📊 Financial Health ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Dashboard",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(title, columns[0]);

    let backend = Paragraph::new(TextLine::from(vec![
        Span::styled(app.api_url.clone(), Style::default().fg(MUTED)),
        Span::raw(" "),
        health_span(app.backend_healthy),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(backend, columns[1]);
}

/// Charts appear only for a successful response that carries data; the
/// radar panel is optional.
fn render_results(app: &App, response: &AnalysisResponse, f: &mut Frame<'_>, area: Rect) {
    let Some(data) = response.report() else {
        return;
    };

    match response.radar() {
        Some(radar) => {
            let columns =
                Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .split(area);
            render_radar_panel(radar, &data.company_name, &data.year, f, columns[0]);
            render_metrics_panel(app, data, f, columns[1]);
        }
        None => render_metrics_panel(app, data, f, area),
    }
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(MUTED);
    let line = TextLine::from(vec![
        Span::styled("Tab", key),
        Span::styled(" focus  ", text),
        Span::styled("Enter", key),
        Span::styled(" analyze  ", text),
        Span::styled("←/→", key),
        Span::styled(" tabs  ", text),
        Span::styled("F5", key),
        Span::styled(" health  ", text),
        Span::styled("F1", key),
        Span::styled(" help  ", text),
        Span::styled("Esc", key),
        Span::styled(" back/quit", text),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
