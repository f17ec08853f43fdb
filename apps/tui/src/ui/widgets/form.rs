use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::ui::widgets::popup::dropdown_rect;
use crate::ui::widgets::tables::scroll_offset;

const LABEL_WIDTH: usize = 9;
const MAX_SUGGESTION_ROWS: usize = 8;

fn cursor_char(animation: f64) -> &'static str {
    if animation.sin() > 0.0 {
        "█"
    } else {
        " "
    }
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn field_line<'a>(label: &'a str, focused: bool, value: Vec<Span<'a>>) -> TextLine<'a> {
    let marker = if focused { "› " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{label:<width$}", width = LABEL_WIDTH),
            Style::default().fg(Color::Gray),
        ),
    ];
    spans.extend(value);
    TextLine::from(spans)
}

fn selector_spans(value: String, focused: bool) -> Vec<Span<'static>> {
    let arrow_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(value, field_style(focused)),
        Span::styled(" ▶", arrow_style),
    ]
}

/// Draws the form and returns the row holding the company input, which
/// anchors the suggestion dropdown.
pub fn render_search_form(app: &App, f: &mut Frame<'_>, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Analyze a company ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let form = &app.form;
    let company_focused = app.focus == Focus::Company;

    let mut company = vec![Span::styled(
        form.company_name.clone(),
        field_style(company_focused),
    )];
    if company_focused {
        company.push(Span::styled(
            cursor_char(app.animation_counter * 2.0),
            Style::default().fg(Color::Yellow),
        ));
    }
    if form.company_name.is_empty() && !company_focused {
        company.push(Span::styled(
            "e.g. 삼성전자, SK하이닉스",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let can_submit = form.has_company() && !app.is_loading();
    let button = if app.is_loading() {
        Span::styled("[ Analyzing... ]", Style::default().fg(Color::DarkGray))
    } else if can_submit {
        Span::styled(
            "[ Enter: start analysis ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ Enter: start analysis ]", Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        field_line("Company", company_focused, company),
        field_line(
            "Year",
            app.focus == Focus::Year,
            selector_spans(format!("{}년", form.year()), app.focus == Focus::Year),
        ),
        field_line(
            "Report",
            app.focus == Focus::Report,
            selector_spans(form.report.label().to_string(), app.focus == Focus::Report),
        ),
        TextLine::from(vec![Span::raw("  "), button]),
    ];

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);
    f.render_widget(Paragraph::new(Text::from(lines)), inner);

    let offset = u16::try_from(2 + LABEL_WIDTH).unwrap_or(0);
    Rect {
        x: rows[0].x.saturating_add(offset),
        width: rows[0].width.saturating_sub(offset),
        ..rows[0]
    }
}

pub fn render_suggestions(app: &App, f: &mut Frame<'_>, anchor: Rect, bounds: Rect) {
    let form = &app.form;
    if !form.suggestions_visible() {
        return;
    }

    let visible_rows = form.suggestions.len().min(MAX_SUGGESTION_ROWS);
    let area = dropdown_rect(anchor, visible_rows, bounds);
    if area.height < 3 {
        return;
    }

    let max_rows = usize::from(area.height - 2);
    let selected = form.suggestion_index.unwrap_or(0);
    let offset = scroll_offset(form.suggestions.len(), max_rows, selected);

    let lines = form
        .suggestions
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_rows)
        .map(|(index, company)| {
            let highlighted = form.suggestion_index == Some(index);
            let name_style = if highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            TextLine::from(vec![
                Span::styled(company.name.clone(), name_style),
                Span::styled(
                    format!("  코드: {}", company.code),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect::<Vec<_>>();

    let block = Block::default()
        .title(format!(" {} matches ", form.suggestions.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
