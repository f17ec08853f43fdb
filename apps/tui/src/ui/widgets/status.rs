use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

use crate::app::App;

fn banner<'a>(title: &'a str, color: Color, lines: Vec<TextLine<'a>>) -> Paragraph<'a> {
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true })
}

/// Loading spinner, error banner, or completion message for the current
/// analysis attempt.
pub fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    if app.is_loading() {
        let block = Block::default()
            .title(" Analyzing ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let throbber = Throbber::default()
            .label("Analyzing financial data... please wait.")
            .style(Style::default().fg(Color::LightBlue))
            .throbber_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));
        let mut state = app.throbber.clone();
        f.render_stateful_widget(throbber, inner, &mut state);
        return;
    }

    if let Some(message) = app.error() {
        let paragraph = banner(
            " Error ",
            Color::Red,
            vec![TextLine::from(Span::styled(
                message,
                Style::default().fg(Color::LightRed),
            ))],
        );
        f.render_widget(paragraph, area);
        return;
    }

    if let Some(response) = app.response() {
        let (title, color) = if response.report().is_some() {
            (" Analysis complete ", Color::Green)
        } else {
            (" Analysis unavailable ", Color::Yellow)
        };
        let message = if response.message.is_empty() {
            "The backend returned no message."
        } else {
            response.message.as_str()
        };
        let paragraph = banner(
            title,
            color,
            vec![TextLine::from(Span::styled(
                message,
                Style::default().fg(Color::White),
            ))],
        );
        f.render_widget(paragraph, area);
        return;
    }

    let hint = if app.status_message.is_empty() {
        "Type a company name, pick a year and report type, then press Enter."
    } else {
        app.status_message.as_str()
    };
    let paragraph = banner(
        " Status ",
        Color::DarkGray,
        vec![TextLine::from(Span::styled(
            hint,
            Style::default().fg(Color::Gray),
        ))],
    );
    f.render_widget(paragraph, area);
}
