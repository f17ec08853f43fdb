use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::widgets::popup::centered_rect;

const SHORTCUTS: [(&str, &str); 11] = [
    ("Tab / Shift+Tab", "Move between company, year, report and results"),
    ("Type", "Edit the company name; 2+ characters search as you type"),
    ("Up / Down", "Move through suggestions, or change year and report"),
    ("Left / Right", "Change year and report, or switch category tabs"),
    ("Enter", "Pick the highlighted suggestion, or run the analysis"),
    ("1-4", "Jump to a category tab in the results"),
    ("PgUp / PgDn", "Scroll indicator cards"),
    ("F5", "Check backend health"),
    ("F1", "Toggle this help"),
    ("Esc", "Close suggestions, clear results, then quit"),
    ("Ctrl+C", "Quit immediately"),
];

fn help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Financial Health Dashboard",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];

    lines.extend(SHORTCUTS.iter().map(|(keys, action)| {
        TextLine::from(vec![
            Span::styled(
                format!("{keys:<16}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(*action),
        ])
    }));

    lines
}

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 70, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(Text::from(help_lines()))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}
