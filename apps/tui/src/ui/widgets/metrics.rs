use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use crate::api::{FinancialData, FinancialIndex};
use crate::app::{App, Focus};
use crate::domain::{classify, Category};
use crate::ui::widgets::palette::{category_color, tier_color, ACCENT, MUTED};

/// Rows each indicator card occupies.
pub const CARD_HEIGHT: usize = 3;

// Bars are integers, so values are scaled to keep two decimals.
const BAR_SCALE: f64 = 100.0;

/// Chart label for an indicator, without its parenthesised unit.
pub fn short_name(name: &str) -> &str {
    name.split_once('(').map_or(name, |(head, _)| head).trim()
}

/// Bar length for a raw value; negative values draw as empty bars.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bar_length(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        (value * BAR_SCALE).round() as u64
    } else {
        0
    }
}

pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

fn category_tabs(categories: &[Category], selected: usize) -> Tabs<'static> {
    let titles = categories
        .iter()
        .map(|category| TextLine::from(format!("{} {}", category.icon(), category.as_str())))
        .collect::<Vec<_>>();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .divider(Span::raw("|"))
}

/// Card lines for each indicator: name with tier badge, value, spacer.
pub fn card_lines(category: Category, indices: &[&FinancialIndex]) -> Vec<TextLine<'static>> {
    indices
        .iter()
        .flat_map(|index| {
            let interpretation = classify(category, index.value);
            [
                TextLine::from(vec![
                    Span::styled(
                        index.indicator_name.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!(" {} ", interpretation.label),
                        Style::default()
                            .fg(Color::Black)
                            .bg(tier_color(interpretation.tier))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                TextLine::from(Span::styled(
                    format_value(index.value),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
                TextLine::from(""),
            ]
        })
        .collect()
}

fn render_bar_chart(category: Category, indices: &[&FinancialIndex], f: &mut Frame<'_>, area: Rect) {
    let color = category_color(category);
    let bars: Vec<Bar<'_>> = indices
        .iter()
        .map(|index| {
            Bar::default()
                .value(bar_length(index.value))
                .label(TextLine::from(short_name(&index.indicator_name).to_string()))
                .text_value(format_value(index.value))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let max_value = bars_max(indices);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Values")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(1);

    f.render_widget(chart, area);
}

fn bars_max(indices: &[&FinancialIndex]) -> u64 {
    indices
        .iter()
        .map(|index| bar_length(index.value))
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Bar chart and indicator cards for the selected category tab.
pub fn render_metrics_panel(app: &App, data: &FinancialData, f: &mut Frame<'_>, area: Rect) {
    let categories = data.populated_categories();
    let focused = app.focus == Focus::Results;

    let Some(category) = app.selected_category() else {
        let block = Block::default()
            .title("Indicators")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED));
        let paragraph = Paragraph::new("No indicators were returned for this period.")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(category_color(category))
    };
    let block = Block::default()
        .title(format!(
            "{} {} Indicators · {} ({}년)",
            category.icon(),
            category.as_str(),
            data.company_name,
            data.year
        ))
        .title_style(
            Style::default()
                .fg(category_color(category))
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);
    let selected = categories
        .iter()
        .position(|c| *c == category)
        .unwrap_or_default();
    f.render_widget(category_tabs(&categories, selected), sections[0]);

    let body = if sections[1].width >= 80 {
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(sections[1])
    } else {
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(sections[1])
    };

    let indices = data.indices_for(category);
    render_bar_chart(category, &indices, f, body[0]);

    let scroll = u16::try_from(app.card_scroll * CARD_HEIGHT).unwrap_or(u16::MAX);
    let cards = Paragraph::new(Text::from(card_lines(category, &indices)))
        .block(
            Block::default()
                .title(format!("Details ({})", indices.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((scroll, 0));
    f.render_widget(cards, body[1]);
}
