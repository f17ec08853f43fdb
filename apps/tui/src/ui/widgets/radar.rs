use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::RadarChartData;
use crate::domain::Category;
use crate::ui::widgets::palette::{category_color, grade_color, ACCENT, MUTED, SCORE_LINE};

pub const MAX_SCORE: f64 = 100.0;
const GRID_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
const LABEL_RADIUS: f64 = 1.15;

/// Angle of the spoke for `index` out of `count`, starting at twelve o'clock
/// and moving clockwise.
#[allow(clippy::cast_precision_loss)]
pub fn spoke_angle(index: usize, count: usize) -> f64 {
    let count = count.max(1) as f64;
    FRAC_PI_2 - TAU * index as f64 / count
}

/// Canvas position for a score on the given spoke. Scores outside 0..=100
/// are clamped to the chart edge.
pub fn score_point(index: usize, count: usize, score: f64) -> (f64, f64) {
    let ratio = if score.is_finite() {
        score.clamp(0.0, MAX_SCORE) / MAX_SCORE
    } else {
        0.0
    };
    let angle = spoke_angle(index, count);
    (angle.cos() * ratio, angle.sin() * ratio)
}

/// Closed polygon edges through `points`.
pub fn polygon_edges(points: &[(f64, f64)]) -> Vec<((f64, f64), (f64, f64))> {
    if points.len() < 2 {
        return Vec::new();
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(from, to)| (*from, *to))
        .collect()
}

fn spoke_color(label: &str) -> Color {
    Category::parse(label).map_or(MUTED, category_color)
}

fn axis_label(label: &str) -> String {
    Category::parse(label).map_or_else(|| label.to_string(), |c| format!("{} {label}", c.icon()))
}

fn render_canvas(points: &[(&str, f64)], f: &mut Frame<'_>, area: Rect) {
    let count = points.len();
    let grid: Vec<Vec<(f64, f64)>> = GRID_LEVELS
        .iter()
        .map(|level| {
            (0..count)
                .map(|index| score_point(index, count, level * MAX_SCORE))
                .collect()
        })
        .collect();
    let scores: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(index, (_, score))| score_point(index, count, *score))
        .collect();

    let canvas = Canvas::default()
        .x_bounds([-1.4, 1.4])
        .y_bounds([-1.2, 1.2])
        .paint(|ctx| {
            for ring in &grid {
                for ((x1, y1), (x2, y2)) in polygon_edges(ring) {
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: Color::DarkGray,
                    });
                }
            }

            for index in 0..count {
                let (x, y) = score_point(index, count, MAX_SCORE);
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: x,
                    y2: y,
                    color: Color::DarkGray,
                });
            }

            ctx.layer();

            for ((x1, y1), (x2, y2)) in polygon_edges(&scores) {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: SCORE_LINE,
                });
            }
            if let [(x, y)] = scores.as_slice() {
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: *x,
                    y2: *y,
                    color: SCORE_LINE,
                });
            }

            for (index, (label, _)) in points.iter().enumerate() {
                let angle = spoke_angle(index, count);
                let x = angle.cos() * LABEL_RADIUS;
                let y = angle.sin() * LABEL_RADIUS;
                // Labels print rightwards from their anchor.
                let offset = if x < -0.1 { -0.35 } else if x > 0.1 { 0.0 } else { -0.15 };
                ctx.print(
                    x + offset,
                    y,
                    TextLine::styled(axis_label(label), Style::default().fg(spoke_color(label))),
                );
            }
        });

    f.render_widget(canvas, area);
}

/// Overall score, grade and the per-category breakdown.
pub fn breakdown_lines(radar: &RadarChartData) -> Vec<TextLine<'static>> {
    let mut lines = vec![TextLine::from(vec![
        Span::styled("종합 점수 ", Style::default().fg(MUTED)),
        Span::styled(
            format!("{:.1}점", radar.overall_score),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("등급 ", Style::default().fg(MUTED)),
        Span::styled(
            radar.grade.clone(),
            Style::default()
                .fg(grade_color(&radar.grade))
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    lines.extend(radar.points().into_iter().map(|(label, score)| {
        TextLine::from(vec![
            Span::styled(axis_label(label), Style::default().fg(spoke_color(label))),
            Span::raw("  "),
            Span::styled(
                format!("{score:.1}점"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" / 100점", Style::default().fg(MUTED)),
        ])
    }));

    lines
}

/// Radar plot of the category scores with the score breakdown underneath.
pub fn render_radar_panel(
    radar: &RadarChartData,
    company: &str,
    year: &str,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title(format!("🎯 Financial Health Score · {company} ({year}년)"))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height < 4 {
        return;
    }

    let breakdown = breakdown_lines(radar);
    let breakdown_height = u16::try_from(breakdown.len()).unwrap_or(u16::MAX);
    let sections =
        Layout::vertical([Constraint::Min(3), Constraint::Length(breakdown_height)]).split(inner);

    let points = radar.points();
    if points.is_empty() {
        let paragraph = Paragraph::new("No category scores")
            .alignment(Alignment::Center)
            .style(Style::default().fg(MUTED));
        f.render_widget(paragraph, sections[0]);
    } else {
        render_canvas(&points, f, sections[0]);
    }

    f.render_widget(Paragraph::new(Text::from(breakdown)), sections[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn radar(categories: &[&str], values: &[f64]) -> RadarChartData {
        RadarChartData {
            categories: categories.iter().map(ToString::to_string).collect(),
            values: values.to_vec(),
            overall_score: 72.46,
            grade: "B+".to_string(),
        }
    }

    fn draw(radar: &RadarChartData) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("terminal");
        terminal
            .draw(|f| render_radar_panel(radar, "삼성전자", "2023", f, f.area()))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn first_spoke_points_up_and_second_goes_clockwise() {
        let (x, y) = score_point(0, 4, 100.0);
        assert!(x.abs() < 1e-9 && (y - 1.0).abs() < 1e-9);
        let (x, y) = score_point(1, 4, 100.0);
        assert!((x - 1.0).abs() < 1e-9 && y.abs() < 1e-9);
    }

    #[test]
    fn scores_are_clamped_to_the_chart() {
        assert_eq!(score_point(0, 4, 250.0), score_point(0, 4, 100.0));
        assert_eq!(score_point(2, 4, -5.0), (0.0, 0.0));
        assert_eq!(score_point(2, 4, f64::NAN), (0.0, 0.0));
    }

    #[test]
    fn polygon_closes_back_to_the_first_point() {
        let points = [(0.0, 1.0), (1.0, 0.0), (0.0, -1.0)];
        let edges = polygon_edges(&points);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], ((0.0, -1.0), (0.0, 1.0)));
        assert!(polygon_edges(&points[..1]).is_empty());
    }

    #[test]
    fn empty_radar_renders_placeholder() {
        let screen = draw(&radar(&[], &[]));
        assert!(screen.contains("No category scores"));
    }

    #[test]
    fn mismatched_lengths_render_the_paired_prefix() {
        let data = radar(&["수익성", "안정성", "성장성"], &[80.0]);
        let lines = breakdown_lines(&data);
        assert_eq!(lines.len(), 2);
        draw(&data);
    }

    #[test]
    fn breakdown_formats_scores() {
        let data = radar(&["수익성"], &[81.26]);
        let lines = breakdown_lines(&data);
        let text = lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect::<String>();
        assert!(text.contains("72.5점"));
        assert!(text.contains("81.3점 / 100점"));
        assert!(text.contains("B+"));
    }
}
