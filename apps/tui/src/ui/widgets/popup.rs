use ratatui::layout::{Constraint, Layout, Rect};

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}

/// Area directly below `anchor` tall enough for `rows` bordered lines,
/// clipped to `bounds`.
pub fn dropdown_rect(anchor: Rect, rows: usize, bounds: Rect) -> Rect {
    let top = anchor.y.saturating_add(1);
    let available = bounds.bottom().saturating_sub(top);
    let wanted = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);

    Rect {
        x: anchor.x,
        y: top,
        width: anchor.width.min(bounds.right().saturating_sub(anchor.x)),
        height: wanted.min(available),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_sits_below_anchor() {
        let bounds = Rect::new(0, 0, 80, 40);
        let rect = dropdown_rect(Rect::new(10, 5, 30, 1), 4, bounds);
        assert_eq!(rect, Rect::new(10, 6, 30, 6));
    }

    #[test]
    fn dropdown_is_clipped_to_bounds() {
        let bounds = Rect::new(0, 0, 80, 10);
        let rect = dropdown_rect(Rect::new(70, 7, 30, 1), 10, bounds);
        assert_eq!(rect.height, 2);
        assert_eq!(rect.width, 10);
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 50, area);
        assert!(rect.x >= 20 && rect.right() <= 80);
        assert!(rect.y >= 12 && rect.bottom() <= 38);
    }
}
