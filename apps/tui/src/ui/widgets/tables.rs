/// First row to draw so that `selected_index` stays visible.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

#[cfg(test)]
mod tests {
    use super::scroll_offset;

    #[test]
    fn short_lists_never_scroll() {
        assert_eq!(scroll_offset(3, 5, 2), 0);
    }

    #[test]
    fn selection_past_the_window_scrolls() {
        assert_eq!(scroll_offset(10, 4, 3), 0);
        assert_eq!(scroll_offset(10, 4, 4), 1);
        assert_eq!(scroll_offset(10, 4, 9), 6);
    }
}
