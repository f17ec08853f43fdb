use ratatui::style::Color;

use crate::domain::{grade_tier, Category, Tier};

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const SCORE_LINE: Color = Color::Rgb(0x3b, 0x82, 0xf6);

const fn rgb(channels: (u8, u8, u8)) -> Color {
    Color::Rgb(channels.0, channels.1, channels.2)
}

pub const fn tier_color(tier: Tier) -> Color {
    rgb(tier.rgb())
}

pub const fn category_color(category: Category) -> Color {
    rgb(category.rgb())
}

pub fn grade_color(grade: &str) -> Color {
    tier_color(grade_tier(grade))
}
