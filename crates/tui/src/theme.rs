use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding};

use tripdeck_core::NotificationKind;

pub struct Theme;

impl Theme {
    // ── Border ───────────────────────────────────────────────────────
    pub const BORDER_DIM: Color = Color::DarkGray;
    pub const BORDER_NORMAL: Color = Color::Rgb(60, 65, 80);
    pub const BORDER_ACCENT: Color = Color::Rgb(100, 180, 240);

    // ── Text hierarchy ───────────────────────────────────────────────
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Rgb(140, 145, 160);
    pub const TEXT_MUTED: Color = Color::Rgb(80, 85, 100);
    pub const TEXT_HINT: Color = Color::Rgb(60, 65, 80);

    // ── Key style (for footer hints) ─────────────────────────────────
    pub const TEXT_KEY: Color = Color::Rgb(140, 145, 160);
    pub const TEXT_KEY_DESC: Color = Color::DarkGray;

    // ── Accent ───────────────────────────────────────────────────────
    pub const ACCENT_BLUE: Color = Color::Rgb(100, 180, 240);
    pub const ACCENT_GREEN: Color = Color::Rgb(80, 200, 120);
    pub const ACCENT_RED: Color = Color::Rgb(220, 80, 80);
    pub const ACCENT_YELLOW: Color = Color::Rgb(220, 180, 60);
    pub const ACCENT_PURPLE: Color = Color::Rgb(180, 140, 220);
    pub const ACCENT_ORANGE: Color = Color::Rgb(217, 119, 80);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 180, 160);

    // ── Badge / tab style ────────────────────────────────────────────
    pub const BADGE_UNREAD: Color = Color::Rgb(220, 80, 80);
    pub const TAB_INACTIVE: Color = Color::Rgb(120, 125, 140);

    // ── Padding ──────────────────────────────────────────────────────
    pub const PADDING_CARD: Padding = Padding::new(2, 2, 1, 1);

    // ── Block helpers ────────────────────────────────────────────────

    pub fn block() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(Self::BORDER_NORMAL))
    }

    pub fn block_accent() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(Self::BORDER_ACCENT))
    }
}

// ── Notification kind color ──────────────────────────────────────────

pub fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Booking => Theme::ACCENT_BLUE,
        NotificationKind::Payment => Theme::ACCENT_GREEN,
        NotificationKind::Itinerary => Theme::ACCENT_TEAL,
        NotificationKind::System => Theme::ACCENT_YELLOW,
        NotificationKind::Other => Theme::TEXT_SECONDARY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_color_distinguishes_known_kinds() {
        assert_ne!(
            kind_color(NotificationKind::Booking),
            kind_color(NotificationKind::Payment)
        );
        assert_eq!(
            kind_color(NotificationKind::Other),
            Theme::TEXT_SECONDARY
        );
    }
}
