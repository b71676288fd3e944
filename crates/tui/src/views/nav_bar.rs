use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::View;
use crate::theme::Theme;

/// Horizontal navigation strip. The Notifications entry carries an
/// unread badge derived from the live feed.
pub fn render(frame: &mut Frame, active: View, unread: usize, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for view in View::ALL {
        let is_active = view == active;
        let mut label = format!("{}:{}", view.hotkey(), view.label());
        if view == View::Notifications && unread > 0 {
            label.push_str(&format!(" ({unread})"));
        }

        let style = if is_active {
            Style::new()
                .fg(Color::Black)
                .bg(Theme::ACCENT_BLUE)
                .bold()
                .add_modifier(Modifier::UNDERLINED)
        } else if view == View::Notifications && unread > 0 {
            Style::new().fg(Theme::BADGE_UNREAD)
        } else {
            Style::new().fg(Theme::TAB_INACTIVE)
        };

        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
