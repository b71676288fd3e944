use ratatui::prelude::*;
use ratatui::widgets::{Clear, List, ListItem};

use crate::app::View;
use crate::theme::Theme;

/// Compact navigation overlay. Selecting an entry activates the view and
/// closes the sheet in one step; the shell owns that transition.
pub fn render(frame: &mut Frame, selected: usize, unread: usize) {
    let area = frame.area();
    let popup_width = 36u16.min(area.width.saturating_sub(4));
    let popup_height = (View::ALL.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Theme::block_accent().title(" Menu ");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let items: Vec<ListItem> = View::ALL
        .iter()
        .enumerate()
        .map(|(idx, view)| {
            let mut label = format!(" {}  {}", view.hotkey(), view.label());
            if *view == View::Notifications && unread > 0 {
                label.push_str(&format!(" ({unread})"));
            }
            let style = if idx == selected {
                Style::new().fg(Color::Black).bg(Theme::ACCENT_BLUE).bold()
            } else {
                Style::new().fg(Theme::TEXT_SECONDARY)
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}
