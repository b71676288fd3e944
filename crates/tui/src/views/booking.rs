use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::app::View;
use crate::theme::Theme;

use super::{FeatureArea, FeatureContext};

/// Flight and hotel reservations for the active trip.
#[derive(Default)]
pub struct BookingArea;

impl FeatureArea for BookingArea {
    fn view(&self) -> View {
        View::Booking
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &FeatureContext) {
        let block = Theme::block()
            .title(" Booking ")
            .padding(Theme::PADDING_CARD);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if ctx.session.is_none() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Sign in to manage reservations.",
                    Style::new().fg(Theme::TEXT_SECONDARY),
                )),
                inner,
            );
            return;
        }

        let items = vec![
            booking_item("Confirmed", Theme::ACCENT_GREEN, "Flight JFK -> CDG, Mon 09:40"),
            booking_item("Confirmed", Theme::ACCENT_GREEN, "Hotel Lutetia, 4 nights"),
            booking_item("Pending", Theme::ACCENT_YELLOW, "Louvre guided visit, Tue 10:00"),
        ];
        frame.render_widget(List::new(items), inner);
    }
}

fn booking_item(status: &'static str, color: Color, detail: &'static str) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{status:<10}"), Style::new().fg(color).bold()),
        Span::styled(detail, Style::new().fg(Theme::TEXT_PRIMARY)),
    ]))
}
