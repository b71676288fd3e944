use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::app::View;
use crate::theme::Theme;

use super::{FeatureArea, FeatureContext};

/// Payment methods and recent charges.
#[derive(Default)]
pub struct PaymentArea;

impl FeatureArea for PaymentArea {
    fn view(&self) -> View {
        View::Payment
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &FeatureContext) {
        let block = Theme::block()
            .title(" Payment ")
            .padding(Theme::PADDING_CARD);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if ctx.session.is_none() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Sign in to view payment methods.",
                    Style::new().fg(Theme::TEXT_SECONDARY),
                )),
                inner,
            );
            return;
        }

        let items = vec![
            ListItem::new(Line::from(vec![
                Span::styled("Visa ****4242  ", Style::new().fg(Theme::TEXT_PRIMARY)),
                Span::styled("default", Style::new().fg(Theme::ACCENT_GREEN)),
            ])),
            ListItem::new(Line::from(Span::styled(
                "Recent: $642.18 Air France, $1,104.00 Hotel Lutetia",
                Style::new().fg(Theme::TEXT_SECONDARY),
            ))),
        ];
        frame.render_widget(List::new(items), inner);
    }
}
