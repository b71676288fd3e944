use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::View;
use crate::theme::Theme;

use super::{FeatureArea, FeatureContext};

/// Travel statistics summary.
#[derive(Default)]
pub struct AnalyticsArea;

impl FeatureArea for AnalyticsArea {
    fn view(&self) -> View {
        View::Analytics
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &FeatureContext) {
        let block = Theme::block()
            .title(" Analytics ")
            .padding(Theme::PADDING_CARD);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = if ctx.session.is_some() {
            vec![
                stat_line("Trips this year", "3"),
                stat_line("Countries visited", "5"),
                stat_line("Total spend", "$4,820"),
                stat_line("Notifications in feed", &ctx.notifications.len().to_string()),
            ]
        } else {
            vec![Line::from(Span::styled(
                "Sign in to see your travel statistics.",
                Style::new().fg(Theme::TEXT_SECONDARY),
            ))]
        };
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn stat_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<24}"), Style::new().fg(Theme::TEXT_MUTED)),
        Span::styled(value.to_string(), Style::new().fg(Theme::ACCENT_PURPLE).bold()),
    ])
}
