use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::app::View;
use crate::theme::Theme;

use super::{FeatureArea, FeatureContext};

/// Destination discovery. Static showcase content for now; search comes
/// from the backend later.
#[derive(Default)]
pub struct ExploreArea;

const DESTINATIONS: [(&str, &str); 5] = [
    ("Paris", "Museums, cafes, and a very large iron tower"),
    ("Kyoto", "Temples and autumn foliage"),
    ("Lisbon", "Hills, trams, pastel de nata"),
    ("Reykjavik", "Geothermal pools and northern lights"),
    ("Oaxaca", "Markets, mole, and mountain villages"),
];

impl FeatureArea for ExploreArea {
    fn view(&self) -> View {
        View::Explore
    }

    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &FeatureContext) {
        let block = Theme::block()
            .title(" Explore ")
            .padding(Theme::PADDING_CARD);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Trending destinations",
                Style::new().fg(Theme::TEXT_SECONDARY),
            )),
            header_area,
        );

        let items: Vec<ListItem> = DESTINATIONS
            .iter()
            .map(|(name, blurb)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{name:<12}"), Style::new().fg(Theme::ACCENT_BLUE).bold()),
                    Span::styled(*blurb, Style::new().fg(Theme::TEXT_SECONDARY)),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items), list_area);
    }
}
