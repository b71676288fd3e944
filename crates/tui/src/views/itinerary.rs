use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::app::View;
use crate::theme::Theme;

use super::{demo_traveler, FeatureArea, FeatureContext, FeatureEvent};

/// Default landing area: the traveler's day-by-day plan.
#[derive(Default)]
pub struct ItineraryArea;

const DEMO_LEGS: [(&str, &str, &str); 4] = [
    ("Mon 09:40", "Flight", "JFK -> CDG, seat 14A"),
    ("Mon 15:00", "Hotel", "Check in at Hotel Lutetia"),
    ("Tue 10:00", "Tour", "Louvre guided visit"),
    ("Wed 12:30", "Dining", "Lunch at Le Comptoir"),
];

impl FeatureArea for ItineraryArea {
    fn view(&self) -> View {
        View::Itinerary
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &FeatureContext) {
        let block = Theme::block()
            .title(" Itinerary ")
            .padding(Theme::PADDING_CARD);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(traveler) = ctx.session else {
            let msg = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Browsing as guest.",
                    Style::new().fg(Theme::TEXT_SECONDARY),
                )),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("s", Style::new().fg(Theme::TEXT_KEY).bold()),
                    Span::styled(
                        " sign in to see your trip plan",
                        Style::new().fg(Theme::TEXT_KEY_DESC),
                    ),
                ]),
            ]);
            frame.render_widget(msg, inner);
            return;
        };

        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);

        let header = Paragraph::new(Line::from(vec![
            Span::styled("Paris trip for ", Style::new().fg(Theme::TEXT_SECONDARY)),
            Span::styled(&*traveler.name, Style::new().fg(Theme::TEXT_PRIMARY).bold()),
        ]));
        frame.render_widget(header, header_area);

        let items: Vec<ListItem> = DEMO_LEGS
            .iter()
            .map(|(when, kind, detail)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{when}  "), Style::new().fg(Theme::TEXT_MUTED)),
                    Span::styled(format!("{kind:<8}"), Style::new().fg(Theme::ACCENT_TEAL)),
                    Span::styled(*detail, Style::new().fg(Theme::TEXT_PRIMARY)),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items), list_area);
    }

    fn handle_key(&mut self, key: KeyCode, ctx: &FeatureContext) -> Option<FeatureEvent> {
        match key {
            KeyCode::Char('s') if ctx.session.is_none() => {
                Some(FeatureEvent::SignIn(demo_traveler(ctx.nickname)))
            }
            _ => None,
        }
    }
}
