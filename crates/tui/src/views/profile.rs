use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::View;
use crate::theme::Theme;

use super::{demo_traveler, FeatureArea, FeatureContext, FeatureEvent};

/// Account details plus the sign-in / sign-out controls.
#[derive(Default)]
pub struct ProfileArea;

impl FeatureArea for ProfileArea {
    fn view(&self) -> View {
        View::Profile
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &FeatureContext) {
        let block = Theme::block()
            .title(" Profile ")
            .padding(Theme::PADDING_CARD);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = match ctx.session {
            Some(traveler) => vec![
                Line::from(vec![
                    Span::styled("Name   ", Style::new().fg(Theme::TEXT_MUTED)),
                    Span::styled(&*traveler.name, Style::new().fg(Theme::TEXT_PRIMARY).bold()),
                ]),
                Line::from(vec![
                    Span::styled("Email  ", Style::new().fg(Theme::TEXT_MUTED)),
                    Span::styled(
                        traveler.email.as_deref().unwrap_or("(none)"),
                        Style::new().fg(Theme::TEXT_PRIMARY),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("ID     ", Style::new().fg(Theme::TEXT_MUTED)),
                    Span::styled(&*traveler.id, Style::new().fg(Theme::TEXT_SECONDARY)),
                ]),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("o", Style::new().fg(Theme::TEXT_KEY).bold()),
                    Span::styled(" sign out", Style::new().fg(Theme::TEXT_KEY_DESC)),
                ]),
            ],
            None => vec![
                Line::from(Span::styled(
                    "You are browsing as a guest.",
                    Style::new().fg(Theme::TEXT_SECONDARY),
                )),
                Line::raw(""),
                Line::from(vec![
                    Span::styled("s", Style::new().fg(Theme::TEXT_KEY).bold()),
                    Span::styled(" sign in", Style::new().fg(Theme::TEXT_KEY_DESC)),
                ]),
            ],
        };
        frame.render_widget(Paragraph::new(lines), inner);
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
