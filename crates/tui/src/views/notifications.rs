use chrono::Utc;
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

use tripdeck_core::Notification;

use crate::app::View;
use crate::theme::{self, Theme};

use super::{FeatureArea, FeatureContext, FeatureEvent};

/// The notification feed with a cursor and read-state controls. Edits go
/// back to the shell as wholesale collection replacements.
#[derive(Default)]
pub struct NotificationCenter {
    cursor: usize,
}

impl NotificationCenter {
    fn clamped_cursor(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.cursor.min(len - 1)
        }
    }
}

impl FeatureArea for NotificationCenter {
    fn view(&self) -> View {
        View::Notifications
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &FeatureContext) {
        let unread = tripdeck_core::unread_count(ctx.notifications);
        let title = if unread > 0 {
            format!(" Notifications ({unread} unread) ")
        } else {
            " Notifications ".to_string()
        };
        let block = Theme::block().title(title).padding(Theme::PADDING_CARD);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if ctx.notifications.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No notifications yet.",
                    Style::new().fg(Theme::TEXT_MUTED),
                )),
                inner,
            );
            return;
        }

        let cursor = self.clamped_cursor(ctx.notifications.len());
        let now = Utc::now();
        let items: Vec<ListItem> = ctx
            .notifications
            .iter()
            .enumerate()
            .map(|(idx, n)| {
                let marker = if n.read { "  " } else { "* " };
                let title_style = if n.read {
                    Style::new().fg(Theme::TEXT_SECONDARY)
                } else {
                    Style::new().fg(Theme::TEXT_PRIMARY).bold()
                };
                let mut line1 = vec![
                    Span::styled(marker, Style::new().fg(Theme::BADGE_UNREAD).bold()),
                    Span::styled(
                        format!("{:<10}", n.kind.label()),
                        Style::new().fg(theme::kind_color(n.kind)),
                    ),
                    Span::styled(n.title.clone(), title_style),
                ];
                let minutes = (now - n.timestamp).num_minutes().max(0);
                line1.push(Span::styled(
                    format!("  {minutes}m ago"),
                    Style::new().fg(Theme::TEXT_HINT),
                ));
                let line2 = Line::from(Span::styled(
                    format!("            {}", n.message),
                    Style::new().fg(Theme::TEXT_MUTED),
                ));
                let mut item = ListItem::new(vec![Line::from(line1), line2]);
                if idx == cursor {
                    item = item.style(Style::new().bg(Color::Rgb(35, 38, 48)));
                }
                item
            })
            .collect();
        frame.render_widget(List::new(items), inner);
    }

    fn handle_key(&mut self, key: KeyCode, ctx: &FeatureContext) -> Option<FeatureEvent> {
        let len = ctx.notifications.len();
        match key {
            KeyCode::Char('j') | KeyCode::Down if len > 0 => {
                self.cursor = (self.clamped_cursor(len) + 1) % len;
                None
            }
            KeyCode::Char('k') | KeyCode::Up if len > 0 => {
                let cur = self.clamped_cursor(len);
                self.cursor = if cur == 0 { len - 1 } else { cur - 1 };
                None
            }
            KeyCode::Char('r') | KeyCode::Enter if len > 0 => {
                let cursor = self.clamped_cursor(len);
                let feed: Vec<Notification> = ctx
                    .notifications
                    .iter()
                    .enumerate()
                    .map(|(idx, n)| {
                        let mut n = n.clone();
                        if idx == cursor {
                            n.read = true;
                        }
                        n
                    })
                    .collect();
                Some(FeatureEvent::ReplaceNotifications(feed))
            }
            KeyCode::Char('a') if len > 0 => {
                let feed: Vec<Notification> = ctx
                    .notifications
                    .iter()
                    .map(|n| {
                        let mut n = n.clone();
                        n.read = true;
                        n
                    })
                    .collect();
                Some(FeatureEvent::ReplaceNotifications(feed))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripdeck_core::NotificationKind;

    fn feed() -> Vec<Notification> {
        vec![
            Notification {
                id: "1".to_string(),
                kind: NotificationKind::Booking,
                title: "a".to_string(),
                message: "m".to_string(),
                timestamp: Utc::now(),
                read: false,
            },
            Notification {
                id: "2".to_string(),
                kind: NotificationKind::Payment,
                title: "b".to_string(),
                message: "m".to_string(),
                timestamp: Utc::now(),
                read: false,
            },
        ]
    }

    #[test]
    fn mark_read_replaces_only_the_selected_entry() {
        let mut center = NotificationCenter::default();
        let feed = feed();
        let ctx = FeatureContext {
            session: None,
            notifications: &feed,
            nickname: "ann",
        };

        match center.handle_key(KeyCode::Char('r'), &ctx) {
            Some(FeatureEvent::ReplaceNotifications(next)) => {
                assert!(next[0].read);
                assert!(!next[1].read);
            }
            _ => panic!("expected a replacement"),
        }
    }

    #[test]
    fn mark_all_read_clears_every_unread_flag() {
        let mut center = NotificationCenter::default();
        let feed = feed();
        let ctx = FeatureContext {
            session: None,
            notifications: &feed,
            nickname: "ann",
        };

        match center.handle_key(KeyCode::Char('a'), &ctx) {
            Some(FeatureEvent::ReplaceNotifications(next)) => {
                assert!(next.iter().all(|n| n.read));
            }
            _ => panic!("expected a replacement"),
        }
    }

    #[test]
    fn cursor_wraps_and_survives_shrinking_feeds() {
        let mut center = NotificationCenter::default();
        let feed = feed();
        let ctx = FeatureContext {
            session: None,
            notifications: &feed,
            nickname: "ann",
        };
        center.handle_key(KeyCode::Char('j'), &ctx);
        assert_eq!(center.cursor, 1);
        center.handle_key(KeyCode::Char('j'), &ctx);
        assert_eq!(center.cursor, 0);

        // Cursor beyond the end of a shrunken feed clamps, not panics
        center.cursor = 9;
        assert_eq!(center.clamped_cursor(feed.len()), 1);
        assert_eq!(center.clamped_cursor(0), 0);
    }

    #[test]
    fn keys_are_inert_on_an_empty_feed() {
        let mut center = NotificationCenter::default();
        let ctx = FeatureContext {
            session: None,
            notifications: &[],
            nickname: "ann",
        };
        assert!(center.handle_key(KeyCode::Char('r'), &ctx).is_none());
        assert!(center.handle_key(KeyCode::Char('a'), &ctx).is_none());
        assert!(center.handle_key(KeyCode::Char('j'), &ctx).is_none());
    }
}
