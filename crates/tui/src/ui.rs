use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, FlashLevel, View};
use crate::theme::Theme;
use crate::views::{menu_sheet, nav_bar, FeatureContext};

pub fn render(frame: &mut Frame, app: &mut App) {
    let [nav_area, header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    nav_bar::render(frame, app.view, app.unread_count(), nav_area);
    render_header(frame, app, header_area);

    // Body: the one feature area matching the active view
    let view = app.view;
    let ctx = FeatureContext {
        session: app.session.as_ref(),
        notifications: &app.notifications,
        nickname: &app.config.identity.nickname,
    };
    if let Some(feature) = app.features.iter().find(|f| f.view() == view) {
        feature.render(frame, body_area, &ctx);
    }

    render_footer(frame, app, footer_area);

    // Compact menu overlay on top of everything
    if app.menu_open {
        menu_sheet::render(frame, app.menu_index, app.unread_count());
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Theme::block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (badge_text, badge_bg) = match &app.session {
        Some(traveler) => (format!(" {} ", traveler.name), Theme::ACCENT_GREEN),
        None => (" GUEST ".to_string(), Theme::TAB_INACTIVE),
    };

    let mut left_spans = vec![
        Span::styled(" tripdeck ", Style::new().fg(Theme::ACCENT_ORANGE).bold()),
        Span::raw(" "),
        Span::styled(badge_text, Style::new().fg(Color::Black).bg(badge_bg).bold()),
        Span::raw("  "),
        Span::styled(app.view.label(), Style::new().fg(Theme::ACCENT_BLUE)),
    ];

    if app.load_inflight {
        left_spans.push(Span::raw("  "));
        left_spans.push(Span::styled(
            "Loading...",
            Style::new().fg(Theme::ACCENT_YELLOW).italic(),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(left_spans)).alignment(Alignment::Left),
        inner,
    );

    let right_line = Line::from(Span::styled(
        format!("{} ", app.config.backend.url),
        Style::new().fg(Theme::TEXT_MUTED),
    ));
    frame.render_widget(
        Paragraph::new(right_line).alignment(Alignment::Right),
        inner,
    );
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::new().fg(Theme::TEXT_KEY);
    let desc_style = Style::new().fg(Theme::TEXT_KEY_DESC);

    let mut spans = vec![
        Span::styled(" 1-7 ", key_style),
        Span::styled("view  ", desc_style),
        Span::styled("Tab ", key_style),
        Span::styled("next  ", desc_style),
        Span::styled("m ", key_style),
        Span::styled("menu  ", desc_style),
    ];

    match app.view {
        View::Notifications if !app.notifications.is_empty() => {
            spans.push(Span::styled("j/k ", key_style));
            spans.push(Span::styled("navigate  ", desc_style));
            spans.push(Span::styled("r ", key_style));
            spans.push(Span::styled("mark read  ", desc_style));
            spans.push(Span::styled("a ", key_style));
            spans.push(Span::styled("mark all  ", desc_style));
        }
        View::Itinerary | View::Profile if app.session.is_none() => {
            spans.push(Span::styled("s ", key_style));
            spans.push(Span::styled("sign in  ", desc_style));
        }
        _ => {}
    }

    if app.session.is_some() {
        spans.push(Span::styled("o ", key_style));
        spans.push(Span::styled("sign out  ", desc_style));
    }
    spans.push(Span::styled("q ", key_style));
    spans.push(Span::styled("quit", desc_style));

    // Append flash message to any view's footer
    if let Some((ref msg, level)) = app.flash_message {
        let color = match level {
            FlashLevel::Success => Theme::ACCENT_GREEN,
            FlashLevel::Info => Theme::ACCENT_BLUE,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(msg.as_str(), Style::new().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use tripdeck_core::Traveler;

    fn buffer_to_string(buffer: &Buffer) -> String {
        let area = *buffer.area();
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render_app(app: &mut App) -> String {
        let backend = TestBackend::new(140, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| render(frame, app)).expect("draw");
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn guest_shell_shows_badge_and_default_view() {
        let mut app = App::new(ShellConfig::default());
        let text = render_app(&mut app);
        assert!(text.contains("tripdeck"));
        assert!(text.contains("GUEST"));
        assert!(text.contains("Itinerary"));
    }

    #[test]
    fn signed_in_shell_shows_traveler_and_sign_out_hint() {
        let mut app = App::new(ShellConfig::default());
        app.session = Some(Traveler::new("u1", "Ann"));
        let text = render_app(&mut app);
        assert!(text.contains("Ann"));
        assert!(!text.contains("GUEST"));
        assert!(text.contains("sign out"));
    }

    #[test]
    fn flash_message_is_appended_to_the_footer() {
        let mut app = App::new(ShellConfig::default());
        app.flash_success("Welcome to TripDeck!");
        let text = render_app(&mut app);
        assert!(text.contains("Welcome to TripDeck!"));
    }

    #[test]
    fn menu_overlay_renders_when_open() {
        let mut app = App::new(ShellConfig::default());
        app.toggle_menu();
        let text = render_app(&mut app);
        assert!(text.contains("Menu"));
    }

    #[test]
    fn loading_hint_tracks_inflight_state() {
        let mut app = App::new(ShellConfig::default());
        app.load_inflight = true;
        assert!(render_app(&mut app).contains("Loading..."));

        app.load_inflight = false;
        assert!(!render_app(&mut app).contains("Loading..."));
    }
}
