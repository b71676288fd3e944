use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use tripdeck_tui::app::{App, View};
use tripdeck_tui::config::ShellConfig;
use tripdeck_tui::ui;

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

fn render(app: &mut App) -> String {
    let backend = TestBackend::new(140, 32);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| ui::render(frame, app)).expect("draw");
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn every_view_mounts_its_feature_area() {
    let mut app = App::new(ShellConfig::default());
    for view in View::ALL {
        app.select_view(view);
        let text = render(&mut app);
        assert!(
            text.contains(view.label()),
            "view {:?} should render its pane title",
            view
        );
    }
}

#[test]
fn guest_sign_in_flow_end_to_end() {
    let mut app = App::new(ShellConfig::default());
    app.begin_feed_load();
    assert_eq!(app.unread_count(), 1);

    // Sign in from the itinerary pane
    assert!(app.session.is_none());
    app.handle_key(KeyCode::Char('s'));
    assert!(app.session.is_some());
    let text = render(&mut app);
    assert!(text.contains("Welcome to TripDeck!"));

    // Any key clears the flash; sign out resets the shell
    app.handle_key(KeyCode::Char('5'));
    assert_eq!(app.view, View::Notifications);
    app.handle_key(KeyCode::Char('o'));
    assert!(app.session.is_none());
    assert_eq!(app.view, View::Itinerary);
    assert!(app.notifications.is_empty());
}

#[test]
fn marking_notifications_read_updates_the_nav_badge() {
    let mut app = App::new(ShellConfig::default());
    app.begin_feed_load();
    app.select_view(View::Notifications);

    let text = render(&mut app);
    assert!(text.contains("5:Notifications (1)"));

    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.unread_count(), 0);
    let text = render(&mut app);
    assert!(!text.contains("(1)"));
}

#[test]
fn menu_selection_routes_and_closes() {
    let mut app = App::new(ShellConfig::default());
    app.handle_key(KeyCode::Char('m'));
    assert!(app.menu_open);

    let text = render(&mut app);
    assert!(text.contains("Menu"));

    app.handle_key(KeyCode::Char('7'));
    assert!(!app.menu_open);
    assert_eq!(app.view, View::Analytics);
}
