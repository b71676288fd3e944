use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::KeyCode;

use tripdeck_core::{Notification, Traveler};

use crate::async_ops::{AsyncCommand, CommandResult};
use crate::config::ShellConfig;
use crate::views::{self, FeatureArea, FeatureContext, FeatureEvent};

/// How long to wait after a session change before reloading the feed.
/// Backends need a moment to materialize notifications for fresh sessions.
pub const RELOAD_DELAY: Duration = Duration::from_millis(500);

/// Which feature area the shell is displaying. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Itinerary,
    Explore,
    Booking,
    Profile,
    Notifications,
    Payment,
    Analytics,
}

impl View {
    pub const ALL: [Self; 7] = [
        Self::Itinerary,
        Self::Explore,
        Self::Booking,
        Self::Profile,
        Self::Notifications,
        Self::Payment,
        Self::Analytics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Itinerary => "Itinerary",
            Self::Explore => "Explore",
            Self::Booking => "Booking",
            Self::Profile => "Profile",
            Self::Notifications => "Notifications",
            Self::Payment => "Payment",
            Self::Analytics => "Analytics",
        }
    }

    pub fn hotkey(self) -> char {
        let idx = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        char::from_digit(idx as u32 + 1, 10).unwrap_or('1')
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        let idx = c.to_digit(10)? as usize;
        if idx == 0 {
            return None;
        }
        Self::ALL.get(idx - 1).copied()
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Flash message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Info,
}

/// The shell's entire mutable state, mutated only through the named
/// transitions below so the state machine stays auditable.
pub struct App {
    /// Current traveler; `None` is guest mode, not an error.
    pub session: Option<Traveler>,
    /// Current feed snapshot. Replaced wholesale by loads and by the
    /// Notifications feature area; never merged.
    pub notifications: Vec<Notification>,
    pub view: View,
    /// Compact-menu visibility, independent of the active view.
    pub menu_open: bool,
    /// Cursor inside the compact menu.
    pub menu_index: usize,
    /// Transient acknowledgment shown in the footer.
    pub flash_message: Option<(String, FlashLevel)>,
    /// Async command waiting to be spawned by the event loop.
    pub pending_command: Option<AsyncCommand>,
    /// Deadline for the delayed post-sign-in reload. Re-arming overwrites
    /// the deadline, so two session changes inside the window fire once.
    pub reload_due_at: Option<Instant>,
    /// Bumped on every session change; results from older epochs are
    /// discarded so a late response cannot repopulate the feed after
    /// sign-out.
    pub feed_epoch: u64,
    /// True while an authenticated load is in flight.
    pub load_inflight: bool,
    pub config: ShellConfig,
    pub features: Vec<Box<dyn FeatureArea>>,
}

impl App {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            session: None,
            notifications: Vec::new(),
            view: View::default(),
            menu_open: false,
            menu_index: 0,
            flash_message: None,
            pending_command: None,
            reload_due_at: None,
            feed_epoch: 0,
            load_inflight: false,
            config,
            features: views::all_feature_areas(),
        }
    }

    // ── Session transitions ──────────────────────────────────────────

    /// Replace the session and schedule a delayed feed reload. Local and
    /// infallible; remote auth is an external collaborator.
    pub fn sign_in(&mut self, traveler: Traveler) {
        self.session = Some(traveler);
        self.feed_epoch += 1;
        self.load_inflight = false;
        self.flash_success("Welcome to TripDeck!");
        self.schedule_reload();
    }

    /// Clear the session, reset the shell to its default view, and empty
    /// the feed. The scheduled reload will repopulate guest demo data.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.view = View::default();
        self.notifications.clear();
        self.menu_open = false;
        self.feed_epoch += 1;
        self.load_inflight = false;
        self.flash_success("Signed out successfully");
        self.schedule_reload();
    }

    fn schedule_reload(&mut self) {
        self.reload_due_at = Some(Instant::now() + RELOAD_DELAY);
    }

    /// Consume the reload deadline once it has passed.
    pub fn take_due_reload(&mut self, now: Instant) -> bool {
        match self.reload_due_at {
            Some(due) if due <= now => {
                self.reload_due_at = None;
                true
            }
            _ => false,
        }
    }

    // ── Notification feed ────────────────────────────────────────────

    /// Start a feed load. Signed-in loads go through the async pipeline;
    /// guest loads replace the collection synchronously with the fixed
    /// demo dataset.
    pub fn begin_feed_load(&mut self) {
        match &self.session {
            Some(traveler) => {
                self.load_inflight = true;
                self.pending_command = Some(AsyncCommand::LoadNotifications {
                    user_id: traveler.id.clone(),
                    epoch: self.feed_epoch,
                });
            }
            None => {
                self.notifications = Notification::guest_demo_feed(Utc::now());
            }
        }
    }

    pub fn apply_command_result(&mut self, result: CommandResult) {
        match result {
            CommandResult::Notifications { epoch, result } => {
                if epoch != self.feed_epoch {
                    tracing::debug!(epoch, current = self.feed_epoch, "dropping stale feed result");
                    return;
                }
                self.load_inflight = false;
                match result {
                    Ok(feed) => self.notifications = feed,
                    Err(e) => {
                        // Failures are silent to the user: keep the feed.
                        tracing::warn!(error = %e, "notification load failed; keeping current feed");
                    }
                }
            }
        }
    }

    /// Unread badge count, derived on every read.
    pub fn unread_count(&self) -> usize {
        tripdeck_core::unread_count(&self.notifications)
    }

    // ── View routing ─────────────────────────────────────────────────

    pub fn select_view(&mut self, view: View) {
        self.view = view;
    }

    /// Compact-menu selection: activates the view and closes the menu as
    /// one transition.
    pub fn select_view_from_menu(&mut self, view: View) {
        self.view = view;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.set_menu(!self.menu_open);
    }

    pub fn set_menu(&mut self, open: bool) {
        self.menu_open = open;
        if open {
            self.menu_index = View::ALL
                .iter()
                .position(|v| *v == self.view)
                .unwrap_or(0);
        }
    }

    // ── Flash helpers ────────────────────────────────────────────────

    pub fn flash_success(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), FlashLevel::Success));
    }

    pub fn flash_info(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), FlashLevel::Info));
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        // Clear flash message on any key press
        self.flash_message = None;

        if self.menu_open {
            return self.handle_menu_key(key);
        }

        match key {
            KeyCode::Char('q') => return true,
            KeyCode::Char('m') => {
                self.toggle_menu();
                return false;
            }
            KeyCode::Tab => {
                self.select_view(self.view.next());
                return false;
            }
            KeyCode::Char('o') if self.session.is_some() => {
                self.sign_out();
                return false;
            }
            KeyCode::Char(c) => {
                if let Some(view) = View::from_hotkey(c) {
                    self.select_view(view);
                    return false;
                }
            }
            _ => {}
        }

        // Everything else belongs to the active feature area.
        let view = self.view;
        let event = {
            let ctx = FeatureContext {
                session: self.session.as_ref(),
                notifications: &self.notifications,
                nickname: &self.config.identity.nickname,
            };
            self.features
                .iter_mut()
                .find(|f| f.view() == view)
                .and_then(|feature| feature.handle_key(key, &ctx))
        };
        if let Some(event) = event {
            self.apply_feature_event(event);
        }
        false
    }

    fn handle_menu_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Char('m') => self.set_menu(false),
            KeyCode::Char('j') | KeyCode::Down => {
                self.menu_index = (self.menu_index + 1) % View::ALL.len();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.menu_index = if self.menu_index == 0 {
                    View::ALL.len() - 1
                } else {
                    self.menu_index - 1
                };
            }
            KeyCode::Enter => {
                self.select_view_from_menu(View::ALL[self.menu_index]);
            }
            KeyCode::Char(c) => {
                if let Some(view) = View::from_hotkey(c) {
                    self.select_view_from_menu(view);
                }
            }
            _ => {}
        }
        false
    }

    /// Route an event emitted by a feature area back into the shell.
    pub fn apply_feature_event(&mut self, event: FeatureEvent) {
        match event {
            FeatureEvent::SignIn(traveler) => self.sign_in(traveler),
            FeatureEvent::SignOut => self.sign_out(),
            FeatureEvent::ReplaceNotifications(feed) => self.notifications = feed,
        }
    }
}
