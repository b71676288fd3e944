pub mod analytics;
pub mod booking;
pub mod explore;
pub mod itinerary;
pub mod menu_sheet;
pub mod nav_bar;
pub mod notifications;
pub mod payment;
pub mod profile;

use crossterm::event::KeyCode;
use ratatui::prelude::*;

use tripdeck_core::{Notification, Traveler};

use crate::app::View;

/// Read-only shell state handed to a feature area for rendering and
/// key handling.
pub struct FeatureContext<'a> {
    pub session: Option<&'a Traveler>,
    pub notifications: &'a [Notification],
    /// Configured display name, used when a sign-in prompt constructs
    /// the local demo identity.
    pub nickname: &'a str,
}

/// Events a feature area can raise back into the shell. Areas never
/// mutate shell state directly.
pub enum FeatureEvent {
    SignIn(Traveler),
    SignOut,
    /// Wholesale replacement of the notification collection, e.g. after
    /// marking entries read.
    ReplaceNotifications(Vec<Notification>),
}

/// One routable content pane. The shell keeps exactly one mounted at a
/// time, selected by [`View`].
pub trait FeatureArea {
    fn view(&self) -> View;

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &FeatureContext);

    /// Keys the shell did not consume. Default: ignore.
    fn handle_key(&mut self, _key: KeyCode, _ctx: &FeatureContext) -> Option<FeatureEvent> {
        None
    }
}

/// Registry of all feature areas, in nav order.
pub fn all_feature_areas() -> Vec<Box<dyn FeatureArea>> {
    vec![
        Box::new(itinerary::ItineraryArea::default()),
        Box::new(explore::ExploreArea::default()),
        Box::new(booking::BookingArea::default()),
        Box::new(profile::ProfileArea::default()),
        Box::new(notifications::NotificationCenter::default()),
        Box::new(payment::PaymentArea::default()),
        Box::new(analytics::AnalyticsArea::default()),
    ]
}

/// Local demo identity used by the sign-in prompts, named after the
/// configured nickname. Real auth is a backend concern; the shell only
/// manages the resulting session.
pub fn demo_traveler(nickname: &str) -> Traveler {
    let mut traveler = Traveler::new("u1", nickname);
    traveler.email = Some(format!("{nickname}@example.com"));
    traveler
}
