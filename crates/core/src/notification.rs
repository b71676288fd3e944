use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single user-facing notification as returned by the backend.
///
/// Ordering inside a feed is whatever the source returned; ids are only
/// unique within one load, not across reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    /// Category tag; the wire field is `type`
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Notification category. Unknown wire tags collapse to `Other` so a new
/// backend category never breaks feed parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Booking,
    Payment,
    Itinerary,
    System,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Booking => "Booking",
            Self::Payment => "Payment",
            Self::Itinerary => "Itinerary",
            Self::System => "System",
            Self::Other => "Update",
        }
    }
}

impl Notification {
    /// The fixed guest-mode feed: one unread booking confirmation stamped
    /// 30 minutes before `now`. Replaces the collection wholesale on every
    /// guest load; it is a fallback, not a cache.
    pub fn guest_demo_feed(now: DateTime<Utc>) -> Vec<Notification> {
        vec![Notification {
            id: "1".to_string(),
            kind: NotificationKind::Booking,
            title: "Flight Booking Confirmed".to_string(),
            message: "Your flight from NYC to Paris has been confirmed.".to_string(),
            timestamp: now - Duration::minutes(30),
            read: false,
        }]
    }
}

/// Count of unread notifications. Always derived from the collection,
/// never stored, so every projection of the badge agrees.
pub fn unread_count(feed: &[Notification]) -> usize {
    feed.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            kind: NotificationKind::System,
            title: "t".to_string(),
            message: "m".to_string(),
            timestamp: Utc::now(),
            read,
        }
    }

    #[test]
    fn unread_count_counts_only_unread() {
        let feed = vec![
            notification("1", false),
            notification("2", true),
            notification("3", false),
        ];
        assert_eq!(unread_count(&feed), 2);
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn guest_demo_feed_is_stable_apart_from_timestamp() {
        let now = Utc::now();
        let feed = Notification::guest_demo_feed(now);
        assert_eq!(feed.len(), 1);
        let n = &feed[0];
        assert_eq!(n.id, "1");
        assert_eq!(n.kind, NotificationKind::Booking);
        assert_eq!(n.title, "Flight Booking Confirmed");
        assert_eq!(n.message, "Your flight from NYC to Paris has been confirmed.");
        assert!(!n.read);
        assert_eq!(n.timestamp, now - Duration::minutes(30));

        // Two loads differ only in the relative timestamp
        let later = Notification::guest_demo_feed(now + Duration::minutes(5));
        assert_eq!(later[0].id, feed[0].id);
        assert_eq!(later[0].title, feed[0].title);
        assert_ne!(later[0].timestamp, feed[0].timestamp);
    }

    #[test]
    fn notification_kind_uses_wire_field_type() {
        let json = r#"{
            "id": "n-9",
            "type": "booking",
            "title": "Hotel Reserved",
            "message": "Check-in Friday.",
            "timestamp": "2026-08-01T12:00:00Z",
            "read": true
        }"#;
        let n: Notification = serde_json::from_str(json).expect("deserialize");
        assert_eq!(n.kind, NotificationKind::Booking);
        assert!(n.read);

        let encoded = serde_json::to_value(&n).expect("serialize");
        assert_eq!(encoded["type"], "booking");
    }

    #[test]
    fn unknown_notification_kind_falls_back_to_other() {
        let json = r#"{
            "id": "n-10",
            "type": "weather_alert",
            "title": "Storm warning",
            "message": "Expect delays.",
            "timestamp": "2026-08-01T12:00:00Z",
            "read": false
        }"#;
        let n: Notification = serde_json::from_str(json).expect("deserialize");
        assert_eq!(n.kind, NotificationKind::Other);
    }
}
