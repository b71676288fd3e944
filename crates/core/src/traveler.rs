use serde::{Deserialize, Serialize};

/// The signed-in traveler. An absent traveler means guest mode, which is a
/// first-class state rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traveler {
    /// Backend user id, used to scope notification queries
    pub id: String,
    /// Display name shown in the header
    pub name: String,
    /// Optional contact address from the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Traveler {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
        }
    }
}
