use std::time::Duration;

use tripdeck_core::Notification;

use crate::config::BackendSettings;

/// Commands that require async I/O (network calls).
pub enum AsyncCommand {
    /// Fetch the notification feed for a signed-in traveler. The epoch is
    /// echoed back so results issued before a session change can be dropped.
    LoadNotifications { user_id: String, epoch: u64 },
}

/// Results returned by async commands.
pub enum CommandResult {
    Notifications {
        epoch: u64,
        result: Result<Vec<Notification>, String>,
    },
}

fn make_client(backend: &BackendSettings) -> Result<tripdeck_api_client::ApiClient, String> {
    tripdeck_api_client::ApiClient::new(
        &backend.url,
        &backend.anon_key,
        Duration::from_secs(backend.request_timeout_secs),
    )
    .map_err(|e| format!("Failed to create HTTP client: {e}"))
}

pub async fn execute(cmd: AsyncCommand, backend: &BackendSettings) -> CommandResult {
    match cmd {
        AsyncCommand::LoadNotifications { user_id, epoch } => {
            let result = async {
                let client = make_client(backend)?;
                client
                    .list_notifications(&user_id)
                    .await
                    .map_err(|e| format!("{e}"))
            }
            .await;
            CommandResult::Notifications { epoch, result }
        }
    }
}
