// Notification endpoints
//
// These live on the public API root, not under `/admin`.

use serde::Serialize;
use tracing::debug;

use crate::client::AdminClient;
use crate::error::Error;
use crate::models::{DataEnvelope, NestedListEnvelope, Notification, SentNotification};

impl AdminClient {
    /// Most recent notifications.
    ///
    /// `GET /notifications/latest`
    pub async fn latest_notifications(&self) -> Result<Vec<Notification>, Error> {
        let url = self.public_url("notifications/latest")?;
        debug!("fetching latest notifications");
        let envelope: NestedListEnvelope<Notification> = self.get(url).await?;
        Ok(envelope.into_items())
    }

    /// Broadcast a notification.
    ///
    /// `POST /notifications/send` with `{"title": "...", "body": "..."}`
    pub async fn send_notification(&self, title: &str, body: &str) -> Result<Notification, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            title: &'a str,
            body: &'a str,
        }

        let url = self.public_url("notifications/send")?;
        debug!(title, "sending notification");
        let envelope: DataEnvelope<SentNotification> =
            self.post_json(url, &Body { title, body }).await?;
        Ok(envelope.data.notification)
    }
}
