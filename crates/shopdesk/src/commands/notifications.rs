//! Notification command handlers.

use tabled::Tabled;

use shopdesk_core::{Backoffice, Notification};

use crate::cli::{GlobalOpts, NotificationsArgs, NotificationsCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct NotificationRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Body")]
    body: String,
    #[tabled(rename = "Created")]
    created_at: String,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id,
            title: n.title.clone(),
            body: n.body.clone().unwrap_or_default(),
            created_at: n.created_at.clone().unwrap_or_default(),
        }
    }
}

pub async fn handle(
    backoffice: &Backoffice,
    args: NotificationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NotificationsCommand::Latest => {
            let notifications = backoffice.latest_notifications().await?;
            let out = output::render_list(
                global.output,
                &notifications,
                |n| NotificationRow::from(n),
                |n| n.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NotificationsCommand::Send { title, body } => {
            let sent = backoffice.send_notification(&title, &body).await?;
            output::status(global, &format!("Sent notification {}", sent.id));
            let out = output::render_single(
                global.output,
                &sent,
                |n| {
                    output::detail_lines(&[
                        ("ID", n.id.to_string()),
                        ("Title", n.title.clone()),
                        ("Body", n.body.clone().unwrap_or_default()),
                    ])
                },
                |n| n.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
