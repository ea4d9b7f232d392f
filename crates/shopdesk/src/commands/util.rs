//! Shared helpers for command handlers.

use std::io::IsTerminal;

use shopdesk_core::{DeleteOutcome, ListSession, Resource, ResourceSource};

use crate::cli::{DeleteArgs, GlobalOpts, ListArgs};
use crate::error::CliError;
use crate::output;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool, action: &str) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Unwrap a field that `create` cannot do without.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, CliError> {
    value.ok_or_else(|| CliError::Validation {
        field: field.into(),
        reason: "required when creating".into(),
    })
}

/// Size of the window to request: `--page-size`, else the profile's.
pub fn page_size(list: &ListArgs, configured: u32) -> Result<u32, CliError> {
    match list.page_size {
        Some(0) => Err(CliError::Validation {
            field: "page-size".into(),
            reason: "must be at least 1".into(),
        }),
        Some(n) => Ok(n),
        None => Ok(configured),
    }
}

/// Load `page` into the session's store, surfacing a failed fetch.
pub async fn load_page<S: ResourceSource>(
    session: &ListSession<S>,
    page: u32,
) -> Result<(), CliError> {
    if page == 0 {
        return Err(CliError::Validation {
            field: "page".into(),
            reason: "pages start at 1".into(),
        });
    }
    session.store().set_page(page).await?;
    Ok(())
}

/// Load `page` and pick out the item with `id`.
pub async fn find_on_page<S: ResourceSource>(
    session: &ListSession<S>,
    page: u32,
    id: u64,
) -> Result<S::Item, CliError> {
    load_page(session, page).await?;
    let kind = <S::Item as Resource>::KIND;
    session
        .store()
        .items()
        .into_iter()
        .find(|item| item.id() == id)
        .ok_or_else(|| CliError::NotFound {
            resource_type: kind.into(),
            identifier: id.to_string(),
            list_command: format!("{kind}s list --page {page}"),
        })
}

/// Delete through the coordinator: load the page, open the intent,
/// confirm, send. Returns `None` when the user declines.
pub async fn delete_on_page<S: ResourceSource>(
    session: &ListSession<S>,
    args: &DeleteArgs,
    global: &GlobalOpts,
) -> Result<Option<DeleteOutcome>, CliError> {
    let kind = <S::Item as Resource>::KIND;
    let item = find_on_page(session, args.page, args.id).await?;
    session.mutations().request_delete(item).await?;

    let prompt = format!("Delete {kind} {}? This cannot be undone.", args.id);
    if !confirm(&prompt, global.yes, &format!("{kind} delete"))? {
        session.mutations().cancel().await?;
        return Ok(None);
    }

    let outcome = session.mutations().confirm_delete().await?;
    let message = match outcome {
        DeleteOutcome::Removed => format!("Deleted {kind} {}", args.id),
        DeleteOutcome::SteppedBack { page } => {
            format!("Deleted {kind} {}; page emptied, now on page {page}", args.id)
        }
        DeleteOutcome::AlreadyAbsent => format!("{kind} {} was already gone", args.id),
    };
    output::status(global, &message);
    Ok(Some(outcome))
}

/// Table/format the current window and print the pagination hint to
/// stderr.
pub fn print_window<S, R>(
    session: &ListSession<S>,
    global: &GlobalOpts,
    to_row: impl Fn(&S::Item) -> R,
    id_fn: impl Fn(&S::Item) -> String,
) where
    S: ResourceSource,
    S::Item: serde::Serialize,
    R: tabled::Tabled,
{
    let store = session.store();
    let items = store.items();
    let out = output::render_list(global.output, &items, to_row, id_fn);
    output::print_output(&out, global.quiet);

    if !global.quiet {
        let hint = output::pagination_hint(
            store.page_number(),
            store.has_previous(),
            store.has_next(),
        );
        let color = output::should_color(global.color);
        eprintln!("{}", output::muted(&hint, color));
    }
}
