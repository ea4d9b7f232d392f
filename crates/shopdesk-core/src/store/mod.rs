// ── Paginated list state ──
//
// One store per list view; reconciled locally by the mutation
// coordinator after remote changes.

mod list;
mod window;

pub use list::{ListState, LoadPhase, PageOutcome, PaginatedListStore};
pub use window::PageWindow;
