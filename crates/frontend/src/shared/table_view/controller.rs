//! Async drivers for the table view.
//!
//! Every state change goes through a [`ViewStore`], which reports whether the
//! view still exists. A response that arrives after the view was torn down is
//! dropped without touching anything.

use super::schema::ViewRow;
use super::state::{BulkFailure, BulkOutcome, LoadOutcome, LoadTicket, TableViewState};
use crate::shared::api_utils::ApiError;
use async_trait::async_trait;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Fetches the full row collection for a view
#[async_trait(?Send)]
pub trait RowSource<R: ViewRow> {
    async fn fetch_rows(&self) -> Result<Vec<R>, ApiError>;
}

/// Mutation applied to one selected row
#[async_trait(?Send)]
pub trait RowAction<R: ViewRow> {
    async fn apply(&self, row: &R) -> Result<(), ApiError>;
}

/// Handle to a live view. `None` means the view is gone.
pub trait ViewStore<R: ViewRow> {
    fn try_update_view<U>(&self, f: impl FnOnce(&mut TableViewState<R>) -> U) -> Option<U>;
}

impl<R: ViewRow> ViewStore<R> for RwSignal<TableViewState<R>> {
    fn try_update_view<U>(&self, f: impl FnOnce(&mut TableViewState<R>) -> U) -> Option<U> {
        self.try_update(f)
    }
}

impl<R: ViewRow> ViewStore<R> for Rc<RefCell<TableViewState<R>>> {
    fn try_update_view<U>(&self, f: impl FnOnce(&mut TableViewState<R>) -> U) -> Option<U> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<R: ViewRow> ViewStore<R> for Weak<RefCell<TableViewState<R>>> {
    fn try_update_view<U>(&self, f: impl FnOnce(&mut TableViewState<R>) -> U) -> Option<U> {
        let state = self.upgrade()?;
        let mut guard = state.borrow_mut();
        Some(f(&mut guard))
    }
}

/// Fetch rows into the view. A no-op returning `Busy` while a load or bulk
/// action is in flight.
pub async fn load<R, S, V>(view: &V, source: &S) -> LoadOutcome
where
    R: ViewRow,
    S: RowSource<R> + ?Sized,
    V: ViewStore<R>,
{
    let ticket = match view.try_update_view(|state| state.begin_load()) {
        None => return LoadOutcome::Discarded,
        Some(None) => {
            log::debug!("Load skipped: view is busy");
            return LoadOutcome::Busy;
        }
        Some(Some(ticket)) => ticket,
    };
    fetch_into(view, source, ticket).await
}

/// Load after a change made elsewhere (a saved form). Unlike [`load`] this
/// never drops the request: a running load is superseded and a running bulk
/// action gets it queued.
pub async fn reload<R, S, V>(view: &V, source: &S) -> LoadOutcome
where
    R: ViewRow,
    S: RowSource<R> + ?Sized,
    V: ViewStore<R>,
{
    let ticket = match view.try_update_view(|state| state.begin_reload()) {
        None => return LoadOutcome::Discarded,
        Some(None) => {
            log::debug!("Reload queued behind a bulk action");
            return LoadOutcome::Queued;
        }
        Some(Some(ticket)) => ticket,
    };
    fetch_into(view, source, ticket).await
}

async fn fetch_into<R, S, V>(view: &V, source: &S, ticket: LoadTicket) -> LoadOutcome
where
    R: ViewRow,
    S: RowSource<R> + ?Sized,
    V: ViewStore<R>,
{
    log::debug!("Loading rows");
    let result = source.fetch_rows().await;
    if let Err(e) = &result {
        log::warn!("Failed to load rows: {}", e);
    }
    match view.try_update_view(|state| state.finish_load(ticket, result)) {
        Some(LoadOutcome::Loaded(count)) => {
            log::debug!("Loaded {} rows", count);
            LoadOutcome::Loaded(count)
        }
        Some(LoadOutcome::Discarded) | None => {
            log::debug!("Load result discarded");
            LoadOutcome::Discarded
        }
        Some(outcome) => outcome,
    }
}

/// Apply `action` to each selected row in selection order, stopping at the
/// first failure. On success the selection is cleared and the rows are
/// reloaded from `source`; on failure the selection is left as it was.
pub async fn bulk_action<R, A, S, V>(view: &V, action: &A, source: &S) -> BulkOutcome<R::Id>
where
    R: ViewRow,
    A: RowAction<R> + ?Sized,
    S: RowSource<R> + ?Sized,
    V: ViewStore<R>,
{
    let ticket = match view.try_update_view(|state| state.begin_bulk()) {
        None => return BulkOutcome::Discarded,
        Some(None) => return BulkOutcome::Skipped,
        Some(Some(ticket)) => ticket,
    };
    log::debug!("Bulk action on {} rows", ticket.len());

    let mut result = Ok(());
    for (index, row) in ticket.rows().iter().enumerate() {
        if let Err(error) = action.apply(row).await {
            log::warn!("Bulk action failed on {} ({}): {}", row.label(), row.row_id(), error);
            result = Err(BulkFailure {
                index,
                id: row.row_id(),
                label: row.label(),
                error,
            });
            break;
        }
    }
    let failure = result.as_ref().err().cloned();

    match view.try_update_view(|state| state.finish_bulk(&ticket, result)) {
        None => {
            log::debug!("Bulk action result discarded");
            BulkOutcome::Discarded
        }
        Some(Some(reload_ticket)) => BulkOutcome::Completed {
            applied: ticket.len(),
            reload: fetch_into(view, source, reload_ticket).await,
        },
        Some(None) => match failure {
            Some(failure) => BulkOutcome::Failed(failure),
            None => BulkOutcome::Discarded,
        },
    }
}
