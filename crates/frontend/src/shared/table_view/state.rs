//! View state and its transitions.
//!
//! ```text
//! Idle -> Loading -> Loaded | LoadError
//! Loaded -> Loading (reload)
//! Loaded -> Mutating -> Loading (success) | Loaded + error (failure, selection kept)
//! ```
//!
//! Async work is bracketed by `begin_*` / `finish_*` pairs. A `begin_*` call on
//! a busy view returns `None`, so a second click never starts a duplicate
//! request. A `finish_*` call with an outdated ticket is ignored.
//!
//! `begin_reload` is the exception: it follows a change made elsewhere, so it
//! supersedes a running load and is queued behind a running bulk action.

use super::filter::FilterQuery;
use super::schema::ViewRow;
use super::selection::SelectionSet;
use super::sort::{sort_rows, SortSpec};
use crate::shared::api_utils::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadError,
    Mutating,
}

/// Issued by `begin_load`, redeemed by `finish_load`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Issued by `begin_bulk`: the rows to mutate, in selection order
#[derive(Debug, Clone)]
pub struct BulkTicket<R> {
    epoch: u64,
    rows: Vec<R>,
}

impl<R> BulkTicket<R> {
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(usize),
    Failed(String),
    /// Another load or bulk action is still running
    Busy,
    /// Deferred until the running bulk action ends
    Queued,
    /// The view was torn down or reloaded before the response arrived
    Discarded,
}

/// First row a bulk action failed on
#[derive(Debug, Clone, PartialEq)]
pub struct BulkFailure<Id> {
    /// Position in the selection
    pub index: usize,
    pub id: Id,
    pub label: String,
    pub error: ApiError,
}

impl<Id> BulkFailure<Id> {
    pub fn message(&self) -> String {
        format!("\"{}\": {}", self.label, self.error.user_message())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BulkOutcome<Id> {
    Completed { applied: usize, reload: LoadOutcome },
    Failed(BulkFailure<Id>),
    /// Nothing selected, or the view is busy
    Skipped,
    Discarded,
}

#[derive(Debug, Clone)]
pub struct TableViewState<R: ViewRow> {
    rows: Vec<R>,
    filter: FilterQuery,
    sort: SortSpec,
    selection: SelectionSet<R::Id>,
    phase: ViewPhase,
    error: Option<String>,
    failed_id: Option<R::Id>,
    epoch: u64,
    reload_pending: bool,
}

impl<R: ViewRow> TableViewState<R> {
    pub fn new(sort: SortSpec) -> Self {
        Self {
            rows: Vec::new(),
            filter: FilterQuery::default(),
            sort,
            selection: SelectionSet::new(),
            phase: ViewPhase::Idle,
            error: None,
            failed_id: None,
            epoch: 0,
            reload_pending: false,
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn filter(&self) -> &FilterQuery {
        &self.filter
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn selection(&self) -> &SelectionSet<R::Id> {
        &self.selection
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Message of the last failed load or bulk action
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Row the last bulk action stopped on
    pub fn failed_id(&self) -> Option<&R::Id> {
        self.failed_id.as_ref()
    }

    /// A reload was requested during a bulk action that then failed
    pub fn reload_pending(&self) -> bool {
        self.reload_pending
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, ViewPhase::Loading | ViewPhase::Mutating)
    }

    pub fn is_selected(&self, id: &R::Id) -> bool {
        self.selection.contains(id)
    }

    pub fn set_filter_query(&mut self, text: &str) {
        self.filter = FilterQuery::new(text);
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.sort.toggle(key);
    }

    /// Toggle one row. Ids that are not in the collection and toggles during a
    /// bulk action are ignored. Returns whether the row is selected afterwards.
    pub fn toggle_row_selection(&mut self, id: &R::Id) -> bool {
        if self.phase == ViewPhase::Mutating || !self.contains_row(id) {
            return self.selection.contains(id);
        }
        self.selection.toggle(id)
    }

    /// Select or deselect every row currently visible
    pub fn set_visible_selected(&mut self, selected: bool) {
        if self.phase == ViewPhase::Mutating {
            return;
        }
        let ids: Vec<R::Id> = self.visible_rows().iter().map(|r| r.row_id()).collect();
        for id in ids {
            if selected {
                self.selection.insert(id);
            } else {
                self.selection.remove(&id);
            }
        }
    }

    pub fn clear_selection(&mut self) {
        if self.phase != ViewPhase::Mutating {
            self.selection.clear();
        }
    }

    /// Filtered then sorted rows, recomputed on every call
    pub fn visible_rows(&self) -> Vec<&R> {
        let filtered: Vec<&R> = self
            .rows
            .iter()
            .filter(|r| self.filter.matches(r.search_text()))
            .collect();
        sort_rows(filtered, &self.sort)
    }

    /// How many of the visible rows are selected
    pub fn visible_selected_count(&self) -> usize {
        self.visible_rows()
            .iter()
            .filter(|r| self.selection.contains(&r.row_id()))
            .count()
    }

    /// Selected rows in selection order
    pub fn selected_rows(&self) -> Vec<&R> {
        self.selection
            .iter()
            .filter_map(|id| self.rows.iter().find(|r| &r.row_id() == id))
            .collect()
    }

    /// The selected row when exactly one is selected
    pub fn single_selected(&self) -> Option<&R> {
        match self.selected_rows().as_slice() {
            [row] => Some(*row),
            _ => None,
        }
    }

    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.is_busy() {
            return None;
        }
        Some(self.start_loading())
    }

    /// Load after a change made outside the table. A running load is
    /// superseded and its response will be discarded. During a bulk action the
    /// reload is only recorded: a successful bulk action reloads anyway, a
    /// failed one leaves `reload_pending` set so the selection survives.
    pub fn begin_reload(&mut self) -> Option<LoadTicket> {
        if self.phase == ViewPhase::Mutating {
            self.reload_pending = true;
            return None;
        }
        Some(self.start_loading())
    }

    /// Apply a fetch result. Failures empty the collection so stale rows are
    /// never shown next to the error.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<R>, ApiError>) -> LoadOutcome {
        if self.phase != ViewPhase::Loading || ticket.0 != self.epoch {
            return LoadOutcome::Discarded;
        }
        self.selection.clear();
        match result {
            Ok(rows) => {
                let count = rows.len();
                self.rows = rows;
                self.phase = ViewPhase::Loaded;
                self.error = None;
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                let message = e.user_message();
                self.rows.clear();
                self.phase = ViewPhase::LoadError;
                self.error = Some(message.clone());
                LoadOutcome::Failed(message)
            }
        }
    }

    pub fn begin_bulk(&mut self) -> Option<BulkTicket<R>> {
        if self.is_busy() || self.selection.is_empty() {
            return None;
        }
        let rows: Vec<R> = self.selected_rows().into_iter().cloned().collect();
        if rows.is_empty() {
            return None;
        }
        self.epoch += 1;
        self.phase = ViewPhase::Mutating;
        self.error = None;
        self.failed_id = None;
        Some(BulkTicket {
            epoch: self.epoch,
            rows,
        })
    }

    /// Close a bulk action. Success clears the selection and starts the
    /// reload, returning its ticket. Failure keeps the selection for a retry.
    pub fn finish_bulk(
        &mut self,
        ticket: &BulkTicket<R>,
        result: Result<(), BulkFailure<R::Id>>,
    ) -> Option<LoadTicket> {
        if self.phase != ViewPhase::Mutating || ticket.epoch != self.epoch {
            return None;
        }
        match result {
            Ok(()) => {
                self.selection.clear();
                Some(self.start_loading())
            }
            Err(failure) => {
                self.phase = ViewPhase::Loaded;
                self.error = Some(failure.message());
                self.failed_id = Some(failure.id);
                None
            }
        }
    }

    fn start_loading(&mut self) -> LoadTicket {
        self.epoch += 1;
        self.phase = ViewPhase::Loading;
        self.error = None;
        self.failed_id = None;
        self.reload_pending = false;
        LoadTicket(self.epoch)
    }

    fn contains_row(&self, id: &R::Id) -> bool {
        self.rows.iter().any(|r| &r.row_id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::sort::SortDirection;
    use crate::shared::table_view::test_support::{fruit, fruit_basket, ids, loaded_state, Fruit};

    fn server_error() -> ApiError {
        ApiError::Server {
            status: 500,
            detail: "Failed to load products".into(),
        }
    }

    #[test]
    fn test_filter_example() {
        let mut state = loaded_state(fruit_basket());
        state.set_filter_query("an");
        assert_eq!(ids(&state.visible_rows()), vec![2]);
    }

    #[test]
    fn test_filter_subset_property() {
        let mut rows = fruit_basket();
        rows.push(fruit(4, None, Some(10.0)));
        rows.push(fruit(5, Some("BANANA split"), None));
        let mut state = loaded_state(rows.clone());

        for q in ["", "an", "AN", " e ", "x", "cherry"] {
            state.set_filter_query(q);
            let visible = state.visible_rows();
            let needle = q.trim().to_lowercase();
            if needle.is_empty() {
                assert_eq!(visible.len(), rows.len());
            }
            if !needle.is_empty() {
                for row in &visible {
                    let name = row.name.as_deref().expect("rows without a name never match");
                    assert!(name.to_lowercase().contains(&needle), "query {q:?}");
                }
            }
            let expected = rows
                .iter()
                .filter(|r| {
                    needle.is_empty()
                        || r.name.as_deref().is_some_and(|n| n.to_lowercase().contains(&needle))
                })
                .count();
            assert_eq!(visible.len(), expected, "query {q:?}");
        }
    }

    #[test]
    fn test_sort_example() {
        let mut state = loaded_state(fruit_basket());
        state.toggle_sort("kcal");
        assert_eq!(ids(&state.visible_rows()), vec![1, 2, 3]);
        state.toggle_sort("kcal");
        assert_eq!(ids(&state.visible_rows()), vec![2, 1, 3]);
        assert_eq!(state.sort(), &SortSpec::by("kcal", SortDirection::Desc));
    }

    #[test]
    fn test_second_toggle_inverts_non_null_order() {
        let rows = vec![
            fruit(1, Some("d"), Some(3.0)),
            fruit(2, Some("a"), None),
            fruit(3, Some("c"), Some(1.0)),
            fruit(4, Some("b"), Some(2.0)),
        ];
        let mut state = loaded_state(rows);
        state.toggle_sort("kcal");
        let first = ids(&state.visible_rows());
        state.toggle_sort("kcal");
        let second = ids(&state.visible_rows());

        let mut first_non_null: Vec<u32> = first.iter().copied().filter(|&id| id != 2).collect();
        first_non_null.reverse();
        let second_non_null: Vec<u32> = second.iter().copied().filter(|&id| id != 2).collect();
        assert_eq!(first_non_null, second_non_null);
        assert_eq!(first.last(), Some(&2));
        assert_eq!(second.last(), Some(&2));
    }

    #[test]
    fn test_filter_and_sort_survive_each_other() {
        let mut state = loaded_state(fruit_basket());
        state.toggle_sort("name");
        state.toggle_sort("name");
        state.set_filter_query("a");
        assert_eq!(ids(&state.visible_rows()), vec![2, 1]);
    }

    #[test]
    fn test_toggle_selection_round_trip() {
        let mut state = loaded_state(fruit_basket());
        state.toggle_row_selection(&1);
        let before = state.selection().clone();
        assert!(state.toggle_row_selection(&3));
        assert!(!state.toggle_row_selection(&3));
        assert_eq!(state.selection(), &before);
    }

    #[test]
    fn test_single_selected() {
        let mut state = loaded_state(fruit_basket());
        assert!(state.single_selected().is_none());
        state.toggle_row_selection(&2);
        assert_eq!(state.single_selected().map(|r| r.id), Some(2));
        state.toggle_row_selection(&3);
        assert!(state.single_selected().is_none());
    }

    #[test]
    fn test_unknown_id_not_selected() {
        let mut state = loaded_state(fruit_basket());
        assert!(!state.toggle_row_selection(&42));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_selection_survives_resort_and_filter() {
        let mut state = loaded_state(fruit_basket());
        state.toggle_row_selection(&2);
        state.toggle_sort("kcal");
        state.set_filter_query("app");
        assert!(state.is_selected(&2));
    }

    #[test]
    fn test_select_all_visible() {
        let mut state = loaded_state(fruit_basket());
        state.set_filter_query("an");
        state.set_visible_selected(true);
        assert_eq!(state.selection().len(), 1);
        assert_eq!(state.visible_selected_count(), 1);
        state.set_filter_query("");
        state.set_visible_selected(true);
        assert_eq!(state.selection().len(), 3);
        state.set_visible_selected(false);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_load_replaces_rows_and_clears_selection() {
        let mut state = loaded_state(fruit_basket());
        state.toggle_row_selection(&1);
        let ticket = state.begin_load().unwrap();
        assert_eq!(state.phase(), ViewPhase::Loading);
        let outcome = state.finish_load(ticket, Ok(vec![fruit(9, Some("Fig"), None)]));
        assert_eq!(outcome, LoadOutcome::Loaded(1));
        assert_eq!(state.rows().len(), 1);
        assert!(state.selection().is_empty());
        assert_eq!(state.phase(), ViewPhase::Loaded);
    }

    #[test]
    fn test_failed_load_is_fail_closed() {
        let mut state = loaded_state(fruit_basket());
        state.toggle_row_selection(&1);
        let ticket = state.begin_load().unwrap();
        let outcome = state.finish_load(ticket, Err(server_error()));
        assert_eq!(outcome, LoadOutcome::Failed("Failed to load products".into()));
        assert!(state.rows().is_empty());
        assert!(state.selection().is_empty());
        assert_eq!(state.phase(), ViewPhase::LoadError);
        assert_eq!(state.error(), Some("Failed to load products"));

        // recoverable
        let ticket = state.begin_load().unwrap();
        state.finish_load(ticket, Ok(fruit_basket()));
        assert_eq!(state.error(), None);
        assert_eq!(state.rows().len(), 3);
    }

    #[test]
    fn test_duplicate_load_rejected_while_busy() {
        let mut state: TableViewState<Fruit> = TableViewState::new(SortSpec::unsorted());
        assert!(state.begin_load().is_some());
        assert!(state.begin_load().is_none());
    }

    #[test]
    fn test_stale_ticket_discarded() {
        let mut state: TableViewState<Fruit> = TableViewState::new(SortSpec::unsorted());
        let old = state.begin_load().unwrap();
        state.finish_load(old, Ok(fruit_basket()));
        let current = state.begin_load().unwrap();
        assert_eq!(state.finish_load(old, Ok(Vec::new())), LoadOutcome::Discarded);
        assert_eq!(state.phase(), ViewPhase::Loading);
        assert_eq!(state.finish_load(current, Ok(Vec::new())), LoadOutcome::Loaded(0));
    }

    #[test]
    fn test_reload_supersedes_running_load() {
        let mut state: TableViewState<Fruit> = TableViewState::new(SortSpec::unsorted());
        let first = state.begin_load().unwrap();
        let second = state.begin_reload().expect("reload is never dropped by a load");
        assert_eq!(state.finish_load(first, Ok(fruit_basket())), LoadOutcome::Discarded);
        assert!(state.rows().is_empty());
        assert_eq!(state.finish_load(second, Ok(fruit_basket())), LoadOutcome::Loaded(3));
    }

    #[test]
    fn test_reload_during_bulk_is_recorded() {
        let mut state = loaded_state(fruit_basket());
        state.toggle_row_selection(&1);
        let ticket = state.begin_bulk().unwrap();
        assert!(state.begin_reload().is_none());
        assert!(state.reload_pending());

        let failure = BulkFailure {
            index: 0,
            id: 1,
            label: "Apple".into(),
            error: ApiError::Transport("offline".into()),
        };
        state.finish_bulk(&ticket, Err(failure));
        assert!(state.reload_pending(), "kept after a failed bulk action");
        assert!(state.is_selected(&1));

        state.begin_load().unwrap();
        assert!(!state.reload_pending());
    }

    #[test]
    fn test_bulk_success_satisfies_pending_reload() {
        let mut state = loaded_state(fruit_basket());
        state.toggle_row_selection(&2);
        let ticket = state.begin_bulk().unwrap();
        state.begin_reload();
        assert!(state.finish_bulk(&ticket, Ok(())).is_some());
        assert!(!state.reload_pending());
    }

    #[test]
    fn test_bulk_ticket_in_selection_order() {
        let mut state = loaded_state(fruit_basket());
        assert!(state.begin_bulk().is_none(), "nothing selected");
        state.toggle_row_selection(&3);
        state.toggle_row_selection(&1);
        let ticket = state.begin_bulk().unwrap();
        assert_eq!(ticket.rows().iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(state.phase(), ViewPhase::Mutating);
        assert!(state.begin_load().is_none());
        assert!(state.begin_bulk().is_none());

        // selection frozen while mutating
        state.toggle_row_selection(&2);
        assert!(!state.is_selected(&2));
    }

    #[test]
    fn test_bulk_success_clears_and_reloads() {
        let mut state = loaded_state(fruit_basket());
        state.toggle_row_selection(&1);
        let ticket = state.begin_bulk().unwrap();
        let reload = state.finish_bulk(&ticket, Ok(()));
        assert!(reload.is_some());
        assert!(state.selection().is_empty());
        assert_eq!(state.phase(), ViewPhase::Loading);
    }

    #[test]
    fn test_bulk_failure_keeps_selection() {
        let mut state = loaded_state(fruit_basket());
        state.toggle_row_selection(&2);
        state.toggle_row_selection(&1);
        let before = state.selection().clone();
        let ticket = state.begin_bulk().unwrap();
        let failure = BulkFailure {
            index: 0,
            id: 2,
            label: "Banana".into(),
            error: ApiError::Server {
                status: 400,
                detail: "Product already exists".into(),
            },
        };
        assert!(state.finish_bulk(&ticket, Err(failure)).is_none());
        assert_eq!(state.selection(), &before);
        assert_eq!(state.phase(), ViewPhase::Loaded);
        assert_eq!(state.failed_id(), Some(&2));
        assert_eq!(state.error(), Some("\"Banana\": Product already exists"));
        assert_eq!(state.rows().len(), 3);
    }
}
