//! Client-side table view: free-text filter, sortable columns, row selection
//! and a bulk action over the selected rows.
//!
//! The pure state lives in [`TableViewState`]; the async drivers in
//! [`controller`] talk to the backend through the [`RowSource`] and
//! [`RowAction`] traits and write results back through a [`ViewStore`]
//! (a Leptos `RwSignal` in the app, an `Rc<RefCell<_>>` in tests).
//!
//! ```rust,ignore
//! let view = RwSignal::new(TableViewState::<Product>::new(SortSpec::by("productName", SortDirection::Asc)));
//! spawn_local(async move {
//!     load(&view, &AllProductsSource::new(api)).await;
//! });
//! ```

pub mod controller;
pub mod filter;
pub mod schema;
pub mod selection;
pub mod sort;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use controller::{bulk_action, load, reload, RowAction, RowSource, ViewStore};
pub use filter::FilterQuery;
pub use schema::{CellValue, ViewRow};
pub use selection::SelectionSet;
pub use sort::{SortDirection, SortSpec};
pub use state::{BulkFailure, BulkOutcome, LoadOutcome, TableViewState, ViewPhase};
