//! Fixtures shared by the table view tests.

use super::schema::{CellValue, ViewRow};
use super::state::TableViewState;
use super::{RowAction, RowSource};
use crate::shared::api_utils::ApiError;
use async_trait::async_trait;
use contracts::shared::table_schema::ColumnDef;
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};

const FRUIT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("name", "Name"),
    ColumnDef::number("kcal", "Kcal"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub id: u32,
    pub name: Option<String>,
    pub kcal: Option<f64>,
}

impl ViewRow for Fruit {
    type Id = u32;

    fn columns() -> &'static [ColumnDef] {
        FRUIT_COLUMNS
    }

    fn row_id(&self) -> u32 {
        self.id
    }

    fn search_text(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_deref().into(),
            "kcal" => self.kcal.into(),
            _ => CellValue::Null,
        }
    }
}

pub fn fruit(id: u32, name: Option<&str>, kcal: Option<f64>) -> Fruit {
    Fruit {
        id,
        name: name.map(str::to_string),
        kcal,
    }
}

/// Apple(52), Banana(89), Cherry(null)
pub fn fruit_basket() -> Vec<Fruit> {
    vec![
        fruit(1, Some("Apple"), Some(52.0)),
        fruit(2, Some("Banana"), Some(89.0)),
        fruit(3, Some("Cherry"), None),
    ]
}

pub fn ids(rows: &[&Fruit]) -> Vec<u32> {
    rows.iter().map(|r| r.id).collect()
}

/// State already holding `rows`, as after a successful load
pub fn loaded_state(rows: Vec<Fruit>) -> TableViewState<Fruit> {
    let mut state = TableViewState::new(Default::default());
    let ticket = state.begin_load().expect("idle view accepts a load");
    state.finish_load(ticket, Ok(rows));
    state
}

/// Source answering with queued responses, counting calls
pub struct ScriptedSource {
    pub responses: RefCell<VecDeque<Result<Vec<Fruit>, ApiError>>>,
    pub calls: RefCell<usize>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<Vec<Fruit>, ApiError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl RowSource<Fruit> for ScriptedSource {
    async fn fetch_rows(&self) -> Result<Vec<Fruit>, ApiError> {
        *self.calls.borrow_mut() += 1;
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Action recording every row it is applied to; fails for ids in `failing`
pub struct RecordingAction {
    pub failing: HashSet<u32>,
    pub applied: RefCell<Vec<u32>>,
}

impl RecordingAction {
    pub fn failing_on(ids: &[u32]) -> Self {
        Self {
            failing: ids.iter().copied().collect(),
            applied: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl RowAction<Fruit> for RecordingAction {
    async fn apply(&self, row: &Fruit) -> Result<(), ApiError> {
        self.applied.borrow_mut().push(row.id);
        if self.failing.contains(&row.id) {
            Err(ApiError::Server {
                status: 404,
                detail: format!("Product '{}' not found.", row.label()),
            })
        } else {
            Ok(())
        }
    }
}
