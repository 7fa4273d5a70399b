//! Table bound to a [`TableViewState`]: header checkbox, sortable columns from
//! the row schema, one checkbox per row.

use super::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::list_utils::highlight_matches;
use crate::shared::table_view::{TableViewState, ViewPhase, ViewRow};
use contracts::shared::table_schema::FieldKind;
use leptos::prelude::*;
use thaw::*;

/// `<For>` key: the id plus the row's content, so a reload that changes any
/// value of a known row re-renders that row.
fn row_key<R: ViewRow>(row: &R) -> (R::Id, String) {
    (row.row_id(), format!("{row:?}"))
}

#[component]
pub fn DataTable<R>(
    state: RwSignal<TableViewState<R>>,
    /// DOM id of the `<table>`
    table_id: &'static str,
    /// Shown when the collection is empty
    #[prop(optional, into)]
    empty_text: String,
) -> impl IntoView
where
    R: ViewRow,
{
    let columns = R::columns();
    let empty_text = if empty_text.is_empty() {
        "Nothing here yet.".to_string()
    } else {
        empty_text
    };

    let sort = Signal::derive(move || state.with(|s| s.sort().clone()));
    let on_sort = Callback::new(move |key: &'static str| state.update(|s| s.toggle_sort(key)));
    let locked = Signal::derive(move || state.with(|s| s.phase() == ViewPhase::Mutating));
    let visible = Signal::derive(move || {
        state.with(|s| s.visible_rows().into_iter().cloned().collect::<Vec<R>>())
    });

    let header_cells = columns
        .iter()
        .map(|col| {
            view! {
                <SortableHeaderCell
                    label=col.label
                    sort_key=col.key
                    sort=sort
                    on_sort=on_sort
                    min_width=if col.is_numeric() { 80.0 } else { 200.0 }
                    align=if col.is_numeric() { "right" } else { "left" }
                />
            }
        })
        .collect_view();

    let render_row = move |row: R| {
        let id = row.row_id();
        let id_checked = id.clone();
        let id_toggle = id.clone();
        let id_failed = id.clone();

        let cells = columns
            .iter()
            .map(|col| {
                let value = row.cell(col.key);
                let text = value.display();
                let class = if col.is_numeric() { "table__cell--number" } else { "" };
                let content = if col.kind == FieldKind::Text && !value.is_null() {
                    view! {
                        <span>{move || state.with(|s| highlight_matches(&text, s.filter().as_str()))}</span>
                    }
                    .into_any()
                } else {
                    view! { <span>{text}</span> }.into_any()
                };
                view! {
                    <TableCell class=class>
                        <TableCellLayout truncate=true>{content}</TableCellLayout>
                    </TableCell>
                }
            })
            .collect_view();

        view! {
            <TableRow
                class:table__row--selected=move || state.with(|s| s.is_selected(&id))
                class:table__row--failed=move || state.with(|s| s.failed_id() == Some(&id_failed))
            >
                <TableCellCheckbox
                    checked=Signal::derive(move || state.with(|s| s.is_selected(&id_checked)))
                    disabled=locked
                    on_change=Callback::new(move |_: bool| {
                        state.update(|s| {
                            s.toggle_row_selection(&id_toggle);
                        });
                    })
                />
                {cells}
            </TableRow>
        }
    };

    view! {
        <div class="table-wrapper">
            <Table attr:id=table_id attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox
                            total=Signal::derive(move || visible.with(|rows| rows.len()))
                            selected=Signal::derive(move || state.with(|s| s.visible_selected_count()))
                            disabled=locked
                            on_change=Callback::new(move |all: bool| state.update(|s| s.set_visible_selected(all)))
                        />
                        {header_cells}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For each=move || visible.get() key={row_key::<R>} children=render_row />
                </TableBody>
            </Table>

            <Show when=move || state.with(|s| s.phase() == ViewPhase::Loading)>
                <div class="table__status"><Spinner /></div>
            </Show>
            <Show when=move || state.with(|s| s.phase() == ViewPhase::Loaded) && visible.with(|rows| rows.is_empty())>
                <div class="table__status">
                    {
                        let empty_text = empty_text.clone();
                        move || state.with(|s| {
                            if s.filter().is_empty() {
                                empty_text.clone()
                            } else {
                                format!("No rows match \"{}\".", s.filter().as_str().trim())
                            }
                        })
                    }
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::test_support::fruit;

    #[test]
    fn test_row_key_changes_with_values() {
        let before = fruit(1, Some("Apple"), Some(52.0));
        let after = fruit(1, Some("Apple"), Some(57.0));
        assert_eq!(row_key(&before), row_key(&before.clone()));
        assert_ne!(row_key(&before), row_key(&after));
        assert_eq!(row_key(&after).0, 1);
    }
}
