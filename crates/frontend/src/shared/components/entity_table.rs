use contracts::domain::common::AdminEntity;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

use super::empty_state::EmptyState;
use super::ui::Badge;
use crate::shared::crud::{table_rows, ListColumns, ListState, RowCells};
use crate::shared::icons::icon;

/// Grid of one collection: one row per record, server order.
///
/// The chevron on the last column is decoration only; rows are never re-sorted.
#[component]
pub fn EntityTable<T>(state: RwSignal<ListState<T>>) -> impl IntoView
where
    T: AdminEntity + ListColumns + Clone + Send + Sync + 'static,
{
    let last = T::HEADERS.len().saturating_sub(1);

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {T::HEADERS
                            .iter()
                            .enumerate()
                            .map(|(i, header)| view! {
                                <TableHeaderCell>
                                    <div class="table__header">
                                        {*header}
                                        {(i == last).then(|| icon("chevron-down"))}
                                    </div>
                                </TableHeaderCell>
                            })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        state
                            .with(table_rows)
                            .into_iter()
                            .map(|RowCells { cells, provisional }| view! {
                                <TableRow>
                                    {cells
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, cell)| view! {
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {cell}
                                                    {(i == 0 && provisional).then(|| view! {
                                                        " "
                                                        <Badge variant="warning">"pending"</Badge>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                        })
                                        .collect_view()}
                                </TableRow>
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>

            {move || {
                if state.with(ListState::shows_loading) {
                    Some(view! { <div class="table__loading">"Loading..."</div> }.into_any())
                } else if state.with(ListState::shows_empty_state) {
                    Some(view! { <EmptyState /> }.into_any())
                } else {
                    None
                }
            }}
        </div>
    }
}
