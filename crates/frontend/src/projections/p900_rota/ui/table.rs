use crate::usecases::u501_row_manager::PlannerViewModel;
use contracts::projections::p900_rota::{RotaRow, ROTA_HEADERS};
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

/// Сводная таблица ROTA. Показывает последний построенный снимок.
#[component]
pub fn RotaTableView() -> impl IntoView {
    let vm = use_context::<PlannerViewModel>().expect("PlannerViewModel not found in context");

    let rows = move || vm.state.with(|planner| planner.rota().rows.clone());
    let built_at = move || {
        vm.state.with(|planner| {
            planner
                .rota()
                .built_at
                .map(|ts| ts.with_timezone(&chrono::Local).format("%d.%m.%Y %H:%M:%S").to_string())
        })
    };

    view! {
        <section class="rota">
            <div class="rota__header">
                <h3>"ROTA"</h3>
                {move || built_at().map(|ts| view! { <span class="rota__built-at">{ts}</span> })}
            </div>
            <div id="rota-table">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {ROTA_HEADERS
                                .iter()
                                .map(|title| view! { <TableHeaderCell>{*title}</TableHeaderCell> })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            rows()
                                .into_iter()
                                .map(|row: RotaRow| {
                                    view! {
                                        <TableRow>
                                            {row
                                                .cells()
                                                .into_iter()
                                                .map(|cell| view! { <TableCell>{cell}</TableCell> })
                                                .collect_view()}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>
        </section>
    }
}
