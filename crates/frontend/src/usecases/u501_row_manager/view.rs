use super::section_a::SectionAPanel;
use super::view_model::PlannerViewModel;
use crate::domain::a001_use_case_row::ui::UseCaseRowEditor;
use crate::projections::p900_rota::ui::RotaTableView;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_row_manager::{PlanRows, PlannerEvent};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Space};

#[component]
pub fn PlannerPage() -> impl IntoView {
    let vm = use_context::<PlannerViewModel>().expect("PlannerViewModel not found in context");

    view! {
        <div class="content planner">
            <div class="header">
                <h2>{PlanRows::display_name()}</h2>
            </div>

            <SectionAPanel />

            <section class="use-cases">
                <div class="header__actions">
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.dispatch(PlannerEvent::AddRow)
                        >
                            {icon("plus")}
                            " Add Use Case"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.dispatch(PlannerEvent::BuildSummary)
                        >
                            {icon("table")}
                            " Create ROTA"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || !vm.has_rota())
                            on_click=move |_| vm.export_rota_command()
                        >
                            {icon("download")}
                            " Export CSV"
                        </Button>
                    </Space>
                </div>

                <div id="use-case-container">
                    <For
                        each=move || vm.row_ids()
                        key=|row_id| *row_id
                        children=move |row_id| view! { <UseCaseRowEditor row_id=row_id /> }
                    />
                </div>
            </section>

            {move || vm.message.get().map(|e| view! { <div class="error">{e}</div> })}

            <RotaTableView />
        </div>
    }
}
