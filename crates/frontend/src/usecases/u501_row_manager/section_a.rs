use super::view_model::PlannerViewModel;
use crate::shared::components::ui::Input;
use contracts::usecases::u501_row_manager::PlannerEvent;
use leptos::prelude::*;

/// Id поля раздела A, на него ссылается `<label for=…>`
pub fn section_a_input_id(index: usize) -> String {
    format!("section-a-{}", index)
}

/// Раздел A: общие поля, подставляемые в каждую ссылку
#[component]
pub fn SectionAPanel() -> impl IntoView {
    let vm = use_context::<PlannerViewModel>().expect("PlannerViewModel not found in context");

    // Набор полей задаётся конфигурацией и не меняется за сессию
    let labels: Vec<String> = vm.state.with_untracked(|planner| {
        planner
            .section_a()
            .iter()
            .map(|field| field.label.clone())
            .collect()
    });

    view! {
        <section class="section-a">
            <h3>"Section A"</h3>
            <div class="section-a__fields">
                {labels
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| {
                        let value = Signal::derive(move || {
                            vm.state.with(|planner| {
                                planner
                                    .section_a()
                                    .get(index)
                                    .map(|field| field.value.clone())
                                    .unwrap_or_default()
                            })
                        });
                        view! {
                            <Input
                                id=section_a_input_id(index)
                                label=label.clone()
                                data_label=label
                                value=value
                                class="input-field"
                                on_input=Callback::new(move |value: String| {
                                    vm.dispatch(PlannerEvent::EditSectionA { index, value })
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
