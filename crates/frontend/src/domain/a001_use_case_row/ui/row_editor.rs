use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::usecases::u501_row_manager::PlannerViewModel;
use contracts::domain::a001_use_case_row::{RowVisibility, UseCaseRowId};
use contracts::domain::common::AggregateId;
use contracts::enums::{Environment, UseCaseKind};
use contracts::usecases::u501_row_manager::PlannerEvent;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Пункты селектора вида операции
pub fn kind_options() -> Vec<(String, String)> {
    UseCaseKind::all()
        .into_iter()
        .map(|kind| (kind.code().to_string(), kind.display_name().to_string()))
        .collect()
}

fn display(shown: bool, mode: &'static str) -> &'static str {
    if shown {
        mode
    } else {
        "none"
    }
}

/// Одна строка плана: вид, тег/описание, время, исполнитель, ссылки
#[component]
pub fn UseCaseRowEditor(row_id: UseCaseRowId) -> impl IntoView {
    let vm = use_context::<PlannerViewModel>().expect("PlannerViewModel not found in context");

    let visibility = move || {
        vm.state.with(|planner| {
            planner
                .row(row_id)
                .map(|row| row.visibility())
                .unwrap_or_else(|| RowVisibility::for_kind(UseCaseKind::default()))
        })
    };

    let kind = Signal::derive(move || vm.row_field(row_id, |row| row.kind.code().to_string()));
    let tag = Signal::derive(move || vm.row_field(row_id, |row| row.tag.clone()));
    let task_description =
        Signal::derive(move || vm.row_field(row_id, |row| row.task_description.clone()));
    let scheduled_at = Signal::derive(move || vm.row_field(row_id, |row| row.scheduled_at.clone()));
    let actor = Signal::derive(move || vm.row_field(row_id, |row| row.actor.clone()));

    view! {
        <div class="use-case-row" id=row_id.as_string()>
            <Select
                value=kind
                options=kind_options()
                class="use-case-select"
                on_change=Callback::new(move |kind: String| {
                    vm.dispatch(PlannerEvent::ChangeKind { row_id, kind })
                })
            />

            <div
                class="use-case-row__tag"
                style:display=move || display(visibility().tag, "inline-block")
            >
                <Input
                    value=tag
                    placeholder="Tag"
                    class="tag-input"
                    on_input=Callback::new(move |value: String| {
                        vm.dispatch(PlannerEvent::EditTag { row_id, value })
                    })
                />
            </div>

            <div
                class="use-case-row__task"
                style:display=move || display(visibility().task_description, "block")
            >
                <Textarea
                    value=task_description
                    placeholder="Task Description"
                    class="task-desc"
                    on_input=Callback::new(move |value: String| {
                        vm.dispatch(PlannerEvent::EditTaskDescription { row_id, value })
                    })
                />
            </div>

            <Input
                value=scheduled_at
                input_type="datetime-local"
                class="when-input"
                on_input=Callback::new(move |value: String| {
                    vm.dispatch(PlannerEvent::EditScheduledAt { row_id, value })
                })
            />
            <Input
                value=actor
                placeholder="Actor"
                class="actor-input"
                on_input=Callback::new(move |value: String| {
                    vm.dispatch(PlannerEvent::EditActor { row_id, value })
                })
            />

            {Environment::all()
                .into_iter()
                .map(|environment| {
                    view! {
                        <EnvironmentUrlSlot
                            row_id=row_id
                            environment=environment
                            shown=Signal::derive(move || visibility().environments)
                        />
                    }
                })
                .collect_view()}

            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| vm.dispatch(PlannerEvent::RemoveRow { row_id })
            >
                {icon("delete")}
            </Button>
        </div>
    }
}

/// Кнопка окружения и сгенерированная ссылка.
/// Кнопка блокируется после первой генерации.
#[component]
fn EnvironmentUrlSlot(
    row_id: UseCaseRowId,
    environment: Environment,
    #[prop(into)] shown: Signal<bool>,
) -> impl IntoView {
    let vm = use_context::<PlannerViewModel>().expect("PlannerViewModel not found in context");

    let url = Signal::derive(move || vm.row_field(row_id, |row| row.url(environment).to_string()));
    let locked = Signal::derive(move || vm.row_field(row_id, |row| row.is_locked(environment)));
    let copied = RwSignal::new(false);

    let on_copy = move |_: leptos::ev::MouseEvent| {
        let text = url.get_untracked();
        copy_to_clipboard_with_callback(&text, move || {
            copied.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(1_500).await;
                copied.set(false);
            });
        });
    };

    let slot_class = environment.code().to_lowercase();

    view! {
        <span class=format!("env-slot env-slot--{}", environment.button_variant())>
            <span style:display=move || display(shown.get(), "inline-block")>
                <Button
                    class=format!("btn-{}", slot_class)
                    appearance=ButtonAppearance::Secondary
                    disabled=locked
                    on_click=move |_| {
                        vm.dispatch(PlannerEvent::GenerateUrl { row_id, environment })
                    }
                >
                    {environment.code()}
                </Button>
            </span>
            <span class=format!("url-display url-{}", slot_class)>{move || url.get()}</span>
            <Show when=move || !url.get().is_empty()>
                <button class="button button--ghost button--small" title="Copy" on:click=on_copy>
                    {move || if copied.get() { icon("check") } else { icon("copy") }}
                </button>
            </Show>
        </span>
    }
}
