use crate::usecases::u501_row_manager::{PlannerPage, PlannerViewModel};
use contracts::shared::config::PlannerConfig;
use contracts::usecases::u501_row_manager::Planner;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Page load: one model for the whole session, rows created per config.
    let planner = Planner::mount(PlannerConfig::load());
    provide_context(PlannerViewModel::new(planner));

    view! {
        <PlannerPage />
    }
}
