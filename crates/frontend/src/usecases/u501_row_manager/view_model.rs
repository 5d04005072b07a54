use crate::shared::export::export_to_excel;
use chrono::{DateTime, Local};
use contracts::domain::a001_use_case_row::{UseCaseRow, UseCaseRowId};
use contracts::usecases::u501_row_manager::{Planner, PlannerEvent};
use leptos::prelude::*;

/// ViewModel страницы планировщика.
///
/// Вся модель живёт в одном сигнале; компоненты читают её через
/// `with`, а изменения отправляют событиями через `dispatch`.
#[derive(Clone, Copy)]
pub struct PlannerViewModel {
    pub state: RwSignal<Planner>,
    pub message: RwSignal<Option<String>>,
}

impl PlannerViewModel {
    pub fn new(planner: Planner) -> Self {
        Self {
            state: RwSignal::new(planner),
            message: RwSignal::new(None),
        }
    }

    pub fn dispatch(&self, event: PlannerEvent) {
        self.state.update(|planner| planner.dispatch(event));
    }

    pub fn row_ids(&self) -> Vec<UseCaseRowId> {
        self.state.with(|planner| planner.row_ids())
    }

    /// Прочитать значение строки; удалённая строка даёт значение по умолчанию
    pub fn row_field<T, F>(&self, row_id: UseCaseRowId, f: F) -> T
    where
        T: Default,
        F: FnOnce(&UseCaseRow) -> T,
    {
        self.state
            .with(|planner| planner.row(row_id).map(f).unwrap_or_default())
    }

    pub fn has_rota(&self) -> bool {
        self.state.with(|planner| !planner.rota().is_empty())
    }

    /// Скачать текущий снимок ROTA в CSV
    pub fn export_rota_command(&self) {
        let rows = self
            .state
            .with_untracked(|planner| planner.rota().rows.clone());
        match export_to_excel(&rows, &rota_filename(Local::now())) {
            Ok(()) => self.message.set(None),
            Err(e) => {
                log::error!("ROTA export failed: {}", e);
                self.message.set(Some(e));
            }
        }
    }
}

pub fn rota_filename(now: DateTime<Local>) -> String {
    format!("rota_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
