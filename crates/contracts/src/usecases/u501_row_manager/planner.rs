use crate::domain::a001_use_case_row::{UseCaseRow, UseCaseRowId};
use crate::enums::{Environment, UseCaseKind};
use crate::projections::p900_rota::RotaTable;
use crate::shared::config::PlannerConfig;
use crate::shared::section_a::{read_shared_fields, SectionAField, SharedFields};

use super::events::PlannerEvent;
use super::manager::RowManager;

/// Состояние страницы планировщика: строки, раздел A и снимок ROTA.
///
/// Снимок ROTA строится только по `BuildSummary` и не обновляется
/// при последующих правках или удалении строк.
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
    rows: RowManager,
    section_a: Vec<SectionAField>,
    rota: RotaTable,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        let section_a = config.section_a_fields();
        Self {
            config,
            rows: RowManager::new(),
            section_a,
            rota: RotaTable::default(),
        }
    }

    /// Состояние сразу после загрузки страницы: `rows.initial_rows` пустых строк
    pub fn mount(config: PlannerConfig) -> Self {
        let mut planner = Self::new(config);
        for _ in 0..planner.config.rows.initial_rows {
            planner.on_add_row();
        }
        planner
    }

    pub fn rows(&self) -> &[UseCaseRow] {
        self.rows.rows()
    }

    pub fn row(&self, id: UseCaseRowId) -> Option<&UseCaseRow> {
        self.rows.row(id)
    }

    pub fn row_ids(&self) -> Vec<UseCaseRowId> {
        self.rows.rows().iter().map(|row| row.id).collect()
    }

    pub fn section_a(&self) -> &[SectionAField] {
        &self.section_a
    }

    /// Текущие значения раздела A
    pub fn shared_fields(&self) -> SharedFields {
        read_shared_fields(&self.section_a)
    }

    pub fn rota(&self) -> &RotaTable {
        &self.rota
    }

    pub fn dispatch(&mut self, event: PlannerEvent) {
        if let Ok(json) = serde_json::to_string(&event) {
            log::debug!("dispatch {}", json);
        }

        match event {
            PlannerEvent::AddRow => {
                self.on_add_row();
            }
            PlannerEvent::RemoveRow { row_id } => {
                self.on_remove_row(row_id);
            }
            PlannerEvent::ChangeKind { row_id, kind } => {
                self.on_change_kind(row_id, &kind);
            }
            PlannerEvent::EditTag { row_id, value } => {
                self.rows.set_tag(row_id, value);
            }
            PlannerEvent::EditTaskDescription { row_id, value } => {
                self.rows.set_task_description(row_id, value);
            }
            PlannerEvent::EditScheduledAt { row_id, value } => {
                self.rows.set_scheduled_at(row_id, value);
            }
            PlannerEvent::EditActor { row_id, value } => {
                self.rows.set_actor(row_id, value);
            }
            PlannerEvent::GenerateUrl { row_id, environment } => {
                self.on_generate_url(row_id, environment);
            }
            PlannerEvent::EditSectionA { index, value } => {
                self.on_edit_section_a(index, value);
            }
            PlannerEvent::BuildSummary => self.on_build_summary(),
        }
    }

    pub fn on_add_row(&mut self) -> UseCaseRowId {
        self.rows.add_row()
    }

    pub fn on_remove_row(&mut self, row_id: UseCaseRowId) -> bool {
        self.rows.remove_row(row_id)
    }

    /// Неизвестный код вида игнорируется, строка сохраняет текущий вид
    pub fn on_change_kind(&mut self, row_id: UseCaseRowId, code: &str) -> bool {
        match UseCaseKind::from_code(code) {
            Some(kind) => self.rows.set_kind(row_id, kind),
            None => {
                log::warn!("Unknown use case kind '{}' for row {}", code, row_id);
                false
            }
        }
    }

    pub fn on_generate_url(&mut self, row_id: UseCaseRowId, env: Environment) -> Option<String> {
        let shared = self.shared_fields();
        let url = self
            .rows
            .generate_url(row_id, env, &shared, &self.config.endpoint.base_url);
        match &url {
            Some(url) => log::debug!("Row {} {} -> {}", row_id, env, url),
            None => log::debug!("Row {} {}: already generated or missing", row_id, env),
        }
        url
    }

    pub fn on_edit_section_a(&mut self, index: usize, value: String) -> bool {
        match self.section_a.get_mut(index) {
            Some(field) => {
                field.value = value;
                true
            }
            None => {
                log::warn!("Section A field #{} does not exist", index);
                false
            }
        }
    }

    pub fn on_build_summary(&mut self) {
        self.rota = RotaTable::build(self.rows.rows());
        log::info!("ROTA built: {} rows", self.rota.len());
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
