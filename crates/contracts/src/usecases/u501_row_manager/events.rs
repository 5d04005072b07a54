use serde::{Deserialize, Serialize};

use crate::domain::a001_use_case_row::UseCaseRowId;
use crate::enums::Environment;

/// События формы планировщика.
///
/// UI не меняет модель напрямую: каждое действие пользователя
/// превращается в событие и проходит через `Planner::dispatch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlannerEvent {
    /// Кнопка "Add Use Case"
    AddRow,

    /// Кнопка удаления строки
    RemoveRow { row_id: UseCaseRowId },

    /// Смена вида операции; `kind` — код из селектора
    ChangeKind { row_id: UseCaseRowId, kind: String },

    EditTag { row_id: UseCaseRowId, value: String },

    EditTaskDescription { row_id: UseCaseRowId, value: String },

    EditScheduledAt { row_id: UseCaseRowId, value: String },

    EditActor { row_id: UseCaseRowId, value: String },

    /// Кнопка окружения P0/R0/T1
    GenerateUrl {
        row_id: UseCaseRowId,
        environment: Environment,
    },

    /// Ввод в поле раздела A (по позиции поля)
    EditSectionA { index: usize, value: String },

    /// Кнопка "Create ROTA"
    BuildSummary,
}
