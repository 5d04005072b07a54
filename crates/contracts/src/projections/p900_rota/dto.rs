use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_use_case_row::UseCaseRow;
use crate::enums::Environment;

/// Заголовки колонок ROTA. Две последние колонки зарезервированы и всегда пустые.
pub const ROTA_HEADERS: [&str; 9] = [
    "S.No",
    "Use Case",
    "Task Description",
    "Actor",
    "When",
    "P0 URL",
    "R0 URL",
    "Status",
    "Remarks",
];

/// Строка сводной таблицы ROTA (только чтение)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaRow {
    pub serial_no: usize,
    pub use_case: String,
    pub task_description: String,
    pub actor: String,
    pub scheduled_at: String,
    pub p0_url: String,
    pub r0_url: String,
    pub status: String,
    pub remarks: String,
}

impl RotaRow {
    /// Проекция строки плана. Ссылка T1 в таблицу не попадает.
    pub fn project(serial_no: usize, row: &UseCaseRow) -> Self {
        let task_only = row.kind.is_task_only();
        let when_task_only = |value: &str| {
            if task_only {
                value.to_string()
            } else {
                String::new()
            }
        };
        let unless_task_only = |value: &str| {
            if task_only {
                String::new()
            } else {
                value.to_string()
            }
        };

        Self {
            serial_no,
            use_case: row.kind.code().to_string(),
            task_description: when_task_only(&row.task_description),
            actor: row.actor.clone(),
            scheduled_at: row.scheduled_at.clone(),
            p0_url: unless_task_only(row.url(Environment::P0)),
            r0_url: unless_task_only(row.url(Environment::R0)),
            status: String::new(),
            remarks: String::new(),
        }
    }

    /// Значения ячеек в порядке `ROTA_HEADERS`
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.serial_no.to_string(),
            self.use_case.clone(),
            self.task_description.clone(),
            self.actor.clone(),
            self.scheduled_at.clone(),
            self.p0_url.clone(),
            self.r0_url.clone(),
            self.status.clone(),
            self.remarks.clone(),
        ]
    }
}

/// Снимок таблицы ROTA на момент построения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RotaTable {
    pub rows: Vec<RotaRow>,
    #[serde(rename = "builtAt")]
    pub built_at: Option<DateTime<Utc>>,
}

impl RotaTable {
    /// Построить таблицу по строкам плана в порядке их следования
    pub fn build(rows: &[UseCaseRow]) -> Self {
        Self {
            rows: rows
                .iter()
                .enumerate()
                .map(|(index, row)| RotaRow::project(index + 1, row))
                .collect(),
            built_at: Some(Utc::now()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_use_case_row::UseCaseRowId;
    use crate::enums::UseCaseKind;
    use crate::shared::section_a::{read_shared_fields, SectionAField};
    use crate::shared::url_template::DEFAULT_ENDPOINT;

    fn row_with_urls(id: u64, kind: UseCaseKind) -> UseCaseRow {
        let shared = read_shared_fields(&[
            SectionAField::new("ansible package name", "pkgA"),
            SectionAField::new("virtual env", "prod"),
        ]);
        let mut row = UseCaseRow::new(UseCaseRowId::new(id));
        row.tag = "rel1".to_string();
        row.actor = "alice".to_string();
        row.scheduled_at = "2024-03-15T14:02".to_string();
        row.task_description = "check dashboards".to_string();
        for env in Environment::all() {
            row.generate_url(env, &shared, DEFAULT_ENDPOINT);
        }
        row.kind = kind;
        row
    }

    #[test]
    fn test_serial_numbers_follow_order() {
        let rows = vec![
            row_with_urls(4, UseCaseKind::Deploy),
            row_with_urls(1, UseCaseKind::Reset),
            row_with_urls(9, UseCaseKind::Switch),
        ];
        let table = RotaTable::build(&rows);
        let serials: Vec<usize> = table.rows.iter().map(|r| r.serial_no).collect();
        assert_eq!(serials, vec![1, 2, 3]);
        assert_eq!(table.rows[1].use_case, "reset");
        assert!(table.built_at.is_some());
    }

    #[test]
    fn test_deploy_row_renders_urls() {
        let row = row_with_urls(0, UseCaseKind::Deploy);
        let projected = RotaRow::project(1, &row);
        assert_eq!(projected.p0_url, row.url(Environment::P0));
        assert_eq!(projected.r0_url, row.url(Environment::R0));
        assert!(!projected.p0_url.is_empty());
        assert_eq!(projected.task_description, "");
        assert_eq!(projected.actor, "alice");
        assert_eq!(projected.scheduled_at, "2024-03-15T14:02");
    }

    #[test]
    fn test_never_generated_urls_are_empty() {
        let row = UseCaseRow::new(UseCaseRowId::new(0));
        let projected = RotaRow::project(1, &row);
        assert_eq!(projected.p0_url, "");
        assert_eq!(projected.r0_url, "");
    }

    #[test]
    fn test_task_only_rows_hide_urls() {
        for kind in [UseCaseKind::Verification, UseCaseKind::Signoff] {
            let projected = RotaRow::project(1, &row_with_urls(0, kind));
            assert_eq!(projected.task_description, "check dashboards");
            assert_eq!(projected.p0_url, "");
            assert_eq!(projected.r0_url, "");
        }
    }

    #[test]
    fn test_cells_skip_t1_and_keep_reserved_blank() {
        let row = row_with_urls(0, UseCaseKind::Deploy);
        let cells = RotaRow::project(1, &row).cells();
        assert_eq!(cells.len(), ROTA_HEADERS.len());
        assert!(!cells.iter().any(|c| c.contains("env=T1")));
        assert_eq!(cells[7], "");
        assert_eq!(cells[8], "");
    }
}
