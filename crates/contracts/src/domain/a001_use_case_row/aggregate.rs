use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateId;
use crate::enums::{Environment, UseCaseKind};
use crate::shared::section_a::{SharedFields, ANSIBLE_PACKAGE_LABEL, VIRTUAL_ENV_LABEL};
use crate::shared::url_template::ExecutionUrl;

// ============================================================================
// ID Type
// ============================================================================

const ID_PREFIX: &str = "usecase-";

/// Идентификатор строки плана, отображается как `usecase-<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UseCaseRowId(pub u64);

impl UseCaseRowId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl AggregateId for UseCaseRowId {
    fn as_string(&self) -> String {
        format!("{}{}", ID_PREFIX, self.0)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let raw = s
            .strip_prefix(ID_PREFIX)
            .ok_or_else(|| format!("Invalid row id: {}", s))?;
        raw.parse::<u64>()
            .map(UseCaseRowId::new)
            .map_err(|e| format!("Invalid row id {}: {}", s, e))
    }
}

impl std::fmt::Display for UseCaseRowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_string())
    }
}

// ============================================================================
// Slots & visibility
// ============================================================================

/// Ячейка ссылки для одного окружения.
/// После генерации блокируется до перезагрузки страницы.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSlot {
    pub url: String,
    pub locked: bool,
}

/// Какие элементы строки видны при текущем виде операции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowVisibility {
    pub tag: bool,
    pub environments: bool,
    pub task_description: bool,
}

impl RowVisibility {
    pub fn for_kind(kind: UseCaseKind) -> Self {
        let task_only = kind.is_task_only();
        Self {
            tag: !task_only,
            environments: !task_only,
            task_description: task_only,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Строка плана работ (одна операция)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseRow {
    pub id: UseCaseRowId,
    pub kind: UseCaseKind,
    pub tag: String,
    #[serde(rename = "taskDescription")]
    pub task_description: String,
    /// Значение `datetime-local` как есть, без разбора
    #[serde(rename = "scheduledAt")]
    pub scheduled_at: String,
    pub actor: String,
    p0: EnvironmentSlot,
    r0: EnvironmentSlot,
    t1: EnvironmentSlot,
}

impl UseCaseRow {
    pub fn new(id: UseCaseRowId) -> Self {
        Self {
            id,
            kind: UseCaseKind::default(),
            tag: String::new(),
            task_description: String::new(),
            scheduled_at: String::new(),
            actor: String::new(),
            p0: EnvironmentSlot::default(),
            r0: EnvironmentSlot::default(),
            t1: EnvironmentSlot::default(),
        }
    }

    pub fn visibility(&self) -> RowVisibility {
        RowVisibility::for_kind(self.kind)
    }

    pub fn slot(&self, env: Environment) -> &EnvironmentSlot {
        match env {
            Environment::P0 => &self.p0,
            Environment::R0 => &self.r0,
            Environment::T1 => &self.t1,
        }
    }

    fn slot_mut(&mut self, env: Environment) -> &mut EnvironmentSlot {
        match env {
            Environment::P0 => &mut self.p0,
            Environment::R0 => &mut self.r0,
            Environment::T1 => &mut self.t1,
        }
    }

    /// Текст сгенерированной ссылки (пустая строка, если не генерировалась)
    pub fn url(&self, env: Environment) -> &str {
        &self.slot(env).url
    }

    pub fn is_locked(&self, env: Environment) -> bool {
        self.slot(env).locked
    }

    /// Собрать ссылку из текущих значений строки и раздела A.
    /// Чистая функция: ничего не меняет в строке.
    pub fn compose_url(&self, env: Environment, shared: &SharedFields, base_url: &str) -> String {
        ExecutionUrl {
            environment: env,
            tag: &self.tag,
            use_case: self.kind.code(),
            ansible_package: shared.get(ANSIBLE_PACKAGE_LABEL),
            virtual_env: shared.get(VIRTUAL_ENV_LABEL),
        }
        .render(base_url)
    }

    /// Сгенерировать ссылку для окружения и заблокировать ячейку.
    /// Повторный вызов для заблокированной ячейки ничего не делает.
    pub fn generate_url(
        &mut self,
        env: Environment,
        shared: &SharedFields,
        base_url: &str,
    ) -> Option<String> {
        if self.is_locked(env) {
            return None;
        }
        let url = self.compose_url(env, shared, base_url);
        let slot = self.slot_mut(env);
        slot.url = url.clone();
        slot.locked = true;
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::section_a::{read_shared_fields, SectionAField};
    use crate::shared::url_template::DEFAULT_ENDPOINT;

    fn shared() -> SharedFields {
        read_shared_fields(&[
            SectionAField::new("ansible package name", "pkgA"),
            SectionAField::new("virtual env", "prod"),
        ])
    }

    fn deploy_row() -> UseCaseRow {
        let mut row = UseCaseRow::new(UseCaseRowId::new(0));
        row.tag = "rel1".to_string();
        row
    }

    #[test]
    fn test_row_id_format() {
        let id = UseCaseRowId::new(7);
        assert_eq!(id.as_string(), "usecase-7");
        assert_eq!(UseCaseRowId::from_string("usecase-7"), Ok(id));
        assert!(UseCaseRowId::from_string("row-7").is_err());
        assert!(UseCaseRowId::from_string("usecase-x").is_err());
    }

    #[test]
    fn test_generate_p0_url() {
        let mut row = deploy_row();
        let url = row.generate_url(Environment::P0, &shared(), DEFAULT_ENDPOINT);
        assert_eq!(
            url.as_deref(),
            Some("https://yourtool.local/execute?env=P0&tag=rel1&use_case=deploy&ansible_package=pkgA&virtual_env=prod")
        );
        assert_eq!(row.url(Environment::P0), url.unwrap_or_default());
        assert!(row.is_locked(Environment::P0));
        assert!(!row.is_locked(Environment::R0));
        assert_eq!(row.url(Environment::R0), "");
    }

    #[test]
    fn test_compose_is_idempotent() {
        let row = deploy_row();
        let first = row.compose_url(Environment::R0, &shared(), DEFAULT_ENDPOINT);
        let second = row.compose_url(Environment::R0, &shared(), DEFAULT_ENDPOINT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_is_one_shot() {
        let mut row = deploy_row();
        let first = row.generate_url(Environment::T1, &shared(), DEFAULT_ENDPOINT);
        assert!(first.is_some());

        row.tag = "rel2".to_string();
        assert_eq!(row.generate_url(Environment::T1, &shared(), DEFAULT_ENDPOINT), None);
        assert_eq!(row.url(Environment::T1), first.unwrap_or_default());
    }

    #[test]
    fn test_missing_values_become_empty() {
        let row = UseCaseRow::new(UseCaseRowId::new(1));
        let url = row.compose_url(Environment::P0, &SharedFields::default(), DEFAULT_ENDPOINT);
        assert_eq!(
            url,
            "https://yourtool.local/execute?env=P0&tag=&use_case=deploy&ansible_package=&virtual_env="
        );
    }

    #[test]
    fn test_task_only_kind_still_composes() {
        let mut row = deploy_row();
        row.kind = UseCaseKind::Verification;
        let url = row.compose_url(Environment::P0, &shared(), DEFAULT_ENDPOINT);
        assert!(url.contains("use_case=verification"));
        assert!(url.contains("tag=rel1"));
    }

    #[test]
    fn test_visibility_toggle_keeps_tag() {
        let mut row = deploy_row();
        assert_eq!(
            row.visibility(),
            RowVisibility {
                tag: true,
                environments: true,
                task_description: false,
            }
        );

        row.kind = UseCaseKind::Signoff;
        assert_eq!(
            row.visibility(),
            RowVisibility {
                tag: false,
                environments: false,
                task_description: true,
            }
        );

        row.kind = UseCaseKind::Deploy;
        assert!(row.visibility().tag);
        assert!(row.visibility().environments);
        assert!(!row.visibility().task_description);
        assert_eq!(row.tag, "rel1");
    }

    #[test]
    fn test_values_are_not_encoded() {
        let mut row = deploy_row();
        row.tag = "a b&c".to_string();
        let url = row.compose_url(Environment::P0, &shared(), DEFAULT_ENDPOINT);
        assert!(url.contains("tag=a b&c&use_case"));
    }
}
