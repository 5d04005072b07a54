use serde::{Deserialize, Serialize};

/// Виды операций, доступные в строке плана
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseKind {
    #[default]
    Deploy,
    Switch,
    Delete,
    Spn,
    Reset,
    Verification,
    Signoff,
}

impl UseCaseKind {
    /// Код операции (значение в селекторе и в URL)
    pub fn code(&self) -> &'static str {
        match self {
            UseCaseKind::Deploy => "deploy",
            UseCaseKind::Switch => "switch",
            UseCaseKind::Delete => "delete",
            UseCaseKind::Spn => "spn",
            UseCaseKind::Reset => "reset",
            UseCaseKind::Verification => "verification",
            UseCaseKind::Signoff => "signoff",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    /// Все виды в порядке отображения в селекторе
    pub fn all() -> Vec<UseCaseKind> {
        vec![
            UseCaseKind::Deploy,
            UseCaseKind::Switch,
            UseCaseKind::Delete,
            UseCaseKind::Spn,
            UseCaseKind::Reset,
            UseCaseKind::Verification,
            UseCaseKind::Signoff,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "deploy" => Some(UseCaseKind::Deploy),
            "switch" => Some(UseCaseKind::Switch),
            "delete" => Some(UseCaseKind::Delete),
            "spn" => Some(UseCaseKind::Spn),
            "reset" => Some(UseCaseKind::Reset),
            "verification" => Some(UseCaseKind::Verification),
            "signoff" => Some(UseCaseKind::Signoff),
            _ => None,
        }
    }

    /// Проверочные виды: вместо тега и окружений заполняется описание задачи
    pub fn is_task_only(&self) -> bool {
        matches!(self, UseCaseKind::Verification | UseCaseKind::Signoff)
    }
}

impl std::fmt::Display for UseCaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
