use serde::{Deserialize, Serialize};

/// Целевые окружения, для которых генерируется ссылка запуска
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    P0,
    R0,
    T1,
}

impl Environment {
    /// Код окружения (подставляется в `env=`)
    pub fn code(&self) -> &'static str {
        match self {
            Environment::P0 => "P0",
            Environment::R0 => "R0",
            Environment::T1 => "T1",
        }
    }

    /// CSS-модификатор кнопки
    pub fn button_variant(&self) -> &'static str {
        match self {
            Environment::P0 => "primary",
            Environment::R0 => "secondary",
            Environment::T1 => "warning",
        }
    }

    pub fn all() -> [Environment; 3] {
        [Environment::P0, Environment::R0, Environment::T1]
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
