//! Раздел A: общие поля формы, применяемые ко всем строкам плана.
//!
//! Метка (`data-label`) хранится на самом поле ввода.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const ANSIBLE_PACKAGE_LABEL: &str = "ansible package name";
pub const VIRTUAL_ENV_LABEL: &str = "virtual env";

/// Поле раздела A: метка и текущее значение
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAField {
    pub label: String,
    pub value: String,
}

impl SectionAField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Пустое поле с заданной меткой
    pub fn empty(label: impl Into<String>) -> Self {
        Self::new(label, String::new())
    }
}

/// Снимок значений раздела A: метка -> значение
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFields(HashMap<String, String>);

impl SharedFields {
    /// Значение по метке; отсутствующая метка даёт пустую строку
    pub fn get(&self, label: &str) -> &str {
        self.0.get(label).map(String::as_str).unwrap_or("")
    }
}

/// Прочитать поля раздела A. При повторе метки побеждает последнее поле.
pub fn read_shared_fields(fields: &[SectionAField]) -> SharedFields {
    let mut values = HashMap::new();
    for field in fields {
        values.insert(field.label.clone(), field.value.clone());
    }
    SharedFields(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_shared_fields() {
        let shared = read_shared_fields(&[
            SectionAField::new(ANSIBLE_PACKAGE_LABEL, "pkgA"),
            SectionAField::new(VIRTUAL_ENV_LABEL, "prod"),
        ]);
        assert_eq!(shared.get(ANSIBLE_PACKAGE_LABEL), "pkgA");
        assert_eq!(shared.get(VIRTUAL_ENV_LABEL), "prod");
    }

    #[test]
    fn test_duplicate_label_last_wins() {
        let shared = read_shared_fields(&[
            SectionAField::new(VIRTUAL_ENV_LABEL, "dev"),
            SectionAField::new(VIRTUAL_ENV_LABEL, "prod"),
        ]);
        assert_eq!(shared.get(VIRTUAL_ENV_LABEL), "prod");
    }

    #[test]
    fn test_missing_label_is_empty() {
        let shared = read_shared_fields(&[SectionAField::empty(VIRTUAL_ENV_LABEL)]);
        assert_eq!(shared.get(ANSIBLE_PACKAGE_LABEL), "");
        assert_eq!(shared.get(VIRTUAL_ENV_LABEL), "");
    }
}
