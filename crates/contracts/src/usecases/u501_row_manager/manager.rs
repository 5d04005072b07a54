use crate::domain::a001_use_case_row::{UseCaseRow, UseCaseRowId};
use crate::enums::{Environment, UseCaseKind};
use crate::shared::section_a::SharedFields;

/// Список строк плана и счётчик идентификаторов.
///
/// Счётчик только растёт: идентификатор удалённой строки
/// не выдаётся повторно, пока жив экземпляр менеджера.
#[derive(Debug, Clone, Default)]
pub struct RowManager {
    next_id: u64,
    rows: Vec<UseCaseRow>,
}

impl RowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить строку в конец списка
    pub fn add_row(&mut self) -> UseCaseRowId {
        let id = UseCaseRowId::new(self.next_id);
        self.next_id += 1;
        self.rows.push(UseCaseRow::new(id));
        log::debug!("Row {} added", id);
        id
    }

    /// Удалить строку вместе со всем её состоянием
    pub fn remove_row(&mut self, id: UseCaseRowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;
        if removed {
            log::debug!("Row {} removed", id);
        }
        removed
    }

    pub fn rows(&self) -> &[UseCaseRow] {
        &self.rows
    }

    pub fn row(&self, id: UseCaseRowId) -> Option<&UseCaseRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Применить изменение к строке. Неизвестный id — ничего не делает.
    pub fn update_row<F>(&mut self, id: UseCaseRowId, f: F) -> bool
    where
        F: FnOnce(&mut UseCaseRow),
    {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                f(row);
                true
            }
            None => false,
        }
    }

    pub fn set_kind(&mut self, id: UseCaseRowId, kind: UseCaseKind) -> bool {
        self.update_row(id, |row| row.kind = kind)
    }

    pub fn set_tag(&mut self, id: UseCaseRowId, value: String) -> bool {
        self.update_row(id, |row| row.tag = value)
    }

    pub fn set_task_description(&mut self, id: UseCaseRowId, value: String) -> bool {
        self.update_row(id, |row| row.task_description = value)
    }

    pub fn set_scheduled_at(&mut self, id: UseCaseRowId, value: String) -> bool {
        self.update_row(id, |row| row.scheduled_at = value)
    }

    pub fn set_actor(&mut self, id: UseCaseRowId, value: String) -> bool {
        self.update_row(id, |row| row.actor = value)
    }

    /// Сгенерировать ссылку для строки и окружения.
    /// `None`, если строки нет или ячейка уже заблокирована.
    pub fn generate_url(
        &mut self,
        id: UseCaseRowId,
        env: Environment,
        shared: &SharedFields,
        base_url: &str,
    ) -> Option<String> {
        let row = self.rows.iter_mut().find(|row| row.id == id)?;
        row.generate_url(env, shared, base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::url_template::DEFAULT_ENDPOINT;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_sequential_and_unique() {
        let mut manager = RowManager::new();
        let ids: Vec<UseCaseRowId> = (0..5).map(|_| manager.add_row()).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 5);
        assert_eq!(ids[0], UseCaseRowId::new(0));
        assert_eq!(ids[4], UseCaseRowId::new(4));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut manager = RowManager::new();
        let first = manager.add_row();
        let second = manager.add_row();
        assert!(manager.remove_row(second));
        assert!(manager.remove_row(first));
        assert!(manager.rows().is_empty());

        let third = manager.add_row();
        assert_eq!(third, UseCaseRowId::new(2));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut manager = RowManager::new();
        manager.add_row();
        assert!(!manager.remove_row(UseCaseRowId::new(42)));
        assert_eq!(manager.rows().len(), 1);
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let mut manager = RowManager::new();
        let a = manager.add_row();
        let b = manager.add_row();
        let c = manager.add_row();
        manager.remove_row(b);
        let order: Vec<_> = manager.rows().iter().map(|r| r.id).collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn test_setters_on_unknown_row() {
        let mut manager = RowManager::new();
        let missing = UseCaseRowId::new(9);
        assert!(!manager.set_tag(missing, "x".into()));
        assert!(!manager.set_kind(missing, UseCaseKind::Spn));
        let shared = SharedFields::default();
        assert_eq!(
            manager.generate_url(missing, Environment::P0, &shared, DEFAULT_ENDPOINT),
            None
        );
    }

    #[test]
    fn test_setters_update_row() {
        let mut manager = RowManager::new();
        let id = manager.add_row();
        manager.set_tag(id, "rel1".into());
        manager.set_actor(id, "bob".into());
        manager.set_scheduled_at(id, "2024-01-01T10:00".into());
        manager.set_task_description(id, "smoke".into());
        manager.set_kind(id, UseCaseKind::Reset);

        let row = manager.row(id).unwrap();
        assert_eq!(row.tag, "rel1");
        assert_eq!(row.actor, "bob");
        assert_eq!(row.scheduled_at, "2024-01-01T10:00");
        assert_eq!(row.task_description, "smoke");
        assert_eq!(row.kind, UseCaseKind::Reset);
    }
}
