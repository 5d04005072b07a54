pub mod row_editor;

pub use row_editor::UseCaseRowEditor;
