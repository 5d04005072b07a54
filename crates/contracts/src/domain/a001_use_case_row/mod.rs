pub mod aggregate;

pub use aggregate::{EnvironmentSlot, RowVisibility, UseCaseRow, UseCaseRowId};
