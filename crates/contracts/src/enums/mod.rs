pub mod environment;
pub mod use_case_kind;

pub use environment::Environment;
pub use use_case_kind::UseCaseKind;
