pub mod export;
pub mod ui;
