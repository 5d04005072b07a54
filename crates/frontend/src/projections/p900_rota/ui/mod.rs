pub mod table;

pub use table::RotaTableView;
