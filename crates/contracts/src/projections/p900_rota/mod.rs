pub mod dto;

pub use dto::{RotaRow, RotaTable, ROTA_HEADERS};
