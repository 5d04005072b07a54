pub mod u501_row_manager;
