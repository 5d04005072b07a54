pub mod a001_use_case_row;
