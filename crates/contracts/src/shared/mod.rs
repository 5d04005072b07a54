pub mod config;
pub mod section_a;
pub mod url_template;
