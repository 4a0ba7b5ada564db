// src/gui/components/mod.rs
pub mod details_table;
pub mod result_panel;
pub mod search_form;
