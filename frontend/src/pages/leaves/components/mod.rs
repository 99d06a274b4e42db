pub mod detail_modal;
pub mod filter;
pub mod history_table;
pub mod list;
pub mod status_label;
