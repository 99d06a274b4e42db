pub mod cards;
pub mod charts;
pub mod common;
pub mod data_table;
pub mod empty_state;
pub mod error;
pub mod forms;
pub mod layout;
pub mod pagination;
pub mod reason_dialog;
pub mod toast;
