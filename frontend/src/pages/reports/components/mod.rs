pub mod form;
pub mod tables;
