pub mod bulk;
pub mod components;
pub mod decisions;
pub mod layout;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::LeavesPage;
