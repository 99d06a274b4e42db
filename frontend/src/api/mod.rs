mod dashboard;
mod employees;
pub mod envelope;
mod leave;
mod reports;
mod time_allocation;
pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
