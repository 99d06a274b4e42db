pub mod dashboard;
pub mod employees;
pub mod leaves;
pub mod reports;
pub mod time_allocation;

pub use dashboard::DashboardPage;
pub use employees::EmployeesPage;
pub use leaves::LeavesPage;
pub use reports::ReportsPage;
pub use time_allocation::TimeAllocationPage;
