pub mod activity;
pub mod attendance_chart;
pub mod leave_chart;
pub mod summary;

pub use activity::ActivityLookup;
pub use attendance_chart::AttendanceChartSection;
pub use leave_chart::LeaveChartSection;
pub use summary::SummarySection;
