pub mod approvals;
pub mod balance;
pub mod employees;
pub mod leave;

pub use approvals::ApprovalsPage;
pub use balance::BalancePage;
pub use employees::AddEmployeePage;
pub use leave::ApplyLeavePage;
