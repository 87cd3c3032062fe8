//! Browser-independent core of the FinWiz dashboard: the spending breakdown,
//! display formatting, and the view-model that drives the single page.

pub mod api;
pub mod categories;
pub mod dashboard;
pub mod error;
pub mod format;

pub use api::DashboardApi;
pub use categories::{category_breakdown, CategorySlice, PALETTE};
pub use dashboard::{execute, run_command, Action, Command, Dashboard, FetchState};
pub use error::{ApiError, Result};
