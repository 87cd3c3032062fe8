pub mod chart;
pub mod view;

pub use view::DashboardPage;
