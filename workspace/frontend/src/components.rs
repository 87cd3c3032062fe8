pub mod assistant;
pub mod common;
pub mod dashboard;
pub mod layout;
pub mod transactions;
