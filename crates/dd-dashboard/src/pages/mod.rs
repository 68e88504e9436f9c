//! Dashboard pages

mod dashboard;

pub use dashboard::Dashboard;
