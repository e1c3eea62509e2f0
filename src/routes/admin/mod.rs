mod dashboard;

pub use dashboard::admin_dashboard;
