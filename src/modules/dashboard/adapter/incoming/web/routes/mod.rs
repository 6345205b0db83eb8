mod get_dashboard;

pub use get_dashboard::get_dashboard_handler;
