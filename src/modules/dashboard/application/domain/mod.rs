pub mod stats;

pub use stats::{years_of_experience, DashboardStats};
