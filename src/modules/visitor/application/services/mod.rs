pub mod visitor_tracker;

pub use visitor_tracker::VisitorTracker;
