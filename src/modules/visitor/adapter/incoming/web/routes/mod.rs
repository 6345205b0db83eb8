mod list_visitors;
mod track_visit;

pub use list_visitors::list_visitors_handler;
pub use track_visit::track_visit_handler;
