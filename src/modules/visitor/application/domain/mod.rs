pub mod session_id;
pub mod visit;

pub use session_id::SessionIdGenerator;
pub use visit::{
    LastTracked, PageVisit, TrackOutcome, TrackerPolicy, Viewport, VisitValidationError, Visitor,
    VisitorColumn,
};
