pub mod auth;
pub mod client_state;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod remote_store;
pub mod seed;
pub mod visitor;
