mod manage_messages;
mod submit_message;

pub use manage_messages::{delete_message_handler, list_messages_handler, mark_message_handler};
pub use submit_message::submit_message_handler;
