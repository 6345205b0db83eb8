mod login;
mod logout;
mod session;

pub use login::login_handler;
pub use logout::logout_handler;
pub use session::session_handler;
