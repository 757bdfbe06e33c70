//! Interactive terminal front end

pub mod command;
pub mod session;

pub use command::Command;
pub use session::Session;
