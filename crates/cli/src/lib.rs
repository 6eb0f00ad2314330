//! `homestock-cli`
//!
//! Interactive terminal front end over the inventory core. The session owns the
//! presentation state (current search term, the form being filled in) and re-renders
//! the list after every change.

pub mod command;
pub mod render;
pub mod session;

pub use command::Command;
pub use session::Session;
