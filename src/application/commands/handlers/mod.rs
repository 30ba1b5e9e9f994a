//! Command Handlers

mod sort_command_handlers;

pub use sort_command_handlers::SortNumbersHandler;
