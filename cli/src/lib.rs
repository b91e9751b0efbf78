//! Terminal front end for the movie list client.
//!
//! `main.rs` wires these together: ureq performs the HTTP, `TerminalView`
//! prints every rendered list, and `Repl` turns typed commands into client
//! operations.

pub mod args;
pub mod repl;
pub mod transport;
pub mod view;

pub use args::CommandLineArgs;
pub use repl::{Command, Prompter, Repl};
pub use transport::UreqTransport;
pub use view::TerminalView;
