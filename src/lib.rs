//! Open your favourite URLs and paths from the command line by a short name.
//!
//! Bookmarks live in `~/.ql/list.json` as a flat JSON object of
//! name to location. `ql NAME` hands the location to the operating
//! system's default handler.

pub mod cli;
pub mod commands;
pub mod error;
pub mod launcher;
pub mod store;

pub use commands::{execute, run, Outcome};
pub use error::QuickLinkError;
pub use launcher::{open_command, Opener, Platform, SystemOpener};
pub use store::{Bookmarks, Store};
