//! Shared types for the radio program editor widget.
//!
//! Everything in this crate is platform independent so it can be tested on
//! the host; `web_app` drives it from the browser.
//!
//! # Layout
//!
//! - `programs` - program records and the `/programs` collection
//! - `cards` - ordered model behind the rendered cards
//! - `countdown` - edit-conflict wait parsing and countdown
//! - `flash` - result frame flash sequence
//! - `messages` - per-language text table
//! - `config` - widget configuration

mod error;
mod programs;
mod cards;
mod countdown;
mod flash;
mod messages;
mod config;

pub use error::*;
pub use programs::*;
pub use cards::*;
pub use countdown::*;
pub use flash::*;
pub use messages::*;
pub use config::*;
