#[macro_use]
mod color;

pub mod buffer;
pub mod canvas;
pub mod config;
pub mod coord;
pub mod editor;
pub mod error;
pub mod hl;
pub mod key;
pub mod logging;
pub mod message;
pub mod minibuffer;
pub mod raw_mode;
pub mod row;
pub mod search;
pub mod syntax;
pub mod terminal;

pub use error::{Error, Result};
