#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Environment of the payment client: logger, basic config, its environment awareness.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod config;
pub mod env;
pub mod logger;

#[doc(inline)]
pub use logger::*;
pub use tracing;

#[doc(inline)]
pub use self::{
    config::{Config, Log, LogFormat, LogLevel},
    env::*,
};
