//!
//! Logger of the payment client.
//!
//! Crates log through the macros re-exported here so that the subscriber setup stays in one
//! place. Raw payment field values must never be passed to these macros.
//!

mod setup;
mod types;

pub use tracing::{debug, error, event as log, info, instrument, trace, warn, Level};

pub use self::{
    setup::{setup, TelemetryGuard},
    types::Tag,
};
