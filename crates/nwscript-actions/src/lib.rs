#![allow(
    clippy::cast_possible_truncation, // stack sizes are bounded by 13 parameters of at most 12 bytes
    clippy::cast_possible_wrap, // same bound: offsets always fit in i32
    clippy::missing_errors_doc // every fallible call returns the one crate Error
)]

//! Engine action definitions for NWScript.
//!
//! Compiled scripts call into the host engine by action ordinal. This crate
//! carries the ordinal tables for the original Neverwinter Nights engine and
//! for Neverwinter Nights 2, together with the stack layout each call needs.
//!
//! ```
//! use nwscript_actions::{ActionType, Registry};
//!
//! let registry = Registry::nwn2();
//! let action = registry.at(141u32)?;
//! assert_eq!(action.parameter_types(), &[ActionType::Vector, ActionType::Int]);
//! assert_eq!(action.parameter_cumulative_sizes(), &[12, 16]);
//! # Ok::<(), nwscript_actions::Error>(())
//! ```
//!
//! Names and prototypes are behind the `names` and `prototypes` features
//! (both on by default). With either disabled the accessors return `""` and
//! name resolution finds nothing.

pub mod definition;
pub mod error;
pub mod registry;
pub mod types;

pub use definition::{ActionDefinition, MAX_PARAMETERS, PLACEHOLDER_NAME};
pub use error::{Error, Result};
pub use registry::{
    Divergence, MAX_ACTION_ID_NWN1, MAX_ACTION_ID_NWN2, Registry, Revision, compare,
};
pub use types::{ActionType, CELL_SIZE};
