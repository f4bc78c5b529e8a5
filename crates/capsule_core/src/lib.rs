//! Shared tags for the capsule crates.
//!
//! - `Capability` - compile-time tag naming a capability trait object
//! - `Shape` / `Category` - the (exact type, value category) a dispatch handler accepts
//! - `DispatchError` - construction and dispatch failures
//! - `DispatcherConfig` / `UnmatchedPolicy` - caller-side dispatch configuration

mod config;
mod error;
mod shape;
mod tag;

pub use config::{DispatchResultExt, DispatcherConfig, UnmatchedPolicy};
pub use error::DispatchError;
pub use shape::{Category, Shape};
pub use tag::{Capability, capability_name};
