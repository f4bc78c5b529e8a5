//! Runtime type-checked routing of erased values to typed handlers.
//!
//! - `TypedDispatcher` - fixed set of handlers keyed by `Shape`
//! - `HandlerEntry` - one handler plus the shape derived from its parameter
//! - `ErasedArg` - a value or borrow with its static type recorded
//! - `Visitable` / `Accept` - double dispatch for closed sets of record types
//! - `TypedBuckets` - heterogeneous storage grouped into per-type vectors

mod arg;
mod buckets;
mod dispatcher;
mod handler;
mod visitable;

pub use arg::ErasedArg;
pub use buckets::TypedBuckets;
pub use capsule_core::{
    Category, DispatchError, DispatchResultExt, DispatcherConfig, Shape, UnmatchedPolicy,
};
pub use dispatcher::{DispatcherBuilder, TypedDispatcher};
pub use handler::HandlerEntry;
pub use visitable::{Accept, Visitable};
