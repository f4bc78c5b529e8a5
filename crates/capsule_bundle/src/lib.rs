//! Multi-capability handles.
//!
//! A `CapabilityBundle` owns one implementation per declared capability and
//! hands each back by capability type:
//! - `Slot` - owning cell for one boxed capability implementation
//! - `Cons` / `Nil` - the type-level list of slots, spelled `Capabilities![...]`
//! - `Select` - resolves a capability to its slot at compile time
//! - `capability!` / `bundle!` - declaration and construction macros

mod bundle;
mod list;
mod macros;
mod slot;

pub use bundle::CapabilityBundle;
pub use capsule_core::{Capability, capability_name};
pub use list::{Cons, Here, Nil, Select, SlotList, There};
pub use slot::{Bind, Slot};
