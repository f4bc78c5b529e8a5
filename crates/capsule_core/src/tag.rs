//! Capability tags.

/// Marks a trait object type as a capability that can occupy a bundle slot.
///
/// Implemented for `dyn Trait` (optionally with auto-trait bounds), never for
/// concrete types. `capsule_bundle::capability!` writes the impl.
pub trait Capability: 'static {
    /// Name used in diagnostics and `Debug` output.
    const NAME: &'static str;
}

pub fn capability_name<C: Capability + ?Sized>() -> &'static str {
    C::NAME
}
