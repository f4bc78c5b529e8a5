use crate::{Select, SlotList};
use smallvec::SmallVec;
use std::fmt;

/// A handle owning one implementation per declared capability.
///
/// The capability set is the type parameter `L`, a slot list usually written
/// with `Capabilities![dyn A, dyn B]`. It cannot change after construction.
///
/// ```
/// use capsule_bundle::{Capabilities, CapabilityBundle, Slot, bundle, capability};
///
/// trait Act1 {
///     fn act1(&self) -> &'static str;
/// }
///
/// trait Act3 {
///     fn act3(&self) -> &'static str;
/// }
///
/// capability!(Act1);
/// capability!(Act3);
///
/// struct Handler1;
///
/// impl Act1 for Handler1 {
///     fn act1(&self) -> &'static str {
///         "Act1!"
///     }
/// }
///
/// struct Handler3;
///
/// impl Act3 for Handler3 {
///     fn act3(&self) -> &'static str {
///         "Act3!"
///     }
/// }
///
/// let caps: CapabilityBundle<Capabilities![dyn Act1, dyn Act3]> =
///     bundle![Handler1, Slot::<dyn Act3>::from_factory(|| Handler3)];
/// assert_eq!(caps.get::<dyn Act1, _>().act1(), "Act1!");
/// assert_eq!(caps.get::<dyn Act3, _>().act3(), "Act3!");
/// ```
pub struct CapabilityBundle<L> {
    slots: L,
}

impl<L: SlotList> CapabilityBundle<L> {
    pub fn new(slots: L) -> Self {
        tracing::trace!(capabilities = L::LEN, "capability bundle constructed");
        Self { slots }
    }

    /// Returns the implementation bound to capability `C`.
    ///
    /// The index `I` is inferred; pass `_`. Capabilities outside the bundle's
    /// declared set have no `Select` impl and are rejected at compile time:
    ///
    /// ```compile_fail
    /// use capsule_bundle::{Capabilities, CapabilityBundle, bundle, capability};
    ///
    /// trait Act1 {
    ///     fn act1(&self);
    /// }
    ///
    /// trait Act2 {
    ///     fn act2(&self);
    /// }
    ///
    /// capability!(Act1);
    /// capability!(Act2);
    ///
    /// struct Handler1;
    ///
    /// impl Act1 for Handler1 {
    ///     fn act1(&self) {}
    /// }
    ///
    /// let caps: CapabilityBundle<Capabilities![dyn Act1]> = bundle![Handler1];
    /// caps.get::<dyn Act2, _>().act2();
    /// ```
    pub fn get<C: ?Sized, I>(&self) -> &C
    where
        L: Select<C, I>,
    {
        self.slots.select()
    }

    pub fn get_mut<C: ?Sized, I>(&mut self) -> &mut C
    where
        L: Select<C, I>,
    {
        self.slots.select_mut()
    }

    /// Declared capability names, in declaration order.
    pub fn capability_names(&self) -> SmallVec<[&'static str; 4]> {
        let mut names = SmallVec::new();
        L::collect_names(&mut names);
        names
    }

    pub fn len(&self) -> usize {
        L::LEN
    }

    pub fn is_empty(&self) -> bool {
        L::LEN == 0
    }

    pub fn into_slots(self) -> L {
        self.slots
    }
}

impl<L: SlotList> fmt::Debug for CapabilityBundle<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityBundle")
            .field("capabilities", &self.capability_names())
            .finish()
    }
}
