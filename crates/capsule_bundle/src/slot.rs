use capsule_core::Capability;
use std::fmt;

/// Owns the implementation bound to capability `C`.
pub struct Slot<C: ?Sized> {
    imp: Box<C>,
}

impl<C: ?Sized> Slot<C> {
    /// Binds a concrete implementation, a `Box<C>` or another slot. Types
    /// that do not implement the capability have no `Bind` impl and fail to
    /// compile here.
    pub fn new<T>(imp: T) -> Self
    where
        C: Bind<T>,
    {
        Self { imp: C::bind(imp) }
    }

    pub fn from_box(imp: Box<C>) -> Self {
        Self { imp }
    }

    /// Binds whatever `factory` produces. The factory runs once, immediately.
    pub fn from_factory<T, F>(factory: F) -> Self
    where
        C: Bind<T>,
        F: FnOnce() -> T,
    {
        Self::new(factory())
    }

    pub fn get(&self) -> &C {
        &self.imp
    }

    pub fn get_mut(&mut self) -> &mut C {
        &mut self.imp
    }

    pub fn into_inner(self) -> Box<C> {
        self.imp
    }
}

impl<C: Capability + ?Sized> fmt::Debug for Slot<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&C::NAME).finish()
    }
}

/// Boxes a `T` as capability `Self`.
///
/// Implemented on the capability type itself so that `capability!` can
/// provide it for every implementor from the crate declaring the trait.
/// Boxed trait objects and slots bind as themselves.
pub trait Bind<T> {
    fn bind(imp: T) -> Box<Self>;
}

impl<C: ?Sized> Bind<Box<C>> for C {
    fn bind(imp: Box<C>) -> Box<C> {
        imp
    }
}

impl<C: ?Sized> Bind<Slot<C>> for C {
    fn bind(slot: Slot<C>) -> Box<C> {
        slot.into_inner()
    }
}
