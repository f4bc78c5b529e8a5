//! Type-level slot lists.
//!
//! `Cons<C1, Cons<C2, Nil>>` holds one slot per capability. `Select<C, I>`
//! is implemented only when `C` occurs in the list, with `I` the position
//! (`Here`, `There<Here>`, ...) inferred by the compiler, so looking up an
//! undeclared capability is a type error.

use crate::Slot;
use capsule_core::Capability;
use smallvec::SmallVec;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, Default)]
pub struct Nil;

pub struct Cons<C: ?Sized, Rest> {
    head: Slot<C>,
    tail: Rest,
}

impl<C: ?Sized, Rest> Cons<C, Rest> {
    pub fn new(head: Slot<C>, tail: Rest) -> Self {
        Self { head, tail }
    }

    pub fn head(&self) -> &Slot<C> {
        &self.head
    }

    pub fn tail(&self) -> &Rest {
        &self.tail
    }

    pub fn into_parts(self) -> (Slot<C>, Rest) {
        (self.head, self.tail)
    }
}

/// Index marker: the capability is the head of the list.
pub enum Here {}

/// Index marker: the capability is found at `I` within the tail.
pub struct There<I>(PhantomData<I>);

pub trait Select<C: ?Sized, I> {
    fn select(&self) -> &C;
    fn select_mut(&mut self) -> &mut C;
}

impl<C: ?Sized, Rest> Select<C, Here> for Cons<C, Rest> {
    fn select(&self) -> &C {
        self.head.get()
    }

    fn select_mut(&mut self) -> &mut C {
        self.head.get_mut()
    }
}

impl<C: ?Sized, H: ?Sized, Rest, I> Select<C, There<I>> for Cons<H, Rest>
where
    Rest: Select<C, I>,
{
    fn select(&self) -> &C {
        self.tail.select()
    }

    fn select_mut(&mut self) -> &mut C {
        self.tail.select_mut()
    }
}

/// Walks the list to report the declared capabilities.
pub trait SlotList {
    const LEN: usize;

    fn collect_names(names: &mut SmallVec<[&'static str; 4]>);
}

impl SlotList for Nil {
    const LEN: usize = 0;

    fn collect_names(_names: &mut SmallVec<[&'static str; 4]>) {}
}

impl<C: Capability + ?Sized, Rest: SlotList> SlotList for Cons<C, Rest> {
    const LEN: usize = 1 + Rest::LEN;

    fn collect_names(names: &mut SmallVec<[&'static str; 4]>) {
        names.push(C::NAME);
        Rest::collect_names(names);
    }
}
