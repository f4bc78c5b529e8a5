//! Double dispatch.
//!
//! A visitable value knows its own concrete type; the dispatcher knows the
//! handler table. `accept` joins the two: the value erases itself with its
//! static type recorded and the dispatcher picks the handler for that shape.
//! Enums stand in for a closed set of record types by erasing the record held
//! in the active variant.

use crate::{ErasedArg, TypedDispatcher};
use capsule_core::DispatchError;

pub trait Visitable {
    /// Borrows `self` as a by-reference argument of its concrete record type.
    fn as_arg(&mut self) -> ErasedArg<'_>;

    /// Moves `self` into a by-value argument of its concrete record type.
    fn into_arg(self: Box<Self>) -> ErasedArg<'static>;
}

/// `accept` for every visitable, sized or not.
pub trait Accept {
    fn accept<R: 'static>(&mut self, dispatcher: &TypedDispatcher<R>) -> Result<R, DispatchError>;

    fn accept_owned<R: 'static>(
        self: Box<Self>,
        dispatcher: &TypedDispatcher<R>,
    ) -> Result<R, DispatchError>;
}

impl<V: Visitable + ?Sized> Accept for V {
    fn accept<R: 'static>(&mut self, dispatcher: &TypedDispatcher<R>) -> Result<R, DispatchError> {
        dispatcher.dispatch_erased(self.as_arg())
    }

    fn accept_owned<R: 'static>(
        self: Box<Self>,
        dispatcher: &TypedDispatcher<R>,
    ) -> Result<R, DispatchError> {
        dispatcher.dispatch_erased(self.into_arg())
    }
}

/// Implements `Visitable` for record types that dispatch as themselves.
#[macro_export]
macro_rules! impl_visitable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Visitable for $ty {
                fn as_arg(&mut self) -> $crate::ErasedArg<'_> {
                    $crate::ErasedArg::by_ref(self)
                }

                fn into_arg(self: Box<Self>) -> $crate::ErasedArg<'static> {
                    $crate::ErasedArg::by_value(*self)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use crate::{Accept, TypedDispatcher, Visitable};

    struct A;
    struct B;

    crate::impl_visitable!(A, B);

    #[test]
    fn boxed_visitables_reach_their_own_handler() {
        let dispatcher = TypedDispatcher::builder()
            .by_ref(|_: &mut A| "A")
            .by_ref(|_: &mut B| "B")
            .build()
            .unwrap();
        let mut items: Vec<Box<dyn Visitable>> = vec![Box::new(B), Box::new(A)];
        let seen: Vec<&str> = items
            .iter_mut()
            .map(|item| item.accept(&dispatcher).unwrap())
            .collect();
        assert_eq!(seen, ["B", "A"]);
    }
}
