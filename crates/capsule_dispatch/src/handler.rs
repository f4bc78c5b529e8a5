use crate::arg::{ErasedArg, Payload};
use capsule_core::Shape;
use std::any::Any;
use std::fmt;

type RefFn<R> = Box<dyn Fn(&mut dyn Any) -> Option<R> + Send + Sync>;
type ValueFn<R> = Box<dyn Fn(Box<dyn Any>) -> Option<R> + Send + Sync>;

enum Erased<R> {
    Ref(RefFn<R>),
    Value(ValueFn<R>),
}

/// A handler and the shape it accepts.
///
/// The shape comes from the handler's own parameter type: `by_ref` handlers
/// take `&mut T`, `by_value` handlers take `T`.
pub struct HandlerEntry<R = ()> {
    shape: Shape,
    handler: Erased<R>,
}

impl<R: 'static> HandlerEntry<R> {
    pub fn by_ref<T, F>(handler: F) -> Self
    where
        T: Any,
        F: Fn(&mut T) -> R + Send + Sync + 'static,
    {
        Self {
            shape: Shape::by_ref::<T>(),
            handler: Erased::Ref(Box::new(move |value: &mut dyn Any| {
                value.downcast_mut::<T>().map(&handler)
            })),
        }
    }

    pub fn by_value<T, F>(handler: F) -> Self
    where
        T: Any,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            shape: Shape::by_value::<T>(),
            handler: Erased::Value(Box::new(move |value: Box<dyn Any>| {
                value.downcast::<T>().ok().map(|value| handler(*value))
            })),
        }
    }
}

impl<R> HandlerEntry<R> {
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Runs the handler. `None` when the argument's type or category differs
    /// from the handler's shape; the handler does not run in that case.
    pub(crate) fn invoke(&self, arg: ErasedArg<'_>) -> Option<R> {
        match (&self.handler, arg.into_payload()) {
            (Erased::Ref(f), Payload::Ref(value)) => f(value),
            (Erased::Value(f), Payload::Value(value)) => f(value),
            _ => None,
        }
    }
}

impl<R> fmt::Debug for HandlerEntry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}
