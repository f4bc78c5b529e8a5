use capsule_core::Shape;
use std::any::Any;

pub(crate) enum Payload<'a> {
    Ref(&'a mut dyn Any),
    Value(Box<dyn Any>),
}

/// A dispatch argument with its concrete type erased.
///
/// The shape is recorded from the static type at construction, so the value
/// keeps the caller's exact type and category however it travels.
pub struct ErasedArg<'a> {
    shape: Shape,
    payload: Payload<'a>,
}

impl<'a> ErasedArg<'a> {
    pub fn by_ref<T: Any>(value: &'a mut T) -> Self {
        Self {
            shape: Shape::by_ref::<T>(),
            payload: Payload::Ref(value),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub(crate) fn into_payload(self) -> Payload<'a> {
        self.payload
    }
}

impl ErasedArg<'static> {
    pub fn by_value<T: Any>(value: T) -> Self {
        Self {
            shape: Shape::by_value::<T>(),
            payload: Payload::Value(Box::new(value)),
        }
    }
}

impl std::fmt::Debug for ErasedArg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErasedArg").field("shape", &self.shape).finish_non_exhaustive()
    }
}
