//! Heterogeneous storage grouped by concrete type.
//!
//! Each type gets one contiguous `Vec<T>`; buckets keep the order in which
//! their type was first pushed. Visiting walks bucket by bucket and hands every
//! element, by reference, to a dispatcher.

use crate::{ErasedArg, TypedDispatcher};
use ahash::RandomState;
use capsule_core::{DispatchError, Shape};
use indexmap::IndexMap;
use std::any::{Any, TypeId};
use std::fmt;

trait Bucket {
    fn len(&self) -> usize;
    fn element_shape(&self) -> Shape;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn for_each_arg(
        &mut self,
        f: &mut dyn FnMut(ErasedArg<'_>) -> Result<(), DispatchError>,
    ) -> Result<(), DispatchError>;
}

impl<T: Any> Bucket for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element_shape(&self) -> Shape {
        Shape::by_ref::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn for_each_arg(
        &mut self,
        f: &mut dyn FnMut(ErasedArg<'_>) -> Result<(), DispatchError>,
    ) -> Result<(), DispatchError> {
        for item in self.iter_mut() {
            f(ErasedArg::by_ref(item))?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct TypedBuckets {
    buckets: IndexMap<TypeId, Box<dyn Bucket>, RandomState>,
    len: usize,
}

impl TypedBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: Any>(&mut self, value: T) {
        let bucket = self
            .buckets
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Vec::<T>::new()));
        // Buckets are keyed by `TypeId::of::<T>()`, so this is always a `Vec<T>`.
        if let Some(items) = bucket.as_any_mut().downcast_mut::<Vec<T>>() {
            items.push(value);
            self.len += 1;
        }
    }

    /// All stored values of type `T`, in push order. Empty if none were pushed.
    pub fn bucket<T: Any>(&self) -> &[T] {
        self.buckets
            .get(&TypeId::of::<T>())
            .and_then(|bucket| bucket.as_any().downcast_ref::<Vec<T>>())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn bucket_mut<T: Any>(&mut self) -> Option<&mut [T]> {
        self.buckets
            .get_mut(&TypeId::of::<T>())
            .and_then(|bucket| bucket.as_any_mut().downcast_mut::<Vec<T>>())
            .map(Vec::as_mut_slice)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn type_count(&self) -> usize {
        self.buckets.len()
    }

    /// Shapes the stored values dispatch as, one per bucket, in bucket order.
    pub fn shapes(&self) -> impl Iterator<Item = Shape> {
        self.buckets.values().map(|bucket| bucket.element_shape())
    }

    /// Dispatches every stored value by reference and collects the results.
    ///
    /// Every bucket's type is checked against `dispatcher` first; if any type
    /// has no by-reference handler no handler runs at all.
    pub fn visit<R: 'static>(
        &mut self,
        dispatcher: &TypedDispatcher<R>,
    ) -> Result<Vec<R>, DispatchError> {
        if let Some(shape) = self.shapes().find(|shape| !dispatcher.accepts(shape)) {
            return Err(DispatchError::NoMatchingHandler { shape });
        }
        let mut results = Vec::with_capacity(self.len);
        for bucket in self.buckets.values_mut() {
            bucket.for_each_arg(&mut |arg: ErasedArg<'_>| {
                results.push(dispatcher.dispatch_erased(arg)?);
                Ok(())
            })?;
        }
        Ok(results)
    }
}

impl fmt::Debug for TypedBuckets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for bucket in self.buckets.values() {
            map.entry(&bucket.element_shape().type_name(), &bucket.len());
        }
        map.finish()
    }
}
