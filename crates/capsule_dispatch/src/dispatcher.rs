use crate::{ErasedArg, HandlerEntry};
use ahash::RandomState;
use capsule_core::{DispatchError, DispatchResultExt, DispatcherConfig, Shape};
use hashbrown::HashMap;
use std::any::Any;
use std::fmt;

type ShapeIndex = HashMap<Shape, usize, RandomState>;

/// Routes erased values to the one handler whose shape matches exactly.
///
/// The handler set is fixed when the dispatcher is built; duplicate shapes
/// are rejected then. A dispatch matches on the value's exact type and
/// category only: a `&mut T` handler never sees an owned `T`, a `T` handler
/// never sees a borrowed one, and no handler sees a related type.
pub struct TypedDispatcher<R = ()> {
    entries: Vec<HandlerEntry<R>>,
    index: ShapeIndex,
    config: DispatcherConfig,
}

impl<R: 'static> TypedDispatcher<R> {
    pub fn new<I>(entries: I) -> Result<Self, DispatchError>
    where
        I: IntoIterator<Item = HandlerEntry<R>>,
    {
        Self::with_config(entries, DispatcherConfig::default())
    }

    pub fn with_config<I>(entries: I, config: DispatcherConfig) -> Result<Self, DispatchError>
    where
        I: IntoIterator<Item = HandlerEntry<R>>,
    {
        let entries: Vec<HandlerEntry<R>> = entries.into_iter().collect();
        let mut index = ShapeIndex::with_capacity_and_hasher(entries.len(), RandomState::new());
        for (pos, entry) in entries.iter().enumerate() {
            let shape = entry.shape();
            if index.insert(shape, pos).is_some() {
                return Err(DispatchError::AmbiguousHandler { shape });
            }
        }
        tracing::debug!(
            dispatcher = %config.label,
            handlers = entries.len(),
            "typed dispatcher built"
        );
        Ok(Self {
            entries,
            index,
            config,
        })
    }

    pub fn builder() -> DispatcherBuilder<R> {
        DispatcherBuilder::new()
    }

    /// Dispatches a borrowed value. Only a `by_ref` handler for exactly `T` matches.
    pub fn dispatch_ref<T: Any>(&self, value: &mut T) -> Result<R, DispatchError> {
        self.dispatch_erased(ErasedArg::by_ref(value))
    }

    /// Dispatches an owned value. Only a `by_value` handler for exactly `T`
    /// matches. The value is dropped when nothing matches.
    pub fn dispatch_value<T: Any>(&self, value: T) -> Result<R, DispatchError> {
        self.dispatch_erased(ErasedArg::by_value(value))
    }

    pub fn dispatch_erased(&self, arg: ErasedArg<'_>) -> Result<R, DispatchError> {
        let shape = arg.shape();
        tracing::trace!(dispatcher = %self.config.label, %shape, "dispatch");
        let Some(&pos) = self.index.get(&shape) else {
            if let Some(registered) = self.category_mismatch(&shape) {
                tracing::debug!(
                    dispatcher = %self.config.label,
                    %shape,
                    registered = %registered.category(),
                    "no handler for this category; the type is registered under the other one"
                );
            }
            return Err(DispatchError::NoMatchingHandler { shape });
        };
        self.entries[pos]
            .invoke(arg)
            .ok_or(DispatchError::NoMatchingHandler { shape })
    }

    /// Applies the configured `UnmatchedPolicy` to a dispatch result.
    pub fn resolve(&self, result: Result<R, DispatchError>) -> Result<Option<R>, DispatchError> {
        result.unmatched(self.config.unmatched)
    }

    /// Rebinds the handler for an already registered shape and returns the
    /// previous entry. Dispatches issued afterwards use the new handler.
    pub fn replace(&mut self, entry: HandlerEntry<R>) -> Result<HandlerEntry<R>, DispatchError> {
        let shape = entry.shape();
        let pos = *self
            .index
            .get(&shape)
            .ok_or(DispatchError::UnknownShape { shape })?;
        tracing::debug!(dispatcher = %self.config.label, %shape, "handler replaced");
        Ok(std::mem::replace(&mut self.entries[pos], entry))
    }
}

impl<R> TypedDispatcher<R> {
    /// Registered shapes, in registration order.
    pub fn shapes(&self) -> impl Iterator<Item = Shape> {
        self.entries.iter().map(HandlerEntry::shape)
    }

    pub fn accepts(&self, shape: &Shape) -> bool {
        self.index.contains_key(shape)
    }

    /// The registered shape for the same type under the other category, if
    /// `shape` itself is unregistered and that one exists.
    pub fn category_mismatch(&self, shape: &Shape) -> Option<Shape> {
        if self.accepts(shape) {
            return None;
        }
        let flipped = shape.flipped();
        self.accepts(&flipped).then_some(flipped)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }
}

impl<R> fmt::Debug for TypedDispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedDispatcher")
            .field("label", &self.config.label)
            .field("handlers", &self.entries)
            .finish()
    }
}

/// Collects handlers before a `TypedDispatcher` is built.
pub struct DispatcherBuilder<R = ()> {
    entries: Vec<HandlerEntry<R>>,
    config: DispatcherConfig,
}

impl<R: 'static> DispatcherBuilder<R> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            config: DispatcherConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DispatcherConfig) -> Self {
        self.config = config;
        self
    }

    pub fn by_ref<T, F>(self, handler: F) -> Self
    where
        T: Any,
        F: Fn(&mut T) -> R + Send + Sync + 'static,
    {
        self.entry(HandlerEntry::by_ref(handler))
    }

    pub fn by_value<T, F>(self, handler: F) -> Self
    where
        T: Any,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        self.entry(HandlerEntry::by_value(handler))
    }

    pub fn entry(mut self, entry: HandlerEntry<R>) -> Self {
        self.register(entry);
        self
    }

    pub fn register(&mut self, entry: HandlerEntry<R>) {
        self.entries.push(entry);
    }

    /// Fails with `AmbiguousHandler` on the first repeated shape.
    pub fn build(self) -> Result<TypedDispatcher<R>, DispatchError> {
        TypedDispatcher::with_config(self.entries, self.config)
    }
}

impl<R: 'static> Default for DispatcherBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn duplicate_shape_is_rejected_at_build() {
        let err = TypedDispatcher::<()>::builder()
            .by_value(|_: i32| ())
            .by_ref(|_: &mut i32| ())
            .by_value(|_: i32| ())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::AmbiguousHandler {
                shape: Shape::by_value::<i32>()
            }
        );
    }

    #[test]
    fn unmatched_runs_no_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let dispatcher = TypedDispatcher::new([HandlerEntry::by_value(move |_: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
        })])
        .unwrap();
        let err = dispatcher.dispatch_value(1.5f64).unwrap_err();
        assert_eq!(err.shape(), Shape::by_value::<f64>());
        let mut n = 3i32;
        assert!(dispatcher.dispatch_ref(&mut n).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        dispatcher.dispatch_value(3i32).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn replace_requires_registered_shape() {
        let mut dispatcher = TypedDispatcher::new([HandlerEntry::by_value(|n: i32| n)]).unwrap();
        let err = dispatcher
            .replace(HandlerEntry::by_value(|n: i64| n as i32))
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::UnknownShape {
                shape: Shape::by_value::<i64>()
            }
        );
        let previous = dispatcher.replace(HandlerEntry::by_value(|n: i32| -n)).unwrap();
        assert_eq!(previous.shape(), Shape::by_value::<i32>());
        assert_eq!(dispatcher.dispatch_value(4i32), Ok(-4));
    }

    #[test]
    fn introspection() {
        let dispatcher = TypedDispatcher::<()>::builder()
            .with_config(DispatcherConfig::labeled("events"))
            .by_ref(|_: &mut String| ())
            .by_value(|_: u8| ())
            .build()
            .unwrap();
        assert_eq!(dispatcher.label(), "events");
        assert_eq!(dispatcher.len(), 2);
        assert!(dispatcher.accepts(&Shape::by_ref::<String>()));
        assert!(!dispatcher.accepts(&Shape::by_value::<String>()));
        let shapes: Vec<Shape> = dispatcher.shapes().collect();
        assert_eq!(shapes, vec![Shape::by_ref::<String>(), Shape::by_value::<u8>()]);
    }

    #[test]
    fn category_mismatch_points_at_the_other_category() {
        let dispatcher = TypedDispatcher::new([HandlerEntry::by_value(|n: i32| n)]).unwrap();
        let registered = dispatcher
            .category_mismatch(&Shape::by_ref::<i32>())
            .unwrap();
        assert_eq!(registered, Shape::by_value::<i32>());
        assert_eq!(registered.category().to_string(), "by value");
        assert_eq!(dispatcher.category_mismatch(&Shape::by_value::<i32>()), None);
        assert_eq!(dispatcher.category_mismatch(&Shape::by_ref::<i64>()), None);

        let mut n = 7i32;
        assert_eq!(
            dispatcher.dispatch_ref(&mut n),
            Err(DispatchError::NoMatchingHandler {
                shape: Shape::by_ref::<i32>()
            })
        );
    }
}
