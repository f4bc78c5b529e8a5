/// Declares a trait as a capability.
///
/// `capability!(Trait)` registers `dyn Trait`; `capability!(Trait: Send + Sync)`
/// registers `dyn Trait + Send + Sync`. Either form lets any `'static`
/// implementor of the trait be placed in a slot for that capability.
#[macro_export]
macro_rules! capability {
    ($cap:ident) => {
        impl $crate::Capability for dyn $cap {
            const NAME: &'static str = stringify!($cap);
        }

        impl<T: $cap + 'static> $crate::Bind<T> for dyn $cap {
            fn bind(imp: T) -> Box<Self> {
                Box::new(imp)
            }
        }
    };
    ($cap:ident : $first:ident $(+ $rest:ident)*) => {
        impl $crate::Capability for dyn $cap + $first $(+ $rest)* {
            const NAME: &'static str = stringify!($cap + $first $(+ $rest)*);
        }

        impl<T: $cap + $first $(+ $rest)* + 'static> $crate::Bind<T>
            for dyn $cap + $first $(+ $rest)*
        {
            fn bind(imp: T) -> Box<Self> {
                Box::new(imp)
            }
        }
    };
}

/// Spells the slot-list type for a set of capabilities.
///
/// `Capabilities![dyn A, dyn B]` is `Cons<dyn A, Cons<dyn B, Nil>>`.
#[macro_export]
macro_rules! Capabilities {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::Capabilities![$($tail),*]>
    };
}

/// Builds a `CapabilityBundle`, one argument per declared capability in
/// declaration order. Each argument is anything its capability can `Bind`:
/// an implementor, a `Box<dyn Cap>` or a `Slot`. A value whose type does not
/// implement the capability it lands on is rejected:
///
/// ```compile_fail
/// use capsule_bundle::{Capabilities, CapabilityBundle, bundle, capability};
///
/// trait Act1 {
///     fn act1(&self);
/// }
///
/// capability!(Act1);
///
/// struct NotAnImpl;
///
/// let caps: CapabilityBundle<Capabilities![dyn Act1]> = bundle![NotAnImpl];
/// ```
#[macro_export]
macro_rules! bundle {
    ($($slot:expr),* $(,)?) => {
        $crate::CapabilityBundle::new($crate::__slots!($($slot),*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __slots {
    () => { $crate::Nil };
    ($head:expr $(, $tail:expr)*) => {
        $crate::Cons::new(
            $crate::Slot::new($head),
            $crate::__slots!($($tail),*),
        )
    };
}
