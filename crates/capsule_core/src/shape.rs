//! Dispatch shapes.
//!
//! A shape is what a handler declares it accepts: an exact concrete type and
//! whether the value arrives by reference (aliasing the caller's value) or by
//! value (moved into the handler). Two shapes are equal only when both parts
//! are equal; the type name is carried for diagnostics and ignored by `Eq`
//! and `Hash`.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// The handler receives `&mut T` borrowed from the caller.
    Ref,
    /// The handler receives an owned `T`.
    Value,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Ref => f.write_str("by reference"),
            Category::Value => f.write_str("by value"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Shape {
    id: TypeId,
    name: &'static str,
    category: Category,
}

impl Shape {
    pub fn of<T: ?Sized + 'static>(category: Category) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            category,
        }
    }

    pub fn by_ref<T: ?Sized + 'static>() -> Self {
        Self::of::<T>(Category::Ref)
    }

    pub fn by_value<T: 'static>() -> Self {
        Self::of::<T>(Category::Value)
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn type_name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The same type under the other value category.
    pub fn flipped(self) -> Self {
        let category = match self.category {
            Category::Ref => Category::Value,
            Category::Value => Category::Ref,
        };
        Self { category, ..self }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.category == other.category
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.category.hash(state);
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Category::Ref => write!(f, "&mut {}", self.name),
            Category::Value => f.write_str(self.name),
        }
    }
}
