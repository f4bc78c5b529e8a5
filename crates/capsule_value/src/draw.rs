use std::fmt;

/// Renders a value as indented text.
pub trait Draw {
    fn draw(&self, out: &mut String, indent: usize);
}

/// Appends `indent` spaces to `out`.
pub fn pad(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat_n(' ', indent));
}

macro_rules! draw_integers {
    ($($ty:ty),+) => {
        $(
            impl Draw for $ty {
                fn draw(&self, out: &mut String, indent: usize) {
                    let mut buf = itoa::Buffer::new();
                    pad(out, indent);
                    out.push_str(buf.format(*self));
                    out.push('\n');
                }
            }
        )+
    };
}

draw_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! draw_floats {
    ($($ty:ty),+) => {
        $(
            impl Draw for $ty {
                fn draw(&self, out: &mut String, indent: usize) {
                    let mut buf = ryu::Buffer::new();
                    pad(out, indent);
                    out.push_str(buf.format(*self));
                    out.push('\n');
                }
            }
        )+
    };
}

draw_floats!(f32, f64);

impl Draw for str {
    fn draw(&self, out: &mut String, indent: usize) {
        pad(out, indent);
        out.push_str(self);
        out.push('\n');
    }
}

impl Draw for String {
    fn draw(&self, out: &mut String, indent: usize) {
        self.as_str().draw(out, indent);
    }
}

impl Draw for &'static str {
    fn draw(&self, out: &mut String, indent: usize) {
        (**self).draw(out, indent);
    }
}

impl Draw for bool {
    fn draw(&self, out: &mut String, indent: usize) {
        (if *self { "true" } else { "false" }).draw(out, indent);
    }
}

impl Draw for char {
    fn draw(&self, out: &mut String, indent: usize) {
        pad(out, indent);
        out.push(*self);
        out.push('\n');
    }
}

trait DrawObject: Draw {
    fn clone_box(&self) -> Box<dyn DrawObject>;
    fn type_name(&self) -> &'static str;
}

impl<T: Draw + Clone + 'static> DrawObject for T {
    fn clone_box(&self) -> Box<dyn DrawObject> {
        Box::new(self.clone())
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// An owned drawable value of erased type. Cloning deep-copies the value.
pub struct DrawBox {
    inner: Box<dyn DrawObject>,
}

impl DrawBox {
    pub fn new<T: Draw + Clone + 'static>(value: T) -> Self {
        Self {
            inner: Box::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }
}

impl Clone for DrawBox {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl Draw for DrawBox {
    fn draw(&self, out: &mut String, indent: usize) {
        self.inner.draw(out, indent);
    }
}

impl fmt::Debug for DrawBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DrawBox").field(&self.type_name()).finish()
    }
}
