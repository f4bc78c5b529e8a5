use crate::{Draw, DrawBox, pad};

/// An ordered list of drawable entries, itself drawable.
#[derive(Clone, Debug, Default)]
pub struct Document {
    entries: Vec<DrawBox>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: Draw + Clone + 'static>(&mut self, value: T) {
        self.entries.push(DrawBox::new(value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DrawBox] {
        &self.entries
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.draw(&mut out, 0);
        out
    }
}

impl Draw for Document {
    fn draw(&self, out: &mut String, indent: usize) {
        pad(out, indent);
        out.push_str("<document>\n");
        for entry in &self.entries {
            entry.draw(out, indent + 2);
        }
        pad(out, indent);
        out.push_str("</document>\n");
    }
}
