//! Seams between handlers and whatever hosts the page.
//!
//! Handlers never touch a concrete page: they read form controls through
//! [`Document`], navigate or show notices through [`Browser`], and fill
//! lists through [`ListContainer`]. [`memory::MemoryPage`] is the
//! in-process implementation used by the CLI and tests.

pub mod memory;

pub use memory::MemoryPage;

use crate::render::ListItem;

use models::FieldSource;

/// Read-only view of the page's elements.
pub trait Document {
    /// Whether an element with this id exists on the page.
    fn has_element(&self, id: &str) -> bool;

    /// Current value of control `name` inside form `form_id`.
    fn field_value(&self, form_id: &str, name: &str) -> Option<String>;
}

/// Side effects visible to the user.
pub trait Browser {
    /// Set the location; the page is considered left after this.
    fn navigate(&mut self, path: &str);

    /// Show a blocking notice.
    fn alert(&mut self, message: &str);
}

/// A container accepting list-item children.
pub trait ListContainer {
    fn clear(&mut self);
    fn append(&mut self, item: ListItem);
}

/// Everything a handler needs from its host.
pub trait Page: Document + Browser {
    fn list_mut(&mut self, id: &str) -> Option<&mut dyn ListContainer>;
}

/// One form of a [`Document`], seen as a [`FieldSource`].
pub struct FormView<'a, D: Document + ?Sized> {
    document: &'a D,
    form_id: &'a str,
}

impl<'a, D: Document + ?Sized> FormView<'a, D> {
    pub fn new(document: &'a D, form_id: &'a str) -> Self {
        Self { document, form_id }
    }
}

impl<D: Document + ?Sized> FieldSource for FormView<'_, D> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.document.field_value(self.form_id, name)
    }
}
