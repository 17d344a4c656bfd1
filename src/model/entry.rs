//! Selectable list entries.

/// An opaque, caller-owned item in a selectable list.
///
/// The navigator never inspects the concrete type; it only asks for the
/// display label and whether the entry is the default choice. Callers keep
/// ownership of the backing slice for the duration of one navigation call.
pub trait Entry {
    /// Display label shown in the menu.
    fn label(&self) -> String;

    /// Whether this entry is the default choice. Affects display only.
    fn is_default(&self) -> bool {
        false
    }
}

impl<E: Entry + ?Sized> Entry for &E {
    fn label(&self) -> String {
        (**self).label()
    }

    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

impl<E: Entry + ?Sized> Entry for Box<E> {
    fn label(&self) -> String {
        (**self).label()
    }

    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

impl Entry for str {
    fn label(&self) -> String {
        self.to_string()
    }
}

impl Entry for String {
    fn label(&self) -> String {
        self.clone()
    }
}

/// Plain labelled entry, the simplest [`Entry`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledEntry {
    label: String,
    is_default: bool,
}

impl LabeledEntry {
    /// Create a non-default entry.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_default: false,
        }
    }

    /// Mark this entry as the default choice.
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }
}

impl Entry for LabeledEntry {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn is_default(&self) -> bool {
        self.is_default
    }
}
