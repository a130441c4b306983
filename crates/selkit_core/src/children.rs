//! Declarative children and the option list flattener
//!
//! A select is described by an ordered list of [`SelectChild`] entries:
//! options, at most one meaningful placeholder, separators for visual
//! grouping, and groups that nest further children. Groups let callers
//! mix individually listed options with option arrays built in a loop,
//! in any nesting, while keeping declaration order.
//!
//! [`FlattenedChildren`] is the result of one flatten pass: the
//! navigable option sequence (separators and placeholder excluded), the
//! placeholder label if one was present, and a display sequence that
//! keeps separators in their declared positions for the render layer.
//!
//! # Example
//!
//! ```
//! use selkit_core::{FlattenedChildren, SelectChild};
//!
//! let flat = FlattenedChildren::from_children(vec![
//!     SelectChild::placeholder("Select a City"),
//!     SelectChild::option("boston", "Boston"),
//!     SelectChild::group(vec![
//!         SelectChild::option("rome", "Rome"),
//!         SelectChild::option("vienna", "Vienna"),
//!     ]),
//!     SelectChild::option("newyork", "New York"),
//! ]);
//!
//! assert_eq!(flat.len(), 4);
//! assert_eq!(flat.placeholder_label(), Some("Select a City"));
//! ```

use smallvec::SmallVec;

/// A selectable leaf: a value plus the label shown for it.
///
/// Immutable once flattened; the whole sequence is recomputed whenever
/// the declarative children change.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionDescriptor<V> {
    /// The value stored in selection state when this option is chosen.
    pub value: V,
    /// The display label. Richer render content is the render layer's
    /// concern; the state core only carries text.
    pub label: String,
}

impl<V> OptionDescriptor<V> {
    /// Create a descriptor from a value and label.
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// One entry in the declarative children of a select.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectChild<V> {
    /// A selectable option.
    Option(OptionDescriptor<V>),
    /// Label shown in the trigger while nothing is selected. Never part
    /// of the navigable sequence. Only the first placeholder counts.
    Placeholder { label: String },
    /// Visual group divider. Never navigable, never selectable.
    Separator { label: String },
    /// A nested ordered list of children, expanded in place.
    Group(Vec<SelectChild<V>>),
}

impl<V> SelectChild<V> {
    /// Shorthand for an option child.
    pub fn option(value: V, label: impl Into<String>) -> Self {
        SelectChild::Option(OptionDescriptor::new(value, label))
    }

    /// Shorthand for a placeholder child.
    pub fn placeholder(label: impl Into<String>) -> Self {
        SelectChild::Placeholder {
            label: label.into(),
        }
    }

    /// Shorthand for a separator child.
    pub fn separator(label: impl Into<String>) -> Self {
        SelectChild::Separator {
            label: label.into(),
        }
    }

    /// Shorthand for a nested group of children.
    pub fn group(children: Vec<SelectChild<V>>) -> Self {
        SelectChild::Group(children)
    }
}

/// One row of the display sequence handed to the render layer.
///
/// Separators keep their declared position here even though they are
/// absent from the navigable option sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayEntry {
    /// An option row, indexed into [`FlattenedChildren::options`].
    Option(usize),
    /// A separator row with its label.
    Separator(String),
}

/// The output of one flatten pass over declarative children.
#[derive(Clone, Debug)]
pub struct FlattenedChildren<V> {
    options: SmallVec<[OptionDescriptor<V>; 8]>,
    placeholder_label: Option<String>,
    entries: Vec<DisplayEntry>,
}

impl<V> Default for FlattenedChildren<V> {
    fn default() -> Self {
        Self {
            options: SmallVec::new(),
            placeholder_label: None,
            entries: Vec::new(),
        }
    }
}

impl<V> FlattenedChildren<V> {
    /// Flatten a declarative children list.
    ///
    /// Groups are expanded recursively in declaration order. Separators
    /// go to the display sequence only. The first placeholder wins;
    /// extra placeholders are dropped silently.
    pub fn from_children(children: Vec<SelectChild<V>>) -> Self {
        let mut flat = Self::default();
        flat.push_all(children);
        flat
    }

    fn push_all(&mut self, children: Vec<SelectChild<V>>) {
        for child in children {
            match child {
                SelectChild::Option(descriptor) => {
                    self.entries.push(DisplayEntry::Option(self.options.len()));
                    self.options.push(descriptor);
                }
                SelectChild::Placeholder { label } => {
                    if self.placeholder_label.is_none() {
                        self.placeholder_label = Some(label);
                    }
                }
                SelectChild::Separator { label } => {
                    self.entries.push(DisplayEntry::Separator(label));
                }
                SelectChild::Group(nested) => self.push_all(nested),
            }
        }
    }

    /// The navigable option sequence, in declaration order.
    pub fn options(&self) -> &[OptionDescriptor<V>] {
        &self.options
    }

    /// Number of navigable options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when there are no navigable options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// True when a placeholder was declared.
    pub fn has_placeholder(&self) -> bool {
        self.placeholder_label.is_some()
    }

    /// The placeholder label, if one was declared.
    pub fn placeholder_label(&self) -> Option<&str> {
        self.placeholder_label.as_deref()
    }

    /// The display sequence: options and separators in declared order.
    pub fn entries(&self) -> &[DisplayEntry] {
        &self.entries
    }

    /// The first navigable option.
    pub fn first(&self) -> Option<&OptionDescriptor<V>> {
        self.options.first()
    }

    /// The last navigable option.
    pub fn last(&self) -> Option<&OptionDescriptor<V>> {
        self.options.last()
    }
}

impl<V: PartialEq> FlattenedChildren<V> {
    /// Index of the option carrying `value`, if any.
    pub fn index_of(&self, value: &V) -> Option<usize> {
        self.options.iter().position(|option| option.value == *value)
    }

    /// Label of the option carrying `value`, if any.
    pub fn label_for(&self, value: &V) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == *value)
            .map(|option| option.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_plain_options() {
        let flat = FlattenedChildren::from_children(vec![
            SelectChild::option("rome", "Rome"),
            SelectChild::option("vienna", "Vienna"),
        ]);

        assert_eq!(flat.len(), 2);
        assert!(!flat.has_placeholder());
        assert_eq!(flat.options()[0].value, "rome");
        assert_eq!(flat.options()[1].value, "vienna");
    }

    #[test]
    fn test_flatten_nested_groups_keep_order() {
        let flat = FlattenedChildren::from_children(vec![
            SelectChild::option("boston", "Boston"),
            SelectChild::group(vec![
                SelectChild::option("rome", "Rome"),
                SelectChild::group(vec![SelectChild::option("vienna", "Vienna")]),
            ]),
            SelectChild::option("newyork", "New York"),
        ]);

        let values: Vec<&str> = flat.options().iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["boston", "rome", "vienna", "newyork"]);
    }

    #[test]
    fn test_separators_excluded_from_navigation_but_displayed() {
        let flat = FlattenedChildren::from_children(vec![
            SelectChild::separator("Italy"),
            SelectChild::option("rome", "Rome"),
            SelectChild::separator("Austria"),
            SelectChild::option("vienna", "Vienna"),
        ]);

        assert_eq!(flat.len(), 2);
        assert_eq!(
            flat.entries(),
            &[
                DisplayEntry::Separator("Italy".into()),
                DisplayEntry::Option(0),
                DisplayEntry::Separator("Austria".into()),
                DisplayEntry::Option(1),
            ]
        );
    }

    #[test]
    fn test_first_placeholder_wins() {
        let flat = FlattenedChildren::from_children(vec![
            SelectChild::<&str>::placeholder("Pick one"),
            SelectChild::placeholder("Ignored"),
        ]);

        assert_eq!(flat.placeholder_label(), Some("Pick one"));
        assert!(flat.is_empty());
    }

    #[test]
    fn test_empty_and_single_option() {
        let empty = FlattenedChildren::<&str>::from_children(vec![]);
        assert!(empty.is_empty());
        assert!(empty.first().is_none());

        let single =
            FlattenedChildren::from_children(vec![SelectChild::option("rome", "Rome")]);
        assert_eq!(single.first().map(|o| o.value), Some("rome"));
        assert_eq!(single.last().map(|o| o.value), Some("rome"));
    }

    #[test]
    fn test_index_and_label_lookup() {
        let flat = FlattenedChildren::from_children(vec![
            SelectChild::option(0, "Zero"),
            SelectChild::option(1, "One"),
        ]);

        assert_eq!(flat.index_of(&0), Some(0));
        assert_eq!(flat.index_of(&1), Some(1));
        assert_eq!(flat.index_of(&2), None);
        assert_eq!(flat.label_for(&0), Some("Zero"));
    }
}
