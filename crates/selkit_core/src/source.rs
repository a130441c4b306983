//! Value sources and resolution
//!
//! A select's current value can come from four places, resolved once
//! per configuration update by fixed precedence instead of being
//! re-derived ad hoc at each access:
//!
//! 1. [`SelectProps::value`] — controlled mode, the external owner is
//!    the only writer
//! 2. [`SelectProps::value_link`] — linked mode, two-way binding via a
//!    change-request callback
//! 3. [`SelectProps::default_value`] — uncontrolled seed, consulted at
//!    construction only
//! 4. none of the above — the first option, or unselected when a
//!    placeholder was declared
//!
//! Supplying several sources at once is never an error; precedence
//! decides.

use std::fmt;
use std::sync::Arc;

use crate::children::FlattenedChildren;

/// Commit notification callback, shared with the external owner.
pub type UpdateCallback<V> = Arc<dyn Fn(&V) + Send + Sync>;

/// Two-way value binding: the owner's current value plus a callback to
/// request a change. The owner decides whether to apply the change and
/// feeds the new value back through [`SelectProps`].
#[derive(Clone)]
pub struct ValueLink<V> {
    /// The owner's current value. `None` means unselected.
    pub value: Option<V>,
    request_change: UpdateCallback<V>,
}

impl<V> ValueLink<V> {
    /// Create a link from the owner's current value and change-request
    /// callback.
    pub fn new<F>(value: Option<V>, request_change: F) -> Self
    where
        F: Fn(&V) + Send + Sync + 'static,
    {
        Self {
            value,
            request_change: Arc::new(request_change),
        }
    }

    /// Ask the owner to adopt `value`.
    pub fn request_change(&self, value: &V) {
        (self.request_change)(value);
    }
}

impl<V: fmt::Debug> fmt::Debug for ValueLink<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueLink").field("value", &self.value).finish()
    }
}

/// External value-control inputs of a select.
#[derive(Clone)]
pub struct SelectProps<V> {
    /// Controlled value. Selection always mirrors this while present.
    pub value: Option<V>,
    /// Two-way value binding.
    pub value_link: Option<ValueLink<V>>,
    /// Uncontrolled seed; ignored after construction.
    pub default_value: Option<V>,
    /// Generic commit notification, invoked alongside the link's
    /// change request.
    pub on_update: Option<UpdateCallback<V>>,
}

impl<V> Default for SelectProps<V> {
    fn default() -> Self {
        Self {
            value: None,
            value_link: None,
            default_value: None,
            on_update: None,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for SelectProps<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectProps")
            .field("value", &self.value)
            .field("value_link", &self.value_link)
            .field("default_value", &self.default_value)
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}

/// Which value source is authoritative, by fixed precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceMode {
    /// `value` is present; local commits never persist.
    Controlled,
    /// `value_link` is present; local commits never persist.
    Linked,
    /// `default_value` seeded the selection; the select owns it now.
    Default,
    /// No external source: first option, or unselected with a
    /// placeholder.
    Auto,
}

impl SourceMode {
    /// Compute the active mode for a set of props.
    pub fn of<V>(props: &SelectProps<V>) -> Self {
        if props.value.is_some() {
            SourceMode::Controlled
        } else if props.value_link.is_some() {
            SourceMode::Linked
        } else if props.default_value.is_some() {
            SourceMode::Default
        } else {
            SourceMode::Auto
        }
    }

    /// True when an external owner holds the value and local commits
    /// must not persist.
    pub fn is_external(&self) -> bool {
        matches!(self, SourceMode::Controlled | SourceMode::Linked)
    }
}

/// Resolve the selected value from props and the flattened children.
pub fn resolve_value<V: Clone>(
    props: &SelectProps<V>,
    children: &FlattenedChildren<V>,
) -> Option<V> {
    if let Some(value) = &props.value {
        return Some(value.clone());
    }
    if let Some(link) = &props.value_link {
        return link.value.clone();
    }
    if let Some(value) = &props.default_value {
        return Some(value.clone());
    }
    if children.has_placeholder() {
        None
    } else {
        children.first().map(|option| option.value.clone())
    }
}

/// Focus tracks selection, except that an unselected select still
/// focuses the first option so keyboard navigation has a start point.
pub fn focus_for<V: Clone>(
    selected: &Option<V>,
    children: &FlattenedChildren<V>,
) -> Option<V> {
    selected
        .clone()
        .or_else(|| children.first().map(|option| option.value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children::SelectChild;

    fn cities() -> FlattenedChildren<&'static str> {
        FlattenedChildren::from_children(vec![
            SelectChild::option("rome", "Rome"),
            SelectChild::option("vienna", "Vienna"),
        ])
    }

    #[test]
    fn test_mode_precedence() {
        let mut props = SelectProps::<&str>::default();
        assert_eq!(SourceMode::of(&props), SourceMode::Auto);

        props.default_value = Some("rome");
        assert_eq!(SourceMode::of(&props), SourceMode::Default);

        props.value_link = Some(ValueLink::new(Some("rome"), |_| {}));
        assert_eq!(SourceMode::of(&props), SourceMode::Linked);

        props.value = Some("vienna");
        assert_eq!(SourceMode::of(&props), SourceMode::Controlled);
        assert!(SourceMode::of(&props).is_external());
    }

    #[test]
    fn test_resolve_controlled_beats_link_and_default() {
        let props = SelectProps {
            value: Some("vienna"),
            value_link: Some(ValueLink::new(Some("rome"), |_| {})),
            default_value: Some("rome"),
            on_update: None,
        };
        assert_eq!(resolve_value(&props, &cities()), Some("vienna"));
    }

    #[test]
    fn test_resolve_falls_back_to_first_option() {
        let props = SelectProps::default();
        assert_eq!(resolve_value(&props, &cities()), Some("rome"));
    }

    #[test]
    fn test_resolve_placeholder_means_unselected() {
        let children = FlattenedChildren::from_children(vec![
            SelectChild::placeholder("Select a City"),
            SelectChild::option("rome", "Rome"),
        ]);
        let props = SelectProps::default();

        let selected = resolve_value(&props, &children);
        assert_eq!(selected, None);
        // Focus still starts at the first option.
        assert_eq!(focus_for(&selected, &children), Some("rome"));
    }

    #[test]
    fn test_link_with_no_value_resolves_unselected() {
        let props = SelectProps {
            value: None,
            value_link: Some(ValueLink::new(None::<&str>, |_| {})),
            default_value: Some("vienna"),
            on_update: None,
        };
        // The link is the active source even when its value is empty.
        assert_eq!(resolve_value(&props, &cities()), None);
    }

    #[test]
    fn test_falsy_values_resolve_strictly() {
        let children = FlattenedChildren::from_children(vec![
            SelectChild::option(0, "Zero"),
            SelectChild::option(1, "One"),
        ]);
        let props = SelectProps {
            value: Some(0),
            ..SelectProps::default()
        };
        assert_eq!(resolve_value(&props, &children), Some(0));
    }
}
