//! The Select component
//!
//! A headless dropdown select: shows the current selection (or a
//! placeholder), opens a list of options on activation, and lets the
//! user pick one by pointer or keyboard. This module wires the
//! declarative builder onto [`SelectCore`] and exposes the read-only
//! snapshot the render layer consumes.
//!
//! # Example
//!
//! ```
//! use selkit_select::select;
//!
//! let mut fruit = select()
//!     .placeholder("Choose a fruit...")
//!     .option("apple", "Apple")
//!     .option("banana", "Banana")
//!     .option("cherry", "Cherry")
//!     .on_update(|value| println!("Selected: {value}"))
//!     .build();
//!
//! fruit.trigger_press();
//! assert!(fruit.is_open());
//! fruit.option_press("banana");
//! assert_eq!(fruit.selected_value(), Some(&"banana"));
//! ```

use std::fmt;

use tracing::debug;

use selkit_core::{
    FlattenedChildren, KeyToken, OptionDescriptor, PointerPhase, SelectChild, SelectCore,
    SelectEvent, SelectProps, SourceMode, UpdateCallback, ValueLink,
};

use crate::style::StyleHandle;

/// One row of the dropdown as the render layer should show it.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectRow<V> {
    /// A selectable option row.
    Option {
        value: V,
        label: String,
        /// This row carries the committed value.
        selected: bool,
        /// This row carries the keyboard focus.
        focused: bool,
    },
    /// A visual group divider.
    Separator { label: String },
}

/// A read-only view of the select for the rendering collaborator.
///
/// Produced fresh after each event; mutating it has no effect on the
/// component.
#[derive(Clone, Debug)]
pub struct SelectSnapshot<V> {
    /// The committed value, if any.
    pub selected_value: Option<V>,
    /// The option keyboard navigation points at, if any.
    pub focused_value: Option<V>,
    /// Whether the dropdown is showing.
    pub is_open: bool,
    /// What the trigger area should display: the selected option's
    /// label, else the placeholder label, else the first option's
    /// label.
    pub trigger_label: Option<String>,
    /// True when the trigger shows the placeholder rather than a
    /// selected option.
    pub shows_placeholder: bool,
    /// Dropdown rows in display order, separators in place.
    pub rows: Vec<SelectRow<V>>,
    /// Host styling data, passed through untouched.
    pub style: Option<StyleHandle>,
}

/// A headless select component instance.
pub struct Select<V> {
    core: SelectCore<V>,
    style: Option<StyleHandle>,
}

impl<V: fmt::Debug> fmt::Debug for Select<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select").field("core", &self.core).finish()
    }
}

impl<V> Select<V>
where
    V: Clone + PartialEq + fmt::Debug,
{
    /// The committed value, if any.
    pub fn selected_value(&self) -> Option<&V> {
        self.core.selected_value()
    }

    /// The focused option value, if any.
    pub fn focused_value(&self) -> Option<&V> {
        self.core.focused_value()
    }

    /// Whether the dropdown is showing.
    pub fn is_open(&self) -> bool {
        self.core.is_open()
    }

    /// The active value-source mode.
    pub fn mode(&self) -> SourceMode {
        self.core.mode()
    }

    /// Apply a raw key string from the host. Unrecognized tokens are
    /// ignored so the host can layer type-ahead on top.
    pub fn handle_key(&mut self, key: &str) {
        self.core.handle_key_str(key);
    }

    /// Apply an already-recognized key token.
    pub fn handle_key_token(&mut self, key: KeyToken) {
        self.core.handle_key(key);
    }

    /// Pointer press on the trigger area: toggles the dropdown.
    pub fn trigger_press(&mut self) {
        self.core
            .handle(SelectEvent::TriggerPointer(PointerPhase::Press));
    }

    /// Pointer activity on the trigger area at an arbitrary phase.
    pub fn trigger_pointer(&mut self, phase: PointerPhase) {
        self.core.handle(SelectEvent::TriggerPointer(phase));
    }

    /// Pointer press on an option: commits it whether or not the
    /// dropdown is open.
    pub fn option_press(&mut self, value: V) {
        self.core.handle(SelectEvent::OptionPointer {
            value,
            phase: PointerPhase::Press,
        });
    }

    /// Pointer activity on an option at an arbitrary phase. Only the
    /// press phase commits.
    pub fn option_pointer(&mut self, value: V, phase: PointerPhase) {
        self.core.handle(SelectEvent::OptionPointer { value, phase });
    }

    /// External dismiss signal (e.g. the select lost activation).
    pub fn dismiss(&mut self) {
        self.core.handle(SelectEvent::Dismiss);
    }

    /// Apply one input event.
    pub fn handle_event(&mut self, event: SelectEvent<V>) {
        self.core.handle(event);
    }

    /// Reconcile against updated external value props.
    pub fn reconcile(&mut self, props: SelectProps<V>) {
        self.core.reconcile(props);
    }

    /// Replace the declarative children. The option sequence is
    /// reflattened atomically.
    pub fn set_children(&mut self, children: Vec<SelectChild<V>>) {
        let flattened = FlattenedChildren::from_children(children);
        debug!(options = flattened.len(), "children replaced");
        self.core.set_children(flattened);
    }

    /// Replace the host styling data.
    pub fn set_style(&mut self, style: StyleHandle) {
        self.style = Some(style);
    }

    /// Build the read-only view for the render layer.
    pub fn snapshot(&self) -> SelectSnapshot<V> {
        let children = self.core.children();
        let selected = self.core.selected_value();
        let focused = self.core.focused_value();

        let selected_label = selected
            .and_then(|value| children.label_for(value))
            .map(str::to_owned);
        let shows_placeholder = selected_label.is_none();
        let trigger_label = selected_label
            .or_else(|| children.placeholder_label().map(str::to_owned))
            .or_else(|| children.first().map(|option| option.label.clone()));

        let rows = children
            .entries()
            .iter()
            .map(|entry| match entry {
                selkit_core::DisplayEntry::Option(index) => {
                    let option = &children.options()[*index];
                    SelectRow::Option {
                        value: option.value.clone(),
                        label: option.label.clone(),
                        selected: selected == Some(&option.value),
                        focused: focused == Some(&option.value),
                    }
                }
                selkit_core::DisplayEntry::Separator(label) => SelectRow::Separator {
                    label: label.clone(),
                },
            })
            .collect();

        SelectSnapshot {
            selected_value: self.core.selected_value().cloned(),
            focused_value: self.core.focused_value().cloned(),
            is_open: self.core.is_open(),
            trigger_label,
            shows_placeholder,
            rows,
            style: self.style.clone(),
        }
    }
}

/// Builder for a [`Select`], in declaration order.
pub struct SelectBuilder<V> {
    children: Vec<SelectChild<V>>,
    props: SelectProps<V>,
    style: Option<StyleHandle>,
}

impl<V> Default for SelectBuilder<V> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            props: SelectProps::default(),
            style: None,
        }
    }
}

impl<V> SelectBuilder<V>
where
    V: Clone + PartialEq + fmt::Debug,
{
    /// Add an option with value and label.
    pub fn option(mut self, value: V, label: impl Into<String>) -> Self {
        self.children.push(SelectChild::option(value, label));
        self
    }

    /// Add multiple options at once.
    pub fn options(mut self, options: impl IntoIterator<Item = OptionDescriptor<V>>) -> Self {
        self.children
            .extend(options.into_iter().map(SelectChild::Option));
        self
    }

    /// Set the placeholder shown while nothing is selected. The first
    /// placeholder wins if called twice.
    pub fn placeholder(mut self, label: impl Into<String>) -> Self {
        self.children.push(SelectChild::placeholder(label));
        self
    }

    /// Add a separator row.
    pub fn separator(mut self, label: impl Into<String>) -> Self {
        self.children.push(SelectChild::separator(label));
        self
    }

    /// Add a nested group of children, expanded in place.
    pub fn group(mut self, children: Vec<SelectChild<V>>) -> Self {
        self.children.push(SelectChild::Group(children));
        self
    }

    /// Add an arbitrary child entry.
    pub fn child(mut self, child: SelectChild<V>) -> Self {
        self.children.push(child);
        self
    }

    /// Supply a controlled value. Selection will always mirror it.
    pub fn value(mut self, value: V) -> Self {
        self.props.value = Some(value);
        self
    }

    /// Supply a two-way value link.
    pub fn value_link(mut self, link: ValueLink<V>) -> Self {
        self.props.value_link = Some(link);
        self
    }

    /// Seed the uncontrolled initial selection.
    pub fn default_value(mut self, value: V) -> Self {
        self.props.default_value = Some(value);
        self
    }

    /// Set the commit notification callback.
    pub fn on_update<F>(mut self, callback: F) -> Self
    where
        F: Fn(&V) + Send + Sync + 'static,
    {
        self.props.on_update = Some(std::sync::Arc::new(callback) as UpdateCallback<V>);
        self
    }

    /// Attach opaque host styling data.
    pub fn style<T: std::any::Any + Send + Sync>(mut self, style: T) -> Self {
        self.style = Some(StyleHandle::new(style));
        self
    }

    /// Resolve the initial selection and produce the component.
    pub fn build(self) -> Select<V> {
        let flattened = FlattenedChildren::from_children(self.children);
        Select {
            core: SelectCore::new(self.props, flattened),
            style: self.style,
        }
    }
}

/// Create a select builder.
pub fn select<V>() -> SelectBuilder<V>
where
    V: Clone + PartialEq + fmt::Debug,
{
    SelectBuilder::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_option_selected_without_value_props() {
        let city = select()
            .option("rome", "Rome")
            .option("vienna", "Vienna")
            .build();

        assert_eq!(city.selected_value(), Some(&"rome"));
        assert_eq!(city.focused_value(), Some(&"rome"));
    }

    #[test]
    fn test_trigger_shows_selected_label() {
        let city = select()
            .option("rome", "Rome")
            .option("vienna", "Vienna")
            .value("vienna")
            .build();

        let view = city.snapshot();
        assert_eq!(view.trigger_label.as_deref(), Some("Vienna"));
        assert!(!view.shows_placeholder);
    }

    #[test]
    fn test_trigger_shows_placeholder_when_unselected() {
        let city = select()
            .placeholder("Select a City")
            .option("rome", "Rome")
            .option("vienna", "Vienna")
            .build();

        let view = city.snapshot();
        assert_eq!(view.selected_value, None);
        assert_eq!(view.trigger_label.as_deref(), Some("Select a City"));
        assert!(view.shows_placeholder);
        // Keyboard navigation still has a starting point.
        assert_eq!(view.focused_value, Some("rome"));
    }

    #[test]
    fn test_trigger_shows_falsy_selected_label() {
        let numbers = select().option(0, "Zero").option(1, "One").value(0).build();

        let view = numbers.snapshot();
        assert_eq!(view.trigger_label.as_deref(), Some("Zero"));
        assert!(!view.shows_placeholder);
    }

    #[test]
    fn test_single_option_select() {
        let city = select().option("rome", "Rome").build();
        assert_eq!(city.snapshot().trigger_label.as_deref(), Some("Rome"));
    }

    #[test]
    fn test_rows_carry_selected_and_focused_flags() {
        let mut city = select()
            .separator("Italy")
            .option("rome", "Rome")
            .separator("Austria")
            .option("vienna", "Vienna")
            .build();

        city.handle_key("ArrowDown"); // open
        city.handle_key("ArrowDown"); // focus vienna

        let view = city.snapshot();
        assert_eq!(view.rows.len(), 4);
        assert_eq!(
            view.rows[0],
            SelectRow::Separator {
                label: "Italy".into()
            }
        );
        assert_eq!(
            view.rows[1],
            SelectRow::Option {
                value: "rome",
                label: "Rome".into(),
                selected: true,
                focused: false,
            }
        );
        assert_eq!(
            view.rows[3],
            SelectRow::Option {
                value: "vienna",
                label: "Vienna".into(),
                selected: false,
                focused: true,
            }
        );
    }

    #[test]
    fn test_mixed_singles_and_groups_keep_order() {
        let extra = vec![
            SelectChild::option("rome", "Rome"),
            SelectChild::option("vienna", "Vienna"),
        ];
        let city = select()
            .placeholder("Select a City")
            .option("boston", "Boston")
            .group(extra)
            .option("newyork", "New York")
            .build();

        let labels: Vec<String> = city
            .snapshot()
            .rows
            .iter()
            .filter_map(|row| match row {
                SelectRow::Option { label, .. } => Some(label.clone()),
                SelectRow::Separator { .. } => None,
            })
            .collect();
        assert_eq!(labels, vec!["Boston", "Rome", "Vienna", "New York"]);
    }

    #[test]
    fn test_style_passthrough_survives_events() {
        #[derive(Debug, PartialEq)]
        struct Cursor(&'static str);

        let mut city = select()
            .option("rome", "Rome")
            .style(Cursor("cross"))
            .build();
        city.trigger_press();

        let view = city.snapshot();
        let style = view.style.expect("style is carried through");
        assert_eq!(style.downcast_ref::<Cursor>(), Some(&Cursor("cross")));
    }

    #[test]
    fn test_set_children_reflattens() {
        let mut city = select()
            .option("rome", "Rome")
            .option("vienna", "Vienna")
            .build();

        city.set_children(vec![
            SelectChild::option("rome", "Rome"),
            SelectChild::option("berlin", "Berlin"),
        ]);
        let view = city.snapshot();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.selected_value, Some("rome"));
    }
}
