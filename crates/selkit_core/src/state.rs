//! The selection state machine
//!
//! [`SelectCore`] owns the three pieces of interaction state —
//! `selected_value`, `focused_value`, `is_open` — together with the
//! flattened children and the active value-source mode. All transitions
//! run synchronously inside the handling of one input event; a commit
//! fully completes (state update plus notifications) before the next
//! event is looked at.
//!
//! Two explicit entry points cover the configuration lifecycle:
//! [`SelectCore::new`] derives initial state, and
//! [`SelectCore::reconcile`] adopts updated props. Only the controlled
//! value and the link's value are re-read on reconcile; a changed
//! `default_value` never touches an already initialized selection.

use std::fmt;

use tracing::debug;

use crate::children::FlattenedChildren;
use crate::source::{self, SelectProps, SourceMode};

/// Focus movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward the end of the option sequence, wrapping to the first.
    Next,
    /// Toward the start of the option sequence, wrapping to the last.
    Previous,
}

/// The externally observable interaction state of a select.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState<V> {
    /// The committed value. `None` only while a placeholder stands in.
    pub selected_value: Option<V>,
    /// The option keyboard navigation currently points at. `None` only
    /// for an empty option sequence.
    pub focused_value: Option<V>,
    /// Whether the option menu is showing.
    pub is_open: bool,
}

/// The selection/focus state machine behind a select widget.
pub struct SelectCore<V> {
    children: FlattenedChildren<V>,
    props: SelectProps<V>,
    mode: SourceMode,
    state: SelectionState<V>,
}

impl<V: fmt::Debug> fmt::Debug for SelectCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectCore")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .finish()
    }
}

impl<V> SelectCore<V>
where
    V: Clone + PartialEq + fmt::Debug,
{
    /// Initialize state from configuration: resolve the selected value
    /// by source precedence and point focus at it (or at the first
    /// option when nothing is selected). The menu starts closed.
    pub fn new(props: SelectProps<V>, children: FlattenedChildren<V>) -> Self {
        let selected = source::resolve_value(&props, &children);
        let focused = source::focus_for(&selected, &children);
        let mode = SourceMode::of(&props);
        debug!(?mode, selected = ?selected, "select initialized");

        Self {
            children,
            props,
            mode,
            state: SelectionState {
                selected_value: selected,
                focused_value: focused,
                is_open: false,
            },
        }
    }

    /// Reconcile state against updated configuration.
    ///
    /// Selection is re-derived only when the new props carry an
    /// external source (controlled value or value link); an updated
    /// `default_value` is ignored forever after construction — the
    /// select owns its value once seeded.
    pub fn reconcile(&mut self, props: SelectProps<V>) {
        let mode = SourceMode::of(&props);
        match mode {
            SourceMode::Controlled => {
                self.adopt(props.value.clone());
            }
            SourceMode::Linked => {
                let value = props
                    .value_link
                    .as_ref()
                    .and_then(|link| link.value.clone());
                self.adopt(value);
            }
            SourceMode::Default | SourceMode::Auto => {}
        }
        self.mode = mode;
        self.props = props;
    }

    /// Replace the flattened children after the declarative input
    /// changed. The old sequence is discarded atomically; selection and
    /// focus are left as they are.
    pub fn set_children(&mut self, children: FlattenedChildren<V>) {
        self.children = children;
    }

    fn adopt(&mut self, value: Option<V>) {
        if self.state.selected_value != value {
            debug!(new = ?value, "external value adopted");
        }
        self.state.focused_value = source::focus_for(&value, &self.children);
        self.state.selected_value = value;
    }

    /// Show the option menu. Idempotent.
    pub fn open(&mut self) {
        if !self.state.is_open {
            debug!("select opened");
            self.state.is_open = true;
        }
    }

    /// Hide the option menu. Idempotent.
    pub fn close(&mut self) {
        if self.state.is_open {
            debug!("select closed");
            self.state.is_open = false;
        }
    }

    /// Trigger activation: open when closed, close when open.
    pub fn toggle(&mut self) {
        if self.state.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Move focus through the option sequence, wrapping at both ends.
    ///
    /// With no current focus, `Next` lands on the first option and
    /// `Previous` on the last. Works while closed too, so a keyboard
    /// user can change focus without the menu showing. No-op when there
    /// are no options.
    pub fn move_focus(&mut self, direction: Direction) {
        let len = self.children.len();
        if len == 0 {
            return;
        }

        let current = self
            .state
            .focused_value
            .as_ref()
            .and_then(|value| self.children.index_of(value));
        let index = match (current, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => len - 1,
            (Some(i), Direction::Next) => (i + 1) % len,
            (Some(i), Direction::Previous) => (i + len - 1) % len,
        };

        let value = self.children.options()[index].value.clone();
        debug!(?direction, focused = ?value, "focus moved");
        self.state.focused_value = Some(value);
    }

    /// Finalize a selection.
    ///
    /// Closes the menu, persists the value locally unless an external
    /// source (controlled value or value link) owns it, and notifies
    /// collaborators in order: the link's change request first, then
    /// `on_update` — each only when configured, both with the same
    /// value, both regardless of whether local state changed.
    ///
    /// Membership of `value` in the option sequence is not validated;
    /// a stale value is passed through to collaborators as given.
    pub fn commit(&mut self, value: V) {
        debug!(?value, mode = ?self.mode, "commit");
        if !self.mode.is_external() {
            self.state.selected_value = Some(value.clone());
            self.state.focused_value = Some(value.clone());
        }
        self.state.is_open = false;

        if let Some(link) = &self.props.value_link {
            link.request_change(&value);
        }
        if let Some(on_update) = &self.props.on_update {
            on_update(&value);
        }
    }

    /// Commit the currently focused option. No-op when nothing is
    /// focused, which only happens with an empty option sequence.
    pub fn commit_focused(&mut self) {
        if let Some(value) = self.state.focused_value.clone() {
            self.commit(value);
        }
    }

    /// The full interaction state.
    pub fn state(&self) -> &SelectionState<V> {
        &self.state
    }

    /// The committed value, if any.
    pub fn selected_value(&self) -> Option<&V> {
        self.state.selected_value.as_ref()
    }

    /// The focused option value, if any.
    pub fn focused_value(&self) -> Option<&V> {
        self.state.focused_value.as_ref()
    }

    /// Whether the menu is showing.
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// The flattened children backing navigation and display.
    pub fn children(&self) -> &FlattenedChildren<V> {
        &self.children
    }

    /// The active value-source mode.
    pub fn mode(&self) -> SourceMode {
        self.mode
    }
}
