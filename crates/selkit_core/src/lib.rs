//! selkit core runtime
//!
//! This crate provides the headless foundation for a select/dropdown
//! widget:
//!
//! - **Declarative children**: a tagged union of options, placeholders,
//!   separators and nested groups, flattened into a navigable sequence
//! - **Value resolution**: controlled / linked / uncontrolled value
//!   sources resolved by fixed precedence into a single source mode
//! - **Selection state machine**: open/close, focus movement with
//!   wrap-around, and commit with external change notification
//! - **Event interpreter**: a closed set of key tokens and pointer
//!   phases mapped onto state-machine transitions
//!
//! Rendering is deliberately out of scope. A rendering layer reads the
//! machine's state after each event and draws whatever it likes; it
//! never mutates the state directly.
//!
//! # Example
//!
//! ```
//! use selkit_core::{FlattenedChildren, SelectChild, SelectCore, SelectProps};
//!
//! let children = FlattenedChildren::from_children(vec![
//!     SelectChild::option("rome", "Rome"),
//!     SelectChild::option("vienna", "Vienna"),
//! ]);
//! let mut select = SelectCore::new(SelectProps::default(), children);
//!
//! // No value given: the first option is selected and focused.
//! assert_eq!(select.selected_value(), Some(&"rome"));
//!
//! select.open();
//! select.move_focus(selkit_core::Direction::Next);
//! select.commit_focused();
//! assert_eq!(select.selected_value(), Some(&"vienna"));
//! assert!(!select.is_open());
//! ```

pub mod children;
pub mod event;
pub mod source;
pub mod state;

pub use children::{DisplayEntry, FlattenedChildren, OptionDescriptor, SelectChild};
pub use event::{KeyToken, PointerPhase, SelectEvent, UnknownKey};
pub use source::{SelectProps, SourceMode, UpdateCallback, ValueLink};
pub use state::{Direction, SelectCore, SelectionState};
