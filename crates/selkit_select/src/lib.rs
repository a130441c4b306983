//! # selkit Select component
//!
//! The component-facing layer over [`selkit_core`]: a fluent builder
//! for describing a select declaratively, event entry points for the
//! host environment, and a read-only [`SelectSnapshot`] the rendering
//! layer draws from after every event.
//!
//! ## Example
//!
//! ```
//! use selkit_select::select;
//!
//! let mut city = select()
//!     .placeholder("Select a City")
//!     .option("rome", "Rome")
//!     .option("vienna", "Vienna")
//!     .on_update(|value| println!("selected: {value}"))
//!     .build();
//!
//! city.handle_key("ArrowDown"); // opens
//! city.handle_key("ArrowDown"); // focuses the next option
//! city.handle_key("Enter");     // commits and closes
//!
//! let view = city.snapshot();
//! assert_eq!(view.selected_value, Some("vienna"));
//! assert!(!view.is_open);
//! ```
//!
//! The snapshot is a plain value: the render layer never mutates select
//! state directly, it only requests transitions through the event entry
//! points.

pub mod select;
pub mod style;

pub use select::{select, Select, SelectBuilder, SelectRow, SelectSnapshot};
pub use style::StyleHandle;

// The core vocabulary travels with the component API.
pub use selkit_core::{
    Direction, KeyToken, OptionDescriptor, PointerPhase, SelectChild, SelectEvent, SelectProps,
    SourceMode, ValueLink,
};
