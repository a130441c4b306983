//! Opaque style passthrough
//!
//! The state core does not interpret styling. Hosts may attach
//! arbitrary styling data to a select; it is carried untouched and
//! handed back with every snapshot for the render layer to downcast.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Shared handle to host-owned styling data.
#[derive(Clone)]
pub struct StyleHandle(Arc<dyn Any + Send + Sync>);

impl StyleHandle {
    /// Wrap a style value of any host-defined type.
    pub fn new<T: Any + Send + Sync>(style: T) -> Self {
        Self(Arc::new(style))
    }

    /// Borrow the style back as its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for StyleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StyleHandle(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downcast_round_trip() {
        let handle = StyleHandle::new(("cursor", "cross"));
        assert_eq!(
            handle.downcast_ref::<(&str, &str)>(),
            Some(&("cursor", "cross"))
        );
        assert!(handle.downcast_ref::<String>().is_none());
    }
}
