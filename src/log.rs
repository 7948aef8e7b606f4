//! Logging for layout and autoscale decisions.
//!
//! With the `tracing` feature the macros are `tracing`'s own; without it
//! they expand to nothing. Soft layout problems go through [`reported`] so
//! every [`LayoutWarning`] is logged the same way before it is returned.

use crate::errors::LayoutWarning;

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};

/// Log a layout warning and hand it back.
pub(crate) fn reported(warning: LayoutWarning) -> LayoutWarning {
    warn!(%warning, "layout degraded");
    warning
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_warning_is_unchanged() {
        let warning = LayoutWarning::TextOverflow {
            text: "Race Times".into(),
            estimated: 120.0,
            allotted: 50.0,
        };
        assert_eq!(reported(warning.clone()), warning);
    }
}
