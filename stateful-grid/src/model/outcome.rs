//! src/model/outcome.rs
//! ============================================================================
//! Value objects describing how an asynchronous load ended.

use compact_str::CompactString;
use thiserror::Error;

/// Opaque error payload supplied by the host.
///
/// The controller only cares whether one is present; the message is what
/// the default error views display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    pub domain: CompactString,
    pub code: i64,
    pub message: CompactString,
}

impl LoadError {
    pub fn new(
        domain: impl Into<CompactString>,
        code: i64,
        message: impl Into<CompactString>,
    ) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: message.into(),
        }
    }
}

/// Result of an initial load or a pull-to-refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub is_empty: bool,
    pub error: Option<LoadError>,
}

impl LoadOutcome {
    /// Items were loaded.
    #[must_use]
    pub const fn loaded() -> Self {
        Self {
            is_empty: false,
            error: None,
        }
    }

    /// Nothing to show, no error.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            is_empty: true,
            error: None,
        }
    }

    /// Nothing to show because of `error`.
    #[must_use]
    pub const fn failed(error: LoadError) -> Self {
        Self {
            is_empty: true,
            error: Some(error),
        }
    }
}

/// Result of a page-more load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagedOutcome {
    pub can_load_more: bool,
    pub error: Option<LoadError>,
    /// Whether `error` should interrupt the UI with a footer
    pub show_error: bool,
}

impl PagedOutcome {
    #[must_use]
    pub const fn more_available() -> Self {
        Self {
            can_load_more: true,
            error: None,
            show_error: false,
        }
    }

    #[must_use]
    pub const fn exhausted() -> Self {
        Self {
            can_load_more: false,
            error: None,
            show_error: false,
        }
    }

    #[must_use]
    pub const fn failed(error: LoadError, show_error: bool) -> Self {
        Self {
            can_load_more: true,
            error: Some(error),
            show_error,
        }
    }

    /// Footer error is only shown when the host asked for it.
    #[inline]
    pub fn visible_error(&self) -> Option<&LoadError> {
        self.error.as_ref().filter(|_| self.show_error)
    }
}
