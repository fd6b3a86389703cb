//! Structured trace events shared by the endorser crates.
//!
//! Events are emitted at TRACE level as `endorser_trace:<event>:<json>` so that
//! a log scraper can follow cycles without parsing free text.

#[doc(hidden)]
pub use serde_json as __serde_json;
#[doc(hidden)]
pub use tracing as __tracing;

#[macro_export]
macro_rules! endorser_trace {
    ($evt:expr, $params:tt) => {
        $crate::__tracing::trace!(
            "endorser_trace:{}:{}",
            $evt,
            $crate::__serde_json::json!($params)
        );
    };
}
