use tracing::{Span, field};

use super::TraceId;

/// Create a root span for a long-lived task (feed loop, view loop).
pub fn root_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::info_span!(
        "root",
        name = %name,
        trace_id = %trace_id.as_str(),
        tick = field::Empty
    )
}

/// Create a child span (inherits trace_id from the entered parent).
pub fn child_span(name: &'static str) -> Span {
    tracing::debug_span!("child", name = %name, tick = field::Empty)
}
