//! Per-request context injected by middleware.

/// Transaction id for the current request, propagated to both upstream calls.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
}
