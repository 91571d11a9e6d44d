use std::time::Duration;

/// Cache control setting of a streaming endpoint, as configured by callers.
///
/// An unset `max_age` means the endpoint has no explicit cache policy; it is
/// distinct from a zero-duration one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamingEndpointCacheControl {
    max_age: Option<Duration>,
}

impl StreamingEndpointCacheControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Maximum age of the cache, if one has been configured.
    pub fn max_age(&self) -> Option<Duration> {
        self.max_age
    }
}
