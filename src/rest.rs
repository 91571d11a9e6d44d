use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::model::StreamingEndpointCacheControl;

/// Wire descriptor for a streaming endpoint's cache control block.
///
/// Field names must match the REST metadata, and an unset max-age is omitted
/// from the payload entirely rather than sent as 0.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamingEndpointCacheControlData {
    /// Maximum age of the cache, in whole seconds.
    #[serde(rename = "MaxAge", skip_serializing_if = "Option::is_none", default)]
    pub max_age: Option<u64>,
}

impl StreamingEndpointCacheControlData {
    /// Creates an empty descriptor, to be populated by a deserializer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a descriptor from a domain cache control setting.
    ///
    /// `None` means the caller supplied no setting object at all and fails
    /// with [`ApiError::InvalidArgument`]. A setting whose max-age is unset
    /// is valid and yields an empty descriptor. A present duration is
    /// converted to whole seconds, truncating any fractional part toward
    /// zero.
    pub fn from_cache_control(
        cache_control: Option<&StreamingEndpointCacheControl>,
    ) -> Result<Self, ApiError> {
        let cache_control = cache_control.ok_or_else(|| {
            ApiError::InvalidArgument("cache_control must not be None".to_string())
        })?;

        let max_age = cache_control.max_age().map(|age| age.as_secs());
        debug!(?max_age, "Converted cache control setting to REST data");
        Ok(Self { max_age })
    }

    /// Converts a descriptor back into a domain cache control setting.
    ///
    /// Unlike [`from_cache_control`](Self::from_cache_control), this
    /// direction is total: an absent descriptor maps to `None` (the server
    /// returned no cache control block), and an empty descriptor maps to a
    /// setting with its max-age unset.
    pub fn into_cache_control(
        data: Option<&StreamingEndpointCacheControlData>,
    ) -> Option<StreamingEndpointCacheControl> {
        let data = data?;
        let mut cache_control = StreamingEndpointCacheControl::new();
        if let Some(seconds) = data.max_age {
            cache_control = cache_control.with_max_age(Duration::from_secs(seconds));
        }
        debug!(max_age = ?data.max_age, "Converted REST data to cache control setting");
        Some(cache_control)
    }
}
