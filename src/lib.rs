pub mod error;
pub mod model;
pub mod rest;

pub mod prelude {
    pub use crate::error::ApiError;
    pub use crate::model::StreamingEndpointCacheControl;
    pub use crate::rest::StreamingEndpointCacheControlData;
}
