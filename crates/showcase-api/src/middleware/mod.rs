pub mod error_details;
pub mod request_id;
pub mod security_headers;

pub use error_details::{error_details_middleware, ErrorDetailsConfig};
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use security_headers::{security_headers_middleware, SecurityHeadersConfig};
