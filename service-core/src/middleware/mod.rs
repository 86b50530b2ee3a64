pub mod cors;
pub mod tracing;

pub use cors::permissive_cors;
pub use self::tracing::{REQUEST_ID_HEADER, make_request_span, request_id_middleware};
