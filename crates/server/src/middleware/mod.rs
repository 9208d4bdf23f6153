pub mod access_gate;
pub mod request_id;

pub use access_gate::{AUTH_TOKEN_COOKIE, Disposition, access_gate, evaluate, has_auth_token};
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
