//! A deliberately small HTTP/1.1 client over the same transport abstraction
//! the TLS layer uses. One request, one response, no chunked encoding, no
//! keep-alive.

pub use request::{Method, Request};
pub use response::Response;

mod request;
mod response;
