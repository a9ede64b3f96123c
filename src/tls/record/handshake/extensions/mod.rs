pub use alpn::ProtocolName;
pub use extension::{extension_type, Extension};
pub use server_name::ServerName;

mod alpn;
mod extension;
mod server_name;
mod signature_algorithms;
