pub use record::readable_from_stream::ReadableFromStream;
pub use record::writable_to_sink::{Sink, WritableToSink};

pub mod connection;
pub mod connection_state;
pub mod error;
pub mod record;

#[cfg(test)]
mod tests;
