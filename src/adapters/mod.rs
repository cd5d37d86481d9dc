// Adapters layer: the HTTP surface and the listener that serves it.

pub mod http;
pub mod server;
