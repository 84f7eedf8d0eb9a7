// Adapters layer: concrete implementations of the domain ports for
// external systems (http sink, console-backed form surface).

pub mod console;
pub mod http;
