// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std/serde/chrono where the model needs them.

pub mod model;
pub mod ports;
