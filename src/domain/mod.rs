// Domain layer: value records and ports (interfaces) for external
// collaborators. No HTTP or framework types here.

pub mod model;
pub mod ports;
