// Domain layer: the course aggregate, parse diagnostics and the ports the pipeline talks through.

pub mod model;
pub mod ports;
