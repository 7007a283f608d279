// Domain layer: value objects and the lookup ports the calculator depends on.

pub mod model;
pub mod ports;
