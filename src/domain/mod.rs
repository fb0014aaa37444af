// Domain layer: value types and the seams the calculators are built against.

pub mod model;
pub mod ports;
