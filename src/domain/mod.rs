// Domain layer: run settings, run outcome and the output port.

pub mod model;
pub mod ports;
