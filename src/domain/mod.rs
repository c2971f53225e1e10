// Domain layer: arity, fragment kinds and the template port.

pub mod model;
pub mod ports;
