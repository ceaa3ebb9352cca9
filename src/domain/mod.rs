// Domain layer: records, conversion options and ports. No I/O lives here.

pub mod model;
pub mod ports;
