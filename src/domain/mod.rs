pub mod model;
pub mod ports;
