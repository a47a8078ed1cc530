// Domain layer: shape data holders and the capability traits they are measured through.

pub mod model;
pub mod ports;
