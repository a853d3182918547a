// Domain layer: backend records, request payloads and the ports the UI plugs into.

pub mod model;
pub mod ports;
