// Domain layer: crawl records and the ports the crawler talks through.

pub mod model;
pub mod ports;
