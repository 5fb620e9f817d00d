mod geo_data_port;
mod navigation_port;

pub use geo_data_port::GeoDataPort;
pub use navigation_port::NavigationPort;
