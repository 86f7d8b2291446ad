pub mod decode;
pub mod pattern;
pub mod raster;
pub mod snapshot;
