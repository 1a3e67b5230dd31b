pub mod consts;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod io;
pub mod profile;
pub mod raster;
pub mod region;
pub mod render;
pub mod session;
