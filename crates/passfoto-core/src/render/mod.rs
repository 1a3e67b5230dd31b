pub mod extract;
pub mod sheet;

pub use extract::extract;
pub use sheet::tile;
