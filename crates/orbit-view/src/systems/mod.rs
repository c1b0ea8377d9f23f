pub mod frame;
pub mod orbit;
pub mod rng;
#[cfg(feature = "vectors")]
pub mod vector;
