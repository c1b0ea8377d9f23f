pub mod time;
pub mod transform;
pub mod viewport;
