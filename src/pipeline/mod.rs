pub mod stream;
pub mod transform;
