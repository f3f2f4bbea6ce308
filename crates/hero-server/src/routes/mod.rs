pub mod sessions;
pub mod shared;
