pub mod config;
pub mod controller;
pub mod derive;
pub mod error;
pub mod export;
pub mod flow;
pub mod gates;
pub mod hero;
pub mod io;
pub mod paths;
pub mod profile;
pub mod session;
pub mod share;
pub mod store;
pub mod types;

pub use error::{HeroError, Result};
