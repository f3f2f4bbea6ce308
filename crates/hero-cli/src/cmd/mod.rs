pub mod advance;
pub mod back;
pub mod begin;
pub mod choose;
pub mod enter;
pub mod export;
pub mod gates;
pub mod restart;
pub mod reveal;
pub mod serve;
pub mod share;
pub mod status;
pub mod view;
