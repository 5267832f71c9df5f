pub mod clock;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod track;
pub mod viewer;
