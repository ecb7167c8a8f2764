pub mod application;
pub mod cli;
pub mod demos;
pub mod domain;
pub mod game;
pub mod io;
pub mod logging;
pub mod storage;

pub use domain::*;
pub use storage::Store;
