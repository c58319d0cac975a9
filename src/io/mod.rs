pub mod config_io;

pub use config_io::*;
