pub mod config;
pub mod decode;
pub mod encode;
pub mod entities;
pub mod error;
pub mod surrogate;
pub mod types;
pub mod xml;

pub use config::*;
pub use decode::*;
pub use encode::*;
pub use error::*;
pub use types::*;
