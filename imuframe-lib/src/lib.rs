#![doc = include_str!("../README.md")]

mod error;

pub mod framing;
pub mod record;
pub mod report;

pub use error::{Error, Result};
