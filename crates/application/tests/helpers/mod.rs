#![allow(dead_code)]
pub mod mocks;

pub use mocks::*;
