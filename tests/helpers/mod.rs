#![allow(unused_imports, dead_code)]
pub mod clocks;
pub mod test_db;

pub use clocks::*;
pub use test_db::*;
