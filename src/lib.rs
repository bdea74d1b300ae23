#![allow(clippy::module_name_repetitions)]

pub mod histogram;
pub mod params;

mod core;
mod utils;
