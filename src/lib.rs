// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod chart;
pub mod config;
pub mod display;
mod error;
pub mod logger;
pub mod palette;
pub mod pdf;
pub mod scales;
pub mod series;

pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::logger::Logger;
pub use crate::series::SwitchSeries;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
