// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

use active_flows::*;

fn main() {
    let config = Config::new();

    Logger::new()
        .label("active_flows")
        .level(config.logging())
        .init()
        .expect("Failed to initialize logger");

    info!("active-flows {} initializing...", VERSION);

    config.print();

    let treated = series::extract(config.treated()).unwrap_or_else(|e| fatal!("{}", e));
    let baseline = series::extract(config.baseline()).unwrap_or_else(|e| fatal!("{}", e));

    let svg = chart::render(config.chart(), &treated, &baseline)
        .unwrap_or_else(|e| fatal!("{}", e));
    let pdf = pdf::svg_to_pdf(&svg).unwrap_or_else(|e| fatal!("{}", e));

    pdf::save(config.output(), &pdf).unwrap_or_else(|e| fatal!("{}", e));

    if config.show() {
        display::show(config.output());
    }
}
