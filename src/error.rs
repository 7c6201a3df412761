// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{name}: {source}")]
    Csv {
        name: String,
        #[source]
        source: csv::Error,
    },
    #[error("{name}:{line}: {reason}")]
    Record {
        name: String,
        line: u64,
        reason: String,
    },
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("failed to draw chart: {0}")]
    Draw(String),
    #[error("failed to parse rendered chart: {0}")]
    Svg(#[from] svg2pdf::usvg::Error),
    #[error("failed to convert chart to pdf: {0}")]
    Pdf(String),
}
