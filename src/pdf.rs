// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Error;

use svg2pdf::usvg;
use svg2pdf::{ConversionOptions, PageOptions};

use std::path::Path;

/// Convert an SVG document into a single page PDF of the same size.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, Error> {
    let mut options = usvg::Options::default();
    // chart text is emitted as <text>, which needs real fonts to survive
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)?;
    svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|e| Error::Pdf(format!("{:?}", e)))
}

pub fn save<P: AsRef<Path>>(path: P, pdf: &[u8]) -> Result<(), Error> {
    let path = path.as_ref();
    std::fs::write(path, pdf).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("saved {} ({} bytes)", path.display(), pdf.len());
    Ok(())
}
