// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::*;

/// Chart layout. Sizes are in pixels of the rendered page, axis steps in
/// data units.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chart {
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    #[serde(default = "default_x_major")]
    x_major: u64,
    #[serde(default = "default_x_minor")]
    x_minor: u64,
    #[serde(default = "default_y_major")]
    y_major: u64,
    #[serde(default = "default_y_minor")]
    y_minor: u64,
    #[serde(default = "default_font_size")]
    font_size: u32,
    #[serde(default = "default_line_width")]
    line_width: u32,
    #[serde(default)]
    legend: bool,
    #[serde(default = "default_x_desc")]
    x_desc: String,
    #[serde(default = "default_y_desc")]
    y_desc: String,
}

impl Chart {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn x_ticks(&self) -> (u64, u64) {
        (self.x_major, self.x_minor)
    }

    pub fn y_ticks(&self) -> (u64, u64) {
        (self.y_major, self.y_minor)
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    pub fn legend(&self) -> bool {
        self.legend
    }

    pub fn set_legend(&mut self, enabled: bool) {
        self.legend = enabled;
    }

    pub fn x_desc(&self) -> &str {
        &self.x_desc
    }

    pub fn y_desc(&self) -> &str {
        &self.y_desc
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        for (name, value) in &[
            ("width", self.width as u64),
            ("height", self.height as u64),
            ("x_major", self.x_major),
            ("x_minor", self.x_minor),
            ("y_major", self.y_major),
            ("y_minor", self.y_minor),
            ("font_size", self.font_size as u64),
            ("line_width", self.line_width as u64),
        ] {
            if *value == 0 {
                return Err(Error::Config(format!("chart.{} must be non-zero", name)));
            }
        }
        Ok(())
    }
}

impl Default for Chart {
    fn default() -> Chart {
        Chart {
            width: default_width(),
            height: default_height(),
            x_major: default_x_major(),
            x_minor: default_x_minor(),
            y_major: default_y_major(),
            y_minor: default_y_minor(),
            font_size: default_font_size(),
            line_width: default_line_width(),
            legend: false,
            x_desc: default_x_desc(),
            y_desc: default_y_desc(),
        }
    }
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

fn default_x_major() -> u64 {
    20
}

fn default_x_minor() -> u64 {
    10
}

fn default_y_major() -> u64 {
    4000
}

fn default_y_minor() -> u64 {
    2000
}

fn default_font_size() -> u32 {
    24
}

fn default_line_width() -> u32 {
    2
}

fn default_x_desc() -> String {
    "Time (s)".to_string()
}

fn default_y_desc() -> String {
    "Active Flow Count".to_string()
}
