// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::*;

use log::Level;

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(default = "default_treated")]
    treated: String,
    #[serde(default = "default_baseline")]
    baseline: String,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_show")]
    show: bool,
    #[serde(with = "LevelDef")]
    #[serde(default = "default_logging_level")]
    logging: Level,
}

impl General {
    pub fn treated(&self) -> &str {
        &self.treated
    }

    pub fn set_treated(&mut self, file: String) {
        self.treated = file;
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn set_baseline(&mut self, file: String) {
        self.baseline = file;
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn set_output(&mut self, file: String) {
        self.output = file;
    }

    pub fn show(&self) -> bool {
        self.show
    }

    pub fn set_show(&mut self, show: bool) {
        self.show = show;
    }

    pub fn logging(&self) -> Level {
        self.logging
    }

    pub fn set_logging(&mut self, level: Level) {
        self.logging = level;
    }
}

impl Default for General {
    fn default() -> General {
        General {
            treated: default_treated(),
            baseline: default_baseline(),
            output: default_output(),
            show: default_show(),
            logging: default_logging_level(),
        }
    }
}

fn default_treated() -> String {
    "./output.txt".to_string()
}

fn default_baseline() -> String {
    "./output_original.txt".to_string()
}

fn default_output() -> String {
    "active_flows.pdf".to_string()
}

fn default_show() -> bool {
    true
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
#[serde(remote = "Level")]
#[serde(deny_unknown_fields)]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn default_logging_level() -> Level {
    Level::Info
}
