// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod chart;
mod general;

pub use self::chart::Chart;
pub use self::general::General;

use crate::{Error, VERSION};

use std::process;

use clap::{App, Arg, ArgMatches};
use log::Level;
use serde_derive::*;

pub const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
    #[serde(default)]
    chart: Chart,
}

/// The command line interface.
pub fn app() -> App<'static, 'static> {
    App::new(NAME)
        .version(VERSION)
        .author("Brian Martin <bmartin@twitter.com>")
        .about("Plot active flow counts with and without redistribution")
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("TOML config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("treated")
                .long("treated")
                .value_name("FILE")
                .help("Flow counts with redistribution")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("baseline")
                .long("baseline")
                .value_name("FILE")
                .help("Flow counts without redistribution")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .value_name("FILE")
                .help("PDF file to write")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("no-show")
                .long("no-show")
                .help("Do not open the chart in a viewer once written"),
        )
        .arg(
            Arg::with_name("legend")
                .long("legend")
                .help("Draw the series legend"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Increase verbosity by one level. Can be used more than once")
                .multiple(true),
        )
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Config {
        let matches = app().get_matches();
        Config::from_matches(&matches).unwrap_or_else(|e| {
            println!("ERROR: {}", e);
            process::exit(1);
        })
    }

    /// Build the config from parsed arguments, loading the config file first
    /// when one is given.
    pub fn from_matches(matches: &ArgMatches) -> Result<Config, Error> {
        let mut config = if let Some(file) = matches.value_of("config") {
            Config::load_from_file(file)?
        } else {
            Default::default()
        };

        if let Some(treated) = matches.value_of("treated") {
            config.general.set_treated(treated.to_string());
        }

        if let Some(baseline) = matches.value_of("baseline") {
            config.general.set_baseline(baseline.to_string());
        }

        if let Some(output) = matches.value_of("output") {
            config.general.set_output(output.to_string());
        }

        if matches.is_present("no-show") {
            config.general.set_show(false);
        }

        if matches.is_present("legend") {
            config.chart.set_legend(true);
        }

        match matches.occurrences_of("verbose") {
            0 => {}
            1 => config.general.set_logging(Level::Debug),
            _ => config.general.set_logging(Level::Trace),
        }

        Ok(config)
    }

    pub fn load_from_file(file: &str) -> Result<Config, Error> {
        let content = std::fs::read_to_string(file).map_err(|source| Error::Io {
            path: file.to_string(),
            source,
        })?;
        Config::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Config, Error> {
        let config: Config = toml::from_str(content)?;
        config.chart.validate()?;
        Ok(config)
    }

    pub fn general(&self) -> &General {
        &self.general
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    /// the "with redistribution" input
    pub fn treated(&self) -> &str {
        self.general.treated()
    }

    /// the "without redistribution" input
    pub fn baseline(&self) -> &str {
        self.general.baseline()
    }

    pub fn output(&self) -> &str {
        self.general.output()
    }

    pub fn show(&self) -> bool {
        self.general.show()
    }

    pub fn logging(&self) -> Level {
        self.general.logging()
    }

    pub fn print(&self) {
        info!("-----");
        info!("Config: Treated: {}", self.treated());
        info!("Config: Baseline: {}", self.baseline());
        info!("Config: Output: {} Show: {}", self.output(), self.show());
        let (width, height) = self.chart.size();
        let (x_major, x_minor) = self.chart.x_ticks();
        let (y_major, y_minor) = self.chart.y_ticks();
        info!(
            "Config: Chart: {}x{} Font: {} Legend: {}",
            width,
            height,
            self.chart.font_size(),
            self.chart.legend(),
        );
        info!(
            "Config: Ticks: X: {}/{} Y: {}/{}",
            x_major, x_minor, y_major, y_minor,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec![NAME];
        argv.extend_from_slice(args);
        Config::from_matches(&app().get_matches_from(argv)).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.treated(), "./output.txt");
        assert_eq!(config.baseline(), "./output_original.txt");
        assert_eq!(config.output(), "active_flows.pdf");
        assert!(config.show());
        assert_eq!(config.logging(), Level::Info);
        assert_eq!(config.chart().size(), (1000, 600));
        assert_eq!(config.chart().x_ticks(), (20, 10));
        assert_eq!(config.chart().y_ticks(), (4000, 2000));
        assert!(!config.chart().legend());
    }

    #[test]
    fn command_line_overrides() {
        let config = parse(&[
            "--treated",
            "a.txt",
            "--baseline",
            "b.txt",
            "--output",
            "c.pdf",
            "--no-show",
            "--legend",
            "-vv",
        ]);
        assert_eq!(config.treated(), "a.txt");
        assert_eq!(config.baseline(), "b.txt");
        assert_eq!(config.output(), "c.pdf");
        assert!(!config.show());
        assert!(config.chart().legend());
        assert_eq!(config.logging(), Level::Trace);
    }

    #[test]
    fn toml_partial() {
        let config = Config::load_from_str(
            r#"
            [general]
            output = "flows.pdf"
            logging = "debug"

            [chart]
            y_major = 5000
            y_minor = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.output(), "flows.pdf");
        assert_eq!(config.treated(), "./output.txt");
        assert_eq!(config.logging(), Level::Debug);
        assert_eq!(config.chart().y_ticks(), (5000, 1000));
        assert_eq!(config.chart().x_ticks(), (20, 10));
    }

    #[test]
    fn toml_unknown_field() {
        assert!(matches!(
            Config::load_from_str("[general]\nthreads = 4\n"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn toml_zero_step() {
        match Config::load_from_str("[chart]\nx_minor = 0\n") {
            Err(Error::Config(reason)) => assert_eq!(reason, "chart.x_minor must be non-zero"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_config_file() {
        assert!(matches!(
            Config::load_from_file("/nonexistent/active_flows.toml"),
            Err(Error::Io { .. })
        ));
    }
}
