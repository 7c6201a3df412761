// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::Path;
use std::process::Command;

/// Open `path` in the platform's default viewer. The viewer is not waited
/// on, and failing to start one only produces a warning.
pub fn show<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    match viewer(path).spawn() {
        Ok(_) => info!("opened {}", path.display()),
        Err(e) => warn!("unable to open a viewer for {}: {}", path.display(), e),
    }
}

#[cfg(target_os = "macos")]
fn viewer(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(&["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_receives_path() {
        let command = viewer(Path::new("active_flows.pdf"));
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.last().copied(), Some(Path::new("active_flows.pdf").as_os_str()));
    }
}
