use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};

use crate::config::Config;
use crate::{Error, Result};

/// Desktop Bluetooth settings, tried in order.
pub const DEFAULT_LAUNCHERS: &[&[&str]] = &[
    &["blueman-manager"],
    &["gnome-control-center", "bluetooth"],
    &["systemsettings", "kcm_bluetooth"],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub program: String,
    pub args:    Vec<String>,
}

impl Launcher {
    pub fn from_command<S: AsRef<str>>(command: &[S]) -> Option<Self> {
        let (program, args) = command.split_first()?;

        Some(Self {
            program: program.as_ref().to_owned(),
            args:    args.iter().map(|a| a.as_ref().to_owned()).collect(),
        })
    }
}

pub fn launchers(config: &Config) -> Vec<Launcher> {
    match &config.settings_command {
        Some(command) => Launcher::from_command(command.as_slice()).into_iter().collect(),
        None          => DEFAULT_LAUNCHERS.iter().filter_map(|c| Launcher::from_command(*c)).collect(),
    }
}

/// Starts the first launcher found on `PATH` and leaves it running. The child
/// is waited on from a background thread so it is reaped when it exits.
pub fn open(launchers: &[Launcher]) -> Result<()> {
    for launcher in launchers {
        let Ok(path) = which::which(&launcher.program) else {
            debug!("{} is not on PATH", launcher.program);
            continue
        };

        let spawned = Command::new(&path)
            .args(&launcher.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                info!("Opened Bluetooth settings with {} (pid {})", path.display(), child.id());
                reap(child);
                return Ok(())
            }
            Err(e) => warn!("Couldn't start {}: {e}", path.display()),
        }
    }

    Err(Error::SettingsUnavailable(match launchers.is_empty() {
        true  => "no settings command configured".to_owned(),
        false => "no Bluetooth settings application could be started".to_owned(),
    }))
}

fn reap(mut child: Child) -> JoinHandle<()> {
    thread::spawn(move || match child.wait() {
        Ok(status) => debug!("Settings application {} exited with {status}", child.id()),
        Err(e)     => warn!("Couldn't wait for settings application {}: {e}", child.id()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_launchers_in_order() {
        let launchers = launchers(&Config::default());

        assert_eq!(launchers.len(), DEFAULT_LAUNCHERS.len());
        assert_eq!(launchers[1], Launcher { program: "gnome-control-center".into(), args: vec!["bluetooth".into()] });
    }

    #[test]
    fn configured_command_replaces_defaults() {
        let config = Config { settings_command: Some(vec!["blueberry".into()]), ..Config::default() };

        assert_eq!(launchers(&config), vec![Launcher { program: "blueberry".into(), args: vec![] }]);

        let config = Config { settings_command: Some(vec![]), ..Config::default() };

        assert!(launchers(&config).is_empty());
    }

    #[test]
    fn nothing_to_launch_is_unavailable() {
        assert!(matches!(open(&[]), Err(Error::SettingsUnavailable(_))));

        let missing = Launcher::from_command(&["budmeter-no-such-settings-app"]).unwrap();

        assert!(matches!(open(&[missing]), Err(Error::SettingsUnavailable(_))));
    }

    #[test]
    fn skips_missing_programs() {
        let launchers = [
            Launcher::from_command(&["budmeter-no-such-settings-app"]).unwrap(),
            Launcher::from_command(&["true"]).unwrap(),
        ];

        assert!(open(&launchers).is_ok());
    }

    #[test]
    fn launched_child_is_reaped() {
        let child = Command::new("true").spawn().unwrap();
        let pid = child.id();

        reap(child).join().unwrap();

        assert!(!std::path::Path::new(&format!("/proc/{pid}")).exists());
    }
}
