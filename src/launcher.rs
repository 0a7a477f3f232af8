//! Starting external programs on a resolved path.
//!
//! Every launch is fire-and-forget: the child is spawned with its stdio
//! detached and `see` returns without waiting for it to exit.

use crate::error::LaunchError;
use log::debug;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl LaunchRequest {
    fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

pub trait Launcher {
    /// Opens `target` with the platform's default handler.
    fn open(&self, target: &str) -> Result<(), LaunchError>;
    fn launch(&self, request: &LaunchRequest) -> Result<(), LaunchError>;
}

pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, target: &str) -> Result<(), LaunchError> {
        let opener = opener_for(std::env::consts::OS)
            .ok_or_else(|| LaunchError::Unsupported(std::env::consts::OS.to_string()))?;
        self.launch(&LaunchRequest::new(opener).arg(target))
    }

    fn launch(&self, request: &LaunchRequest) -> Result<(), LaunchError> {
        let mut command = Command::new(&request.program);
        command
            .args(&request.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(dir) = &request.current_dir {
            command.current_dir(dir);
        }
        debug!("spawning {:?}", command);
        command.spawn().map_err(|source| LaunchError::Spawn {
            program: request.program.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Default "open this path" command per platform.
pub fn opener_for(os: &str) -> Option<&'static str> {
    match os {
        "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Some("xdg-open"),
        "windows" => Some("explorer"),
        "macos" => Some("open"),
        _ => None,
    }
}

pub fn terminal_request(override_program: Option<&str>, target: &str, os: &str) -> LaunchRequest {
    match (os, override_program) {
        ("windows", program) => LaunchRequest::new(program.unwrap_or("wt"))
            .arg("-d")
            .arg(target),
        ("macos", None) => LaunchRequest::new("open")
            .arg("-a")
            .arg("Terminal")
            .arg(target),
        (_, program) => {
            LaunchRequest::new(program.unwrap_or("x-terminal-emulator")).current_dir(target)
        }
    }
}

pub fn editor_request(override_program: Option<&str>, target: &str, os: &str) -> LaunchRequest {
    let default = if os == "windows" { "code.cmd" } else { "code" };
    LaunchRequest::new(override_program.unwrap_or(default)).arg(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_matches_platform() {
        assert_eq!(opener_for("linux"), Some("xdg-open"));
        assert_eq!(opener_for("windows"), Some("explorer"));
        assert_eq!(opener_for("macos"), Some("open"));
        assert_eq!(opener_for("haiku"), None);
    }

    #[test]
    fn windows_terminal_passes_directory_flag() {
        let request = terminal_request(None, r"C:\work", "windows");
        assert_eq!(request.program, "wt");
        assert_eq!(request.args, vec!["-d", r"C:\work"]);
        assert_eq!(request.current_dir, None);

        let request = terminal_request(Some(r"C:\bin\wt.exe"), r"C:\work", "windows");
        assert_eq!(request.program, r"C:\bin\wt.exe");
        assert_eq!(request.args, vec!["-d", r"C:\work"]);
    }

    #[test]
    fn macos_terminal_defaults_to_terminal_app() {
        let request = terminal_request(None, "/Users/u", "macos");
        assert_eq!(request.program, "open");
        assert_eq!(request.args, vec!["-a", "Terminal", "/Users/u"]);

        let request = terminal_request(Some("/Applications/kitty"), "/Users/u", "macos");
        assert_eq!(request.program, "/Applications/kitty");
        assert!(request.args.is_empty());
        assert_eq!(request.current_dir, Some(PathBuf::from("/Users/u")));
    }

    #[test]
    fn unix_terminal_starts_in_target_directory() {
        let request = terminal_request(None, "/home/u/proj", "linux");
        assert_eq!(request.program, "x-terminal-emulator");
        assert!(request.args.is_empty());
        assert_eq!(request.current_dir, Some(PathBuf::from("/home/u/proj")));
    }

    #[test]
    fn editor_takes_target_as_argument() {
        let request = editor_request(None, "/home/u/proj", "linux");
        assert_eq!(request.program, "code");
        assert_eq!(request.args, vec!["/home/u/proj"]);

        assert_eq!(editor_request(None, "x", "windows").program, "code.cmd");
        assert_eq!(
            editor_request(Some("/usr/bin/codium"), "x", "linux").program,
            "/usr/bin/codium"
        );
    }

    #[test]
    fn spawn_failure_is_reported_not_panicked() {
        let request = LaunchRequest::new("see-test-no-such-program-7f3a");
        let err = SystemLauncher.launch(&request).expect_err("should fail");
        assert!(matches!(err, LaunchError::Spawn { ref program, .. } if program == "see-test-no-such-program-7f3a"));
    }
}
