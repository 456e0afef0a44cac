use anyhow::{Context, Result};
use std::io::Write;
use std::process::Command;

/// The three families of "open this with the default handler" commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and the BSDs, anything with xdg-open.
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }
}

/// Program plus the arguments that go before the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenCommand {
    pub program: &'static str,
    pub prefix: &'static [&'static str],
}

pub fn open_command(platform: Platform) -> OpenCommand {
    match platform {
        // The empty string is the window title; without it `start` would
        // treat a quoted location as the title.
        Platform::Windows => OpenCommand {
            program: "cmd",
            prefix: &["/C", "start", ""],
        },
        Platform::MacOs => OpenCommand {
            program: "open",
            prefix: &[],
        },
        Platform::Unix => OpenCommand {
            program: "xdg-open",
            prefix: &[],
        },
    }
}

/// Builds, but does not spawn, the command that opens `location`.
pub fn build_command(platform: Platform, location: &str) -> Command {
    let open = open_command(platform);
    let mut cmd = Command::new(open.program);
    cmd.args(open.prefix);
    match platform {
        Platform::Windows => push_cmd_arg(&mut cmd, &quote_for_cmd(location)),
        Platform::MacOs | Platform::Unix => {
            cmd.arg(location);
        }
    }
    cmd
}

/// Wraps a location in double quotes so cmd.exe treats `&`, `|`, `<`, `>`
/// and `^` inside it as plain text. Embedded quotes are percent-encoded.
pub fn quote_for_cmd(location: &str) -> String {
    format!("\"{}\"", location.replace('"', "%22"))
}

// cmd.exe does not follow the usual argv quoting rules, so the already
// quoted location must reach it verbatim.
#[cfg(windows)]
fn push_cmd_arg(cmd: &mut Command, quoted: &str) {
    use std::os::windows::process::CommandExt;
    cmd.raw_arg(quoted);
}

#[cfg(not(windows))]
fn push_cmd_arg(cmd: &mut Command, quoted: &str) {
    cmd.arg(quoted);
}

/// Hands a location to something that opens it. Progress messages go to `out`.
pub trait Opener {
    fn open(&self, location: &str, out: &mut dyn Write) -> Result<()>;
}

/// Opens locations with the operating system's default handler.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    pub platform: Platform,
    /// Block until the opener process exits.
    pub wait: bool,
    pub verbose: bool,
}

impl SystemOpener {
    pub fn new(wait: bool, verbose: bool) -> Self {
        Self {
            platform: Platform::current(),
            wait,
            verbose,
        }
    }
}

impl Opener for SystemOpener {
    fn open(&self, location: &str, out: &mut dyn Write) -> Result<()> {
        let mut cmd = build_command(self.platform, location);
        if self.verbose {
            writeln!(out, "Launching: {:?}", cmd)?;
        }

        let mut child = cmd
            .spawn()
            .with_context(|| format!("Failed to launch opener for location {}", location))?;

        if !self.wait {
            return Ok(());
        }

        let status = child
            .wait()
            .context("Failed while waiting for the opener to finish")?;
        if self.verbose && !status.success() {
            writeln!(out, "Opener exited with {}", status)?;
        }
        Ok(())
    }
}
