use clap::{Parser, Subcommand};
use std::ffi::OsString;

const EXAMPLES: &str = "\
Examples:
  Register a location under a short name:
    ql add -name yt -location https://www.youtube.com

  Open it with the default browser or file manager:
    ql yt

  Forget it again:
    ql remove yt

  Show everything that is registered:
    ql list

Web locations need their scheme (https://) to open in a browser.";

#[derive(Parser, Debug)]
#[command(
    name = "ql",
    version,
    about = "A quick way to open your favourite locations from the CLI",
    long_about = None,
    after_long_help = EXAMPLES,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Wait for the opener to exit before returning
    #[arg(short, long, global = true)]
    pub wait: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every registered name and its location
    List,

    /// Register a location under a name, replacing any previous one
    Add {
        /// Name of the quick list item
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        name: String,

        /// Location which should open (include https:// for web items)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        location: String,

        /// Flag parsing stops at the first bare word; it and everything
        /// after it are ignored.
        #[arg(hide = true, num_args = 1.., trailing_var_arg = true)]
        extra: Vec<String>,
    },

    /// Remove a registered name
    Remove {
        /// Name to remove
        name: Option<String>,
    },

    /// Any other word is the name of an item to open
    #[command(external_subcommand)]
    Open(Vec<String>),
}

/// Long flags that may also be written with a single dash (`-name`).
const LONG_FLAGS: &[&str] = &["help", "version", "verbose", "wait", "name", "location"];
/// Of those, the ones whose value follows as the next argument.
const VALUE_FLAGS: &[&str] = &["name", "location"];

/// Rewrites single-dash long flags (`-name x`, `-help`) into the
/// double-dash form clap understands. Flag values are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if s == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (body, single_dash) = if let Some(body) = s.strip_prefix("--") {
            (body, false)
        } else if let Some(body) = s.strip_prefix('-') {
            (body, true)
        } else {
            out.push(arg);
            continue;
        };

        let key = body.split('=').next().unwrap_or(body);
        if !LONG_FLAGS.contains(&key) {
            out.push(arg);
            continue;
        }

        expect_value = VALUE_FLAGS.contains(&key) && !body.contains('=');
        if single_dash {
            out.push(OsString::from(format!("-{}", s)));
        } else {
            out.push(arg);
        }
    }
    out
}
