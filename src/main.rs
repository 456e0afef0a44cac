use anyhow::Result;
use clap::{CommandFactory, Parser};
use quicklink::cli::{normalize_args, Cli};
use quicklink::{run, Store, SystemOpener};

fn main() -> Result<()> {
    let args = Cli::parse_from(normalize_args(std::env::args_os()));

    let Some(command) = args.command else {
        Cli::command().print_long_help()?;
        eprintln!("Error: Missing subcommand");
        std::process::exit(1);
    };

    let opener = SystemOpener::new(args.wait, args.verbose);
    let result = Store::locate().and_then(|store| {
        run(command, &store, &opener, &mut std::io::stdout(), args.verbose)
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
