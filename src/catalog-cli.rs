//! Browse the built-in region catalog offline, the same data the server's
//! `/regions` endpoints serve.

use std::io::{self, Write};

use clap::{Arg, ArgAction, ArgMatches, Command};

use election_config::model::region::{RegionCatalog, RegionOption};

const PROGRAM_NAME: &str = "catalog-cli";

const ABOUT_TEXT: &str = "List the States, districts and constituencies known to the election \
configuration server.

EXIT CODES:
    0: Listed at least one entry.
    2: Nothing is known under that name; it would be entered as free text.
Other: Error.";

const STATE: &str = "STATE";
const DISTRICT: &str = "DISTRICT";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    let state = || {
        Arg::new(STATE)
            .help("State or Union Territory name, e.g. \"Karnataka\"")
            .action(ArgAction::Set)
            .required(true)
    };

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .subcommand_required(true)
        .subcommand(Command::new("states").about("List every State and Union Territory"))
        .subcommand(
            Command::new("districts")
                .about("List the districts of a State")
                .arg(state()),
        )
        .subcommand(
            Command::new("constituencies")
                .about("List the assembly constituencies of a district")
                .arg(state())
                .arg(
                    Arg::new(DISTRICT)
                        .help("District name, e.g. \"Bagalkot\"")
                        .action(ArgAction::Set)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("national")
                .about("List the national constituencies of a State")
                .arg(state()),
        )
}

/// The entries a parsed command asks for.
fn lookup(catalog: &RegionCatalog, args: &ArgMatches) -> Vec<RegionOption> {
    // Required arguments are guaranteed to be present.
    let arg = |sub: &ArgMatches, name: &str| -> String {
        sub.get_one::<String>(name).cloned().unwrap_or_default()
    };
    match args.subcommand() {
        Some(("states", _)) => catalog.state_options(),
        Some(("districts", sub)) => catalog.district_options(&arg(sub, STATE)),
        Some(("constituencies", sub)) => {
            catalog.constituency_options(&arg(sub, STATE), &arg(sub, DISTRICT))
        }
        Some(("national", sub)) => catalog.national_constituency_options(&arg(sub, STATE)),
        _ => Vec::new(),
    }
}

/// Run the command, print the entries, and return the exit code.
fn run(args: &ArgMatches, out: &mut impl Write) -> u8 {
    let entries = lookup(&RegionCatalog::india(), args);
    if entries.is_empty() {
        return 2;
    }
    for entry in entries {
        if let Err(e) = writeln!(out, "{entry}") {
            eprintln!("Failed to write output: {e}");
            return 1;
        }
    }
    0
}

fn main() {
    let args = cli().get_matches();
    let exit_code = run(&args, &mut io::stdout().lock());
    std::process::exit(exit_code.into())
}
