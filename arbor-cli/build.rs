//! Build script for arbor-cli.
//!
//! Generates the `arbor.1` man page into `OUT_DIR` using clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    Command::new("arbor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and prune content repository trees")
        .long_about(
            "Command-line tool for removing, purging, creating and printing nodes \
             in a hierarchical content repository",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("ARBOR_DATA_DIR"),
        )
        .arg(
            Arg::new("workspace")
                .long("workspace")
                .help("Workspace to operate on")
                .value_name("NAME")
                .global(true)
                .env("ARBOR_WORKSPACE"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("ARBOR_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Fail instead of creating a missing repository")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("ARBOR_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("remove")
                .about("Remove a node subtree or a property")
                .long_about(
                    "Remove a node with its whole subtree, a single property, \
                     or only the children of a node",
                ),
            Command::new("purge")
                .about("Remove all non-system content from the workspace")
                .long_about(
                    "Remove every root property and root child node whose name \
                     does not carry a system prefix",
                ),
            Command::new("touch")
                .about("Create a node, or set properties on an existing one")
                .long_about("Create a node below an existing parent and set properties on it"),
            Command::new("dump")
                .about("Print a subtree")
                .long_about("Print a subtree as an indented tree or as JSON"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("arbor.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
