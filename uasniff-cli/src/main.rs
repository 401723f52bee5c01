//! entrypoint for uasniff-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

pub mod cmd;
use self::cmd::{check, classify};

pub mod trace;

#[derive(Debug, Parser)]
#[command(name = "uasniff")]
#[command(bin_name = "uasniff")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmds: CliCommands,

    /// enable debug logs for tracing (possible via RUST_LOG env as well)
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Classify(classify::CliCommandClassify),
    Check(check::CliCommandCheck),
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = crate::trace::init_tracing(if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    })
    .and_then(|()| match cli.cmds {
        CliCommands::Classify(cfg) => classify::run(cfg),
        CliCommands::Check(cfg) => check::run(cfg),
    }) {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}
