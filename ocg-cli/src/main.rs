//! `ocgctl` – inspect OCEL logs produced by `ocg-gen`.
mod completions;
mod show;

use clap::{
    CommandFactory,
    Parser,
    Subcommand,
};
use ocg_core::errors::EmptyResult;

#[derive(Parser)]
#[command(
    about = "command-line app for inspecting synthetic OCEL logs",
    version,
    propagate_version = true
)]
struct OcgCommandRoot {
    #[command(subcommand)]
    subcommand: OcgSubcommand,

    #[arg(short, long, global = true, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum OcgSubcommand {
    #[command(about = "generate shell completions for ocgctl")]
    Completions(completions::Args),

    #[command(about = "print a window of cases from a .jsonocel log")]
    Show(show::Args),
}

fn main() -> EmptyResult {
    let args = OcgCommandRoot::parse();
    ocg_core::logging::setup(&args.verbosity);

    match &args.subcommand {
        OcgSubcommand::Completions(args) => completions::cmd(args, OcgCommandRoot::command()),
        OcgSubcommand::Show(args) => show::cmd(args),
    }
}

#[cfg(test)]
mod tests;
