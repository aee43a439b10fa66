use clap_complete::Shell;
use ocg_core::errors::EmptyResult;

#[derive(clap::Args)]
pub struct Args {
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn cmd(args: &Args, mut cmd: clap::Command) -> EmptyResult {
    clap_complete::generate(args.shell, &mut cmd, "ocgctl", &mut std::io::stdout());
    Ok(())
}
