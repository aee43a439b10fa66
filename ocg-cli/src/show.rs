use std::io::Write;
use std::path::PathBuf;

use ocg_core::errors::EmptyResult;
use ocg_core::ocel::ObjectType;
use ocg_core::summary::{
    show_event_log_details,
    DEFAULT_LIMIT,
    DEFAULT_OFFSET,
};
use ocg_gen::load_ocel_log;
use tracing::info;

#[derive(clap::Args)]
pub struct Args {
    #[arg(long_help = "path to a .jsonocel file")]
    pub input: PathBuf,

    #[arg(long, default_value_t = DEFAULT_OFFSET, help = "index of the first case to print")]
    pub offset: usize,

    #[arg(long, default_value_t = DEFAULT_LIMIT, help = "maximum number of cases to print")]
    pub limit: usize,

    #[arg(
        long,
        default_value_t = ObjectType::Plane,
        long_help = "object type whose instances become cases (plane or airport)"
    )]
    pub object_type: ObjectType,
}

pub fn cmd(args: &Args) -> EmptyResult {
    let stdout = std::io::stdout();
    run(args, &mut stdout.lock())
}

pub(crate) fn run<W: Write>(args: &Args, out: &mut W) -> EmptyResult {
    let log = load_ocel_log(&args.input)?;
    let cases = log.case_view(args.object_type);
    info!(
        "Loaded {} with {} events; {} {} cases",
        args.input.display(),
        log.events.len(),
        cases.len(),
        args.object_type,
    );

    show_event_log_details(cases.cases(), args.offset, args.limit, out)?;
    Ok(())
}
