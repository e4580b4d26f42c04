mod cli;
mod commands;

use cli::{RenderParams, SolveParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("solve", m)) => {
            let params = SolveParams::from_matches(m);
            commands::init_logging(params.verbose);
            commands::solve::run(params.into());
        }
        Some(("render", m)) => {
            let params = RenderParams::from_matches(m);
            commands::init_logging(params.verbose);
            commands::render::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
