mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // warn by default when RUST_LOG is unset
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rewind=warn,rewind_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli_utils::config_path(args.config.as_deref())?;
    let config = cli_utils::load_config(&config_path)?;
    let osu_path = args.osu_path.as_deref();

    match args.command {
        Command::Locate {
            beatmap,
            replay,
            open,
            reveal,
        } => {
            let target = commands::locate::OpenTarget::from_flags(open, reveal);
            commands::locate::run(osu_path, &config, &beatmap, &replay, target)
        }
        Command::Export {
            beatmap,
            replay,
            output,
        } => commands::export::run(osu_path, &config, &beatmap, &replay, output.as_deref()),
        Command::Inspect { file, json } => commands::inspect::run(&file, json),
        Command::Search {
            query,
            sort,
            desc,
            users,
            page,
            json,
        } => commands::search::run(&config, query.as_deref(), sort, desc, &users, page, json),
        Command::Users => commands::users::run(&config),
        Command::Import { file } => commands::import::run(&config, &file),
        Command::ResetCache => commands::reset_cache::run(&config),
        Command::SetFolder { path } => commands::set_folder::run(&config_path, config, &path),
    }
}
