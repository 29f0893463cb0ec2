use std::io;

use clap::Parser;
use mazerunner::{
    app::{self, Overrides, RunConfig},
    logging,
    settings::Settings,
    AppError,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazerunner")]
struct Args {
    #[clap(short = 'W', long, help = "Maze width, odd and at least 3")]
    width: Option<i32>,
    #[clap(short = 'H', long, help = "Maze height, odd and at least 3")]
    height: Option<i32>,
    #[clap(short, long, help = "Seed of the maze, random if not given")]
    seed: Option<u64>,
    #[clap(long, action, help = "Only show the generated maze")]
    no_solve: bool,
    #[clap(long, action, help = "Don't use colors")]
    plain: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "Show more logs, repeat for even more")]
    verbose: u8,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    logging::init(logging::level_from_verbosity(args.verbose))?;

    let settings_path = Settings::default_path();

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(&settings_path)?);
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(&settings_path)?;
    let config = RunConfig::resolve(
        &settings,
        Overrides {
            width: args.width,
            height: args.height,
            seed: args.seed,
            no_solve: args.no_solve,
            plain: args.plain,
        },
    );

    app::run(&config, &mut io::stdout().lock())?;

    Ok(())
}
