use clap::Parser as ClapParser;
use luac_drv::{run, Config};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(_) => {
            eprintln!("Usage: luac <file.lua>");
            std::process::exit(1);
        }
    };

    let filter = if config.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("error")
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
