use std::error::Error;

use env_preflight::{
    cli::{Cli, Parser},
    env::OsEnv,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    env_preflight::run(&cli, &OsEnv)?;

    Ok(())
}
