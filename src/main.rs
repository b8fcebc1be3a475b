use clap::Parser;
use mtl2assets::config::resolve_settings;
use mtl2assets::{migrate_assets, Args};

fn main() -> mtl2assets::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = resolve_settings(&args)?;
    migrate_assets(&settings)?;

    Ok(())
}
