use tile_generator::TileGenerator;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // no arguments, only --help and --version
    let _ = clap::command!()
        .about("Create the solid colour test tiles for Tilr in ./images/tiles")
        .get_matches();

    let generator = TileGenerator::default();
    generator.run()?;

    Ok(())
}
