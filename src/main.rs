use anyhow::{Context, Result};
use chesser::{assets, config::Config, gui};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    let start = config.validate()?;

    // The window cannot start without every piece image.
    let images = assets::load_piece_images(&config.assets)
        .with_context(|| format!("loading piece images from {}", config.assets.display()))?;

    let conf = gui::window_conf(&config);
    macroquad::Window::from_config(conf, async move {
        gui::App::new(&config, start, &images).run().await;
    });
    Ok(())
}
