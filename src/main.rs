use anyhow::Result;
use blockpalette::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    ui::run_app(config).await?;

    Ok(())
}
