use anyhow::{Context, Result};
use imgship::logger;
use std::env;

const USAGE: &str = "usage: imgship <image-file> <destination-path>";

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let mut args = env::args().skip(1);
    let source = args.next().context(USAGE)?;
    let destination = args.next().context(USAGE)?;

    let payload = tokio::fs::read(&source)
        .await
        .with_context(|| format!("Cannot read {}", source))?;

    log::info!("Uploading {} to {}", source, destination);

    let url = imgship::upload(&payload, &destination)
        .await
        .context("Cannot upload the image")?;

    println!("{}", url);

    Ok(())
}
