use anyhow::Result;
use simple_logger::SimpleLogger;

pub fn init() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    Ok(())
}
