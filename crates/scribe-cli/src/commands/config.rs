use anyhow::{Context, Result};
use scribe_infrastructure::ConfigService;

pub fn init(service: &ConfigService) -> Result<()> {
    let (path, created) = service.init().context("Failed to write config file")?;
    if created {
        println!("Created {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}

/// Prints the effective configuration, env overrides included.
pub fn show(service: &ConfigService) -> Result<()> {
    let config = service.get_config().context("Failed to load configuration")?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn path(service: &ConfigService) -> Result<()> {
    println!("{}", service.config_path()?.display());
    Ok(())
}
