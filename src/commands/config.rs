use anyhow::Result;
use daylee_core::config::DayleeConfig;
use owo_colors::OwoColorize;

pub fn run(config: &DayleeConfig) -> Result<()> {
    let config_path = DayleeConfig::config_path()?;
    let data_path = config.data_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!("  Data:      {}", data_path.display());
    println!("  Session:   {}", config.session_store()?.path().display());
    println!();
    println!("{}", "Assistant".bold());
    println!("  Thinking delay: {}", config.thinking_delay);

    Ok(())
}
