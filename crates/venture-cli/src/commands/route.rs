use anyhow::Result;
use colored::Colorize;
use venture_core::config::VentureConfig;
use venture_core::persona::Navigation;

pub fn run(config: &VentureConfig, screen: &str, tab: Option<&str>) -> Result<()> {
    let catalog = config.persona_catalog()?;
    let navigation = Navigation::new(screen, tab);
    let persona = catalog.resolve(&navigation);

    println!("{} -> {}", navigation, persona.id.bright_cyan());
    println!("{}", persona.greeting);
    Ok(())
}

pub fn list(config: &VentureConfig) -> Result<()> {
    let catalog = config.persona_catalog()?;
    let default_id = catalog.default_persona().id.clone();

    for persona in catalog.personas() {
        let marker = if persona.id == default_id { " (default)" } else { "" };
        println!(
            "{}{}  {} - {}",
            persona.id.bright_cyan(),
            marker.bright_black(),
            persona.name.bright_magenta(),
            persona.title
        );
    }
    Ok(())
}
