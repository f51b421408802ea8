use colored::Colorize;

use xg_core::{AttackVector, Biome, SpeciesType, Temperament};
use xg_gen::{GENERATOR_VERSION, tier_bounds};

pub fn run() -> Result<(), String> {
    let generator = super::generator()?;
    let catalog = generator.catalog();
    let (tier_min, tier_max) = tier_bounds();

    println!("{}", "Xenogate generator".bold());
    println!("  version:  {GENERATOR_VERSION}");
    println!("  tiers:    {tier_min}..{tier_max}");
    println!(
        "  catalog:  {} actors, {} templates, {} events",
        catalog.actors.len(),
        catalog.templates.len(),
        catalog.events.len(),
    );
    println!();
    println!("{}", "Attack vectors".bold());
    println!("  {}", joined(AttackVector::all()));
    println!("{}", "Biomes".bold());
    println!("  {}", joined(Biome::all()));
    println!("{}", "Species".bold());
    println!("  {}", joined(SpeciesType::all()));
    println!("{}", "Temperaments".bold());
    println!("  {}", joined(Temperament::all()));

    Ok(())
}

fn joined<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
