use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let generator = super::generator()?;
    let actors = &generator.catalog().actors;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Id",
        "Name",
        "Species",
        "Temperament",
        "Rarity",
        "Primary vectors",
    ]);

    for actor in actors {
        let vectors = actor
            .primary_vectors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            actor.id.clone(),
            actor.name.clone(),
            actor.species.to_string(),
            actor.temperament.to_string(),
            actor.rarity.to_string(),
            vectors,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} archetypes", actors.len());

    Ok(())
}
