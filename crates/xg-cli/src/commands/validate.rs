use colored::Colorize;

use xg_gen::Catalog;

pub fn run() -> Result<(), String> {
    let catalog = Catalog::builtin();
    match catalog.validate() {
        Ok(()) => {
            println!(
                "  {} {} actors, {} templates, {} events",
                "ok:".green().bold(),
                catalog.actors.len(),
                catalog.templates.len(),
                catalog.events.len(),
            );
            Ok(())
        }
        Err(e) => Err(format!("catalog invalid: {e}")),
    }
}
