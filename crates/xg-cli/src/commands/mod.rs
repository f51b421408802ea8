pub mod generate;
pub mod info;
pub mod roster;
pub mod validate;

use xg_gen::EncounterGenerator;

/// Build a generator over the built-in catalog, mapping validation failures
/// to a printable error.
fn generator() -> Result<EncounterGenerator, String> {
    EncounterGenerator::new().map_err(|e| format!("catalog invalid: {e}"))
}
