//! JSONL export for generated encounters.

use xg_core::GeneratedEncounter;

use crate::error::ExportError;

/// Serialize encounters as JSON Lines: one compact JSON object per line,
/// trailing newline included. Field names follow the wire schema on the
/// core types, so the output is loadable by any JSONL consumer as-is.
pub fn export_jsonl(encounters: &[GeneratedEncounter]) -> Result<String, ExportError> {
    let mut out = String::new();
    for encounter in encounters {
        out.push_str(&serde_json::to_string(encounter)?);
        out.push('\n');
    }
    Ok(out)
}
