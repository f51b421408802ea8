use std::path::Path;

use xg_core::Biome;
use xg_gen::{GeneratorConfig, TierDistribution, export_jsonl, tier_bounds};

/// Hard cap on one invocation; keeps a typo'd count from flooding stdout.
const MAX_BATCH: usize = 1000;

#[allow(clippy::too_many_arguments)]
pub fn run(
    count: usize,
    seed: Option<u64>,
    tier_min: u32,
    tier_max: u32,
    distribution: &str,
    biomes: Option<&str>,
    pretty: bool,
    output: Option<&Path>,
) -> Result<(), String> {
    let (lo, hi) = tier_bounds();
    if tier_min < lo || tier_max > hi || tier_min > tier_max {
        return Err(format!(
            "tier range {tier_min}..{tier_max} must lie within {lo}..{hi} with min <= max"
        ));
    }

    let dist = TierDistribution::parse(distribution)
        .ok_or_else(|| format!("unknown distribution: \"{distribution}\". Use: flat, ramp, bell"))?;

    let mut config = GeneratorConfig::default()
        .with_tiers(tier_min, tier_max)
        .with_distribution(dist);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(list) = biomes {
        let parsed = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Biome::parse(s).ok_or_else(|| format!("unknown biome: \"{s}\"")))
            .collect::<Result<Vec<_>, _>>()?;
        if parsed.is_empty() {
            return Err("biome list is empty".into());
        }
        config = config.with_biomes(parsed);
    }

    let generator = super::generator()?;
    let batch = generator.generate_batch(count.min(MAX_BATCH), &config);

    let content = if pretty {
        let mut out = serde_json::to_string_pretty(&batch)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        out.push('\n');
        out
    } else {
        export_jsonl(&batch).map_err(|e| e.to_string())?
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Wrote {} encounters to {}", batch.len(), path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
