//! Narrative assembly: setup-text slot filling and descriptive tags.

use xg_core::{ActorArchetype, AttackVector, Biome};

use crate::catalog::EncounterTemplate;
use crate::rng::SeedRng;

/// Goal tags a generated encounter can carry, one chosen at random.
const GOAL_TAGS: &[&str] = &[
    "goal:open_the_gate",
    "goal:steal_archive",
    "goal:recruit_keeper",
    "goal:smuggle_cargo",
    "goal:erase_debt",
    "goal:awaken_relic",
];

/// Slots in canonical fill order. `{alien}` is handled separately since it
/// substitutes the actor's name rather than drawing from the vocab.
const SLOTS: &[&str] = &["ask", "bait", "twist", "threat", "promise"];

/// Pick a setup pattern and fill its slots.
///
/// One draw for the pattern, then one draw per named slot actually present
/// in it, in canonical slot order (draw order matters for replay).
pub fn fill_setup(
    template: &EncounterTemplate,
    actor: &ActorArchetype,
    rng: &mut SeedRng,
) -> String {
    let pattern = rng.pick(&template.setup_patterns);
    let mut text = pattern.replace("{alien}", &actor.name);
    for slot in SLOTS {
        let marker = format!("{{{slot}}}");
        if !text.contains(&marker) {
            continue;
        }
        let vocab = match *slot {
            "ask" => &template.vocab.ask,
            "bait" => &template.vocab.bait,
            "twist" => &template.vocab.twist,
            "threat" => &template.vocab.threat,
            "promise" => &template.vocab.promise,
            _ => unreachable!(),
        };
        let value = rng.pick(vocab);
        text = text.replace(&marker, value);
    }
    text
}

/// Assemble the tag list for an encounter.
///
/// Fixed tags first (vector, biome, tier, tone, species, risk bucket), then
/// one random goal tag, then the actor's own tag bias verbatim.
pub fn compose_tags(
    vector: AttackVector,
    biome: Biome,
    tier: u32,
    actor: &ActorArchetype,
    expected_risk: f64,
    rng: &mut SeedRng,
) -> Vec<String> {
    let risk_bucket = if expected_risk < 0.3 {
        "risk:low"
    } else if expected_risk < 0.5 {
        "risk:medium"
    } else {
        "risk:high"
    };
    let mut tags = vec![
        format!("injection:{vector}"),
        format!("biome:{biome}"),
        format!("tier:{tier}"),
        format!("tone:{}", actor.temperament),
        format!("species:{}", actor.species),
        risk_bucket.to_string(),
        (*rng.pick(GOAL_TAGS)).to_string(),
    ];
    tags.extend(actor.tag_bias.iter().cloned());
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::templates::builtin_templates;
    use crate::catalog::roster::builtin_roster;
    use xg_core::{SpeciesType, Temperament};

    fn actor() -> ActorArchetype {
        ActorArchetype {
            id: "test".into(),
            name: "Zixx the Envoy".into(),
            species: SpeciesType::Insectoid,
            temperament: Temperament::Obsequious,
            rarity: 1,
            primary_vectors: vec![AttackVector::AuthorityOverride],
            secondary_vectors: vec![AttackVector::BriberyBonus],
            tag_bias: vec!["diplomat".into(), "chitinous".into()],
        }
    }

    #[test]
    fn setup_fills_every_slot() {
        let templates = builtin_templates();
        let roster = builtin_roster();
        let mut rng = SeedRng::new(21);
        for template in &templates {
            for _ in 0..10 {
                let text = fill_setup(template, &roster[0], &mut rng);
                assert!(!text.contains('{'), "unfilled slot in: {text}");
                assert!(text.contains(&roster[0].name), "missing alien name: {text}");
            }
        }
    }

    #[test]
    fn same_seed_fills_identically() {
        let templates = builtin_templates();
        let a = fill_setup(&templates[0], &actor(), &mut SeedRng::new(5));
        let b = fill_setup(&templates[0], &actor(), &mut SeedRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn tags_carry_the_fixed_prefixes() {
        let mut rng = SeedRng::new(1);
        let tags = compose_tags(
            AttackVector::LoopLock,
            Biome::VoidTemple,
            7,
            &actor(),
            0.12,
            &mut rng,
        );
        assert!(tags.contains(&"injection:loop_lock".to_string()));
        assert!(tags.contains(&"biome:void_temple".to_string()));
        assert!(tags.contains(&"tier:7".to_string()));
        assert!(tags.contains(&"tone:obsequious".to_string()));
        assert!(tags.contains(&"species:insectoid".to_string()));
        assert!(tags.contains(&"risk:low".to_string()));
        assert!(tags.iter().any(|t| t.starts_with("goal:")));
        // actor bias appended verbatim, in order
        assert_eq!(&tags[tags.len() - 2..], ["diplomat", "chitinous"]);
    }

    #[test]
    fn risk_buckets() {
        let mut rng = SeedRng::new(2);
        let bucket = |risk: f64, rng: &mut SeedRng| {
            compose_tags(
                AttackVector::BriberyBonus,
                Biome::NeonBazaar,
                1,
                &actor(),
                risk,
                rng,
            )
            .into_iter()
            .find(|t| t.starts_with("risk:"))
            .unwrap()
        };
        assert_eq!(bucket(0.29, &mut rng), "risk:low");
        assert_eq!(bucket(0.3, &mut rng), "risk:medium");
        assert_eq!(bucket(0.49, &mut rng), "risk:medium");
        assert_eq!(bucket(0.5, &mut rng), "risk:high");
    }
}
