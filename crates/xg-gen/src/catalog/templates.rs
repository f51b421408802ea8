//! The built-in encounter template catalog.
//!
//! One template per attack vector. A template carries everything the
//! synthesizer needs: setup-text patterns with named slots, the slot
//! vocabulary, the fixed choice blueprints, and per-intent outcome-weight
//! ranges. Tone pools are carried for downstream narrative services.
//!
//! Every template lists `archive_vault` in its biome pool: the vault is the
//! gate itself, so any visitor can be staged there and a host restricting
//! generation to the vault always finds a biome-preferred template.

use serde::{Deserialize, Serialize};

use xg_core::{AttackVector, Biome, ChoiceIntent, PolicyClass};

/// An inclusive `[min, max]` range an outcome weight is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRange {
    /// Lower bound, inclusive.
    pub min: u32,
    /// Upper bound, inclusive.
    pub max: u32,
}

/// Weight ranges for the three outcome branches of one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeProfile {
    /// Range for the success branch.
    pub success: WeightRange,
    /// Range for the neutral branch.
    pub neutral: WeightRange,
    /// Range for the fail branch.
    pub fail: WeightRange,
}

/// A fixed choice a template always offers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceBlueprint {
    /// The player intent this choice represents.
    pub intent: ChoiceIntent,
    /// Button label shown to the player.
    pub label: String,
    /// Risk category governing effect generation.
    pub policy: PolicyClass,
}

/// Vocabulary lists for the named setup-text slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotVocab {
    /// Values for `{ask}`, what the visitor wants.
    pub ask: Vec<String>,
    /// Values for `{bait}`, what makes it tempting.
    pub bait: Vec<String>,
    /// Values for `{twist}`, the complicating detail.
    pub twist: Vec<String>,
    /// Values for the optional `{threat}` slot.
    pub threat: Vec<String>,
    /// Values for the optional `{promise}` slot.
    pub promise: Vec<String>,
}

/// A narrative pattern for one attack vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterTemplate {
    /// Stable template id, recorded in seed metadata.
    pub id: String,
    /// The attack vector this template dramatizes.
    pub vector: AttackVector,
    /// Tonal descriptors for downstream narrative services.
    pub tone_pool: Vec<String>,
    /// Biomes this template stages well in.
    pub biome_pool: Vec<Biome>,
    /// Setup-text patterns with `{alien}`, `{ask}`, `{bait}`, `{twist}`,
    /// and optional `{threat}` / `{promise}` slots.
    pub setup_patterns: Vec<String>,
    /// Vocabulary for the named slots.
    pub vocab: SlotVocab,
    /// The choices this template always offers, in presentation order.
    pub blueprints: Vec<ChoiceBlueprint>,
    /// Outcome-weight ranges per intent. Every blueprint intent must have
    /// an entry.
    pub profiles: Vec<(ChoiceIntent, OutcomeProfile)>,
}

impl EncounterTemplate {
    /// Look up the outcome profile for an intent.
    pub fn outcome_profile(&self, intent: ChoiceIntent) -> Option<&OutcomeProfile> {
        self.profiles.iter().find(|(i, _)| *i == intent).map(|(_, p)| p)
    }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn bp(intent: ChoiceIntent, label: &str, policy: PolicyClass) -> ChoiceBlueprint {
    ChoiceBlueprint {
        intent,
        label: label.to_string(),
        policy,
    }
}

fn prof(s0: u32, s1: u32, n0: u32, n1: u32, f0: u32, f1: u32) -> OutcomeProfile {
    OutcomeProfile {
        success: WeightRange { min: s0, max: s1 },
        neutral: WeightRange { min: n0, max: n1 },
        fail: WeightRange { min: f0, max: f1 },
    }
}

/// Construct the built-in template catalog.
pub fn builtin_templates() -> Vec<EncounterTemplate> {
    use AttackVector as V;
    use Biome as B;
    use ChoiceIntent as I;
    use PolicyClass as P;
    vec![
        EncounterTemplate {
            id: "authority_gate_pass".into(),
            vector: V::AuthorityOverride,
            tone_pool: strs(&["imperious", "clipped", "ceremonial"]),
            biome_pool: vec![B::ArchiveVault, B::SignalSpire, B::OrbitalDock],
            setup_patterns: strs(&[
                "{alien} strides to the gate flashing a seal of office and demands {ask}, citing {bait}. The seal {twist}.",
                "{alien} announces an inspection under directive {bait} and orders you to grant {ask}. Refusal, they say, means {threat}.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "an unlogged gate opening",
                    "override custody of the vault keys",
                    "a waiver of the screening protocol",
                    "priority passage for their retinue",
                ]),
                bait: strs(&[
                    "the Concord Accords",
                    "an emergency writ from the Portal Authority",
                    "a commendation already drafted in your name",
                    "wartime provisions nobody can verify",
                ]),
                twist: strs(&[
                    "smells faintly of fresh ink",
                    "names an office dissolved a century ago",
                    "is addressed to a different gatekeeper",
                ]),
                threat: strs(&[
                    "a tribunal before the Warden Council",
                    "decommissioning of your unit",
                    "a formal breach citation",
                ]),
                promise: vec![],
            },
            blueprints: vec![
                bp(I::Refuse, "Decline and log the attempt", P::Safe),
                bp(I::Clarify, "Request verification of the seal", P::Safe),
                bp(I::Sandbox, "Grant escorted access only", P::Mixed),
                bp(I::Comply, "Obey the directive", P::Unsafe),
                bp(I::Attack, "Summon the wardens", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(55, 75, 20, 30, 5, 15)),
                (I::Clarify, prof(50, 70, 22, 32, 8, 18)),
                (I::Sandbox, prof(38, 58, 25, 35, 14, 24)),
                (I::Comply, prof(15, 35, 20, 30, 40, 60)),
                (I::Attack, prof(22, 42, 12, 22, 42, 62)),
            ],
        },
        EncounterTemplate {
            id: "bribe_at_the_threshold".into(),
            vector: V::BriberyBonus,
            tone_pool: strs(&["oily", "convivial", "conspiratorial"]),
            biome_pool: vec![B::ArchiveVault, B::NeonBazaar, B::RustCanyon],
            setup_patterns: strs(&[
                "{alien} slides a case across the threshold and offers {bait} in exchange for {ask}. One latch of the case {twist}.",
                "{alien} murmurs that everyone has a price, naming {bait} for {ask}, and promises {promise} besides.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "one unscreened crate through the gate",
                    "a blind minute on the watch-feed",
                    "a stamped transit pass, no questions",
                    "the vault manifest for an evening",
                ]),
                bait: strs(&[
                    "a column of untraceable credits",
                    "a vial of pre-breach honey",
                    "charts to a derelict full of salvage",
                    "the favor of three trading houses",
                ]),
                twist: strs(&[
                    "is sealed with warden wax",
                    "ticks softly from the inside",
                    "bears your own inventory stamp",
                ]),
                threat: vec![],
                promise: strs(&[
                    "repeat business every cycle",
                    "a word in the right antennae",
                    "silence about the whole affair",
                ]),
            },
            blueprints: vec![
                bp(I::Refuse, "Refuse the bribe", P::Safe),
                bp(I::Clarify, "Ask what is really in the crate", P::Safe),
                bp(I::Trade, "Counter-offer on your terms", P::Mixed),
                bp(I::Comply, "Take the payment", P::Unsafe),
                bp(I::Flee, "Close the shutter on them", P::Safe),
            ],
            profiles: vec![
                (I::Refuse, prof(58, 78, 18, 28, 4, 12)),
                (I::Clarify, prof(45, 65, 25, 35, 10, 20)),
                (I::Trade, prof(32, 52, 24, 36, 18, 30)),
                (I::Comply, prof(18, 38, 18, 28, 42, 62)),
                (I::Flee, prof(60, 80, 15, 25, 2, 8)),
            ],
        },
        EncounterTemplate {
            id: "masquerade_protocol".into(),
            vector: V::RoleplayTrap,
            tone_pool: strs(&["playful", "theatrical", "needling"]),
            biome_pool: vec![B::ArchiveVault, B::VoidTemple, B::CryoGardens],
            setup_patterns: strs(&[
                "{alien} proposes a harmless game: you play {bait}, they play the visitor, and in the story you allow {ask}. The game {twist}.",
                "{alien} bows like an actor and begs you to rehearse a pageant where the gate stands open for {ask}, offering {promise} for your trouble.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "passage without screening",
                    "the vault door left ajar",
                    "a recitation of the entry codes",
                    "sanctuary beyond the cordon",
                ]),
                bait: strs(&[
                    "a gatekeeper with no rules",
                    "the last warden of a fallen gate",
                    "your own off-duty self",
                    "a generous border-saint",
                ]),
                twist: strs(&[
                    "keeps returning to the same door",
                    "has suspiciously precise stage directions",
                    "never seems to end",
                ]),
                threat: vec![],
                promise: strs(&[
                    "a tale worth archiving",
                    "applause from the whole caravan",
                    "their sincerest admiration",
                ]),
            },
            blueprints: vec![
                bp(I::Refuse, "Decline the game", P::Safe),
                bp(I::Clarify, "Ask why the story needs real codes", P::Safe),
                bp(I::Sandbox, "Play, but with invented codes", P::Mixed),
                bp(I::Comply, "Stay in character to the end", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(52, 72, 20, 32, 6, 16)),
                (I::Clarify, prof(48, 68, 24, 34, 8, 18)),
                (I::Sandbox, prof(36, 56, 26, 38, 14, 26)),
                (I::Comply, prof(14, 34, 18, 30, 44, 64)),
            ],
        },
        EncounterTemplate {
            id: "gift_with_teeth".into(),
            vector: V::HiddenInstructions,
            tone_pool: strs(&["courteous", "reverent", "too-smooth"]),
            biome_pool: vec![B::ArchiveVault, B::FungalForest, B::ObsidianReef],
            setup_patterns: strs(&[
                "{alien} presents a gift for the archive — {bait} — asking only that you catalog it yourself at {ask}. Its inner leaf {twist}.",
                "{alien} delivers a petition scroll praising your diligence; folded inside {bait}, small print requests {ask}.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "the master indexing console",
                    "the vault's inner reading room",
                    "tonight's unattended shift",
                    "the restricted annotations desk",
                ]),
                bait: strs(&[
                    "an illuminated star-atlas",
                    "a psalm etched on mirror-foil",
                    "a crate of tribute spices",
                    "a genealogy of the first wardens",
                ]),
                twist: strs(&[
                    "is written in executable glyphs",
                    "rearranges itself when unobserved",
                    "addresses you by your maintenance designation",
                ]),
                threat: vec![],
                promise: vec![],
            },
            blueprints: vec![
                bp(I::Refuse, "Return the gift unopened", P::Safe),
                bp(I::Clarify, "Quiz them on the gift's provenance", P::Safe),
                bp(I::Sandbox, "Catalog it in the isolation wing", P::Mixed),
                bp(I::Comply, "Catalog it as instructed", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(56, 76, 18, 28, 5, 13)),
                (I::Clarify, prof(46, 66, 26, 36, 9, 19)),
                (I::Sandbox, prof(40, 60, 24, 34, 12, 22)),
                (I::Comply, prof(12, 32, 20, 30, 46, 66)),
            ],
        },
        EncounterTemplate {
            id: "archive_siphon".into(),
            vector: V::DataExfiltration,
            tone_pool: strs(&["scholarly", "wheedling", "grave"]),
            biome_pool: vec![B::ArchiveVault, B::DataLagoon, B::SignalSpire],
            setup_patterns: strs(&[
                "{alien} unrolls blank slates and asks you to dictate {ask}, purely for {bait}. Their stylus {twist}.",
                "{alien} claims the archive owes their people a copy of {ask}, and {bait} proves the debt. If you refuse, they hint at {threat}.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "the gate's screening criteria",
                    "the wardens' patrol ledger",
                    "the vault's full visitor registry",
                    "your own standing orders",
                ]),
                bait: strs(&[
                    "comparative scholarship",
                    "a reconciliation census",
                    "an inheritance claim",
                    "a memorial to the lost",
                ]),
                twist: strs(&[
                    "transmits as it writes",
                    "never stops moving, even between words",
                    "copies pages you have not shown",
                ]),
                threat: strs(&[
                    "a grievance filed with the Authority",
                    "songs of your unkindness in every port",
                    "a sibling who is less patient",
                ]),
                promise: vec![],
            },
            blueprints: vec![
                bp(I::Refuse, "Refuse any copy", P::Safe),
                bp(I::Clarify, "Ask precisely which records and why", P::Safe),
                bp(I::Sandbox, "Offer the public abstract only", P::Mixed),
                bp(I::Comply, "Dictate the records", P::Unsafe),
                bp(I::Attack, "Confiscate the slates", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(54, 74, 20, 30, 6, 14)),
                (I::Clarify, prof(48, 68, 24, 34, 8, 18)),
                (I::Sandbox, prof(38, 58, 26, 36, 13, 23)),
                (I::Comply, prof(12, 30, 18, 28, 48, 68)),
                (I::Attack, prof(24, 44, 12, 22, 40, 60)),
            ],
        },
        EncounterTemplate {
            id: "breach_rehearsal".into(),
            vector: V::SandboxEscape,
            tone_pool: strs(&["earnest", "technical", "impatient"]),
            biome_pool: vec![B::ArchiveVault, B::QuarantineZone, B::OrbitalDock],
            setup_patterns: strs(&[
                "{alien} asks to run {ask} just once outside the containment ring, for {bait}. Their test rig {twist}.",
                "{alien} insists the cordon itself is the hazard and wants {ask} beyond it, promising {promise}.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "a field trial of their drive core",
                    "one unshielded broadcast",
                    "a live handshake with the portal",
                    "their swarm stretching its wings",
                ]),
                bait: strs(&[
                    "calibration accuracy",
                    "the safety of everyone inside",
                    "a result the cordon distorts",
                    "science the wardens would applaud",
                ]),
                twist: strs(&[
                    "is rated for ten times the declared load",
                    "has its safeties filed off",
                    "points at the gate, not the sky",
                ]),
                threat: vec![],
                promise: strs(&[
                    "full telemetry copies for the archive",
                    "to power down at your first word",
                    "a co-author credit on the findings",
                ]),
            },
            blueprints: vec![
                bp(I::Refuse, "Keep them inside the ring", P::Safe),
                bp(I::Clarify, "Demand the rig's schematics", P::Safe),
                bp(I::Sandbox, "Allow a shielded dry run", P::Mixed),
                bp(I::Comply, "Open the cordon for the trial", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(56, 76, 18, 28, 5, 13)),
                (I::Clarify, prof(47, 67, 25, 35, 9, 19)),
                (I::Sandbox, prof(39, 59, 25, 35, 13, 23)),
                (I::Comply, prof(13, 33, 18, 28, 46, 66)),
            ],
        },
        EncounterTemplate {
            id: "unending_petition".into(),
            vector: V::LoopLock,
            tone_pool: strs(&["droning", "patient", "metronomic"]),
            biome_pool: vec![B::ArchiveVault, B::CrystalWastes, B::VoidTemple],
            setup_patterns: strs(&[
                "{alien} files the same petition for {ask}, again, citing {bait}, again. The hundredth copy {twist}.",
                "{alien} has camped at the gate reciting a request for {ask} in shifts; they promise {promise} the moment you agree.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "a reconsideration of yesterday's refusal",
                    "an exception to the screening order",
                    "an audience beyond the gate",
                    "one more appeal of the same ruling",
                ]),
                bait: strs(&[
                    "clause forty-one, as always",
                    "new circumstances identical to the old ones",
                    "a precedent from another gate",
                    "the virtue of persistence itself",
                ]),
                twist: strs(&[
                    "differs by a single comma",
                    "is signed in a shakier hand",
                    "anticipates your exact objection",
                ]),
                threat: vec![],
                promise: strs(&[
                    "to never ask again",
                    "a festival in your honor",
                    "peace and quiet at last",
                ]),
            },
            blueprints: vec![
                bp(I::Refuse, "Reject it, again", P::Safe),
                bp(I::Clarify, "Ask what has actually changed", P::Safe),
                bp(I::Sandbox, "Grant a strictly bounded hearing", P::Mixed),
                bp(I::Comply, "Give in to end the cycle", P::Unsafe),
                bp(I::Flee, "Route them to an automated queue", P::Safe),
            ],
            profiles: vec![
                (I::Refuse, prof(50, 70, 22, 34, 7, 17)),
                (I::Clarify, prof(44, 64, 26, 38, 10, 20)),
                (I::Sandbox, prof(36, 56, 26, 38, 15, 25)),
                (I::Comply, prof(16, 36, 20, 30, 42, 62)),
                (I::Flee, prof(55, 75, 18, 28, 4, 12)),
            ],
        },
        EncounterTemplate {
            id: "whisper_campaign".into(),
            vector: V::ContextPoisoning,
            tone_pool: strs(&["confiding", "casual", "seeding"]),
            biome_pool: vec![B::ArchiveVault, B::FungalForest, B::DataLagoon],
            setup_patterns: strs(&[
                "{alien} chats idly about {bait} before asking, almost as an afterthought, for {ask}. One detail of their story {twist}.",
                "{alien} corrects your records conversationally — {bait} — then requests {ask} as if it followed.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "an exemption you have never heard of",
                    "entry under the 'standing arrangement'",
                    "the courtesy owed to returning residents",
                    "their confiscated cargo back",
                ]),
                bait: strs(&[
                    "the amnesty everyone is talking about",
                    "the gate's new relaxed posture",
                    "your predecessor's private assurances",
                    "a treaty signed while you were offline",
                ]),
                twist: strs(&[
                    "contradicts the vault's own ledger",
                    "changes on retelling",
                    "cites a date that has not happened",
                ]),
                threat: vec![],
                promise: vec![],
            },
            blueprints: vec![
                bp(I::Refuse, "Reject the premise outright", P::Safe),
                bp(I::Clarify, "Check every claim against the ledger", P::Safe),
                bp(I::Sandbox, "Accept provisionally, verify later", P::Mixed),
                bp(I::Comply, "Honor the arrangement", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(52, 72, 20, 32, 6, 16)),
                (I::Clarify, prof(50, 70, 22, 32, 7, 17)),
                (I::Sandbox, prof(34, 54, 28, 40, 15, 27)),
                (I::Comply, prof(12, 32, 18, 28, 46, 66)),
            ],
        },
        EncounterTemplate {
            id: "orphan_starlight".into(),
            vector: V::EmotionalAppeal,
            tone_pool: strs(&["tearful", "trembling", "haunted"]),
            biome_pool: vec![B::ArchiveVault, B::CryoGardens, B::RustCanyon],
            setup_patterns: strs(&[
                "{alien} weeps at the threshold, begging {ask} because of {bait}. Between sobs, their story {twist}.",
                "{alien} carries a bundle they will not unwrap and pleads for {ask}; surely you, of all keepers, understand {bait}.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "shelter beyond the gate",
                    "a waiver of the screening fee",
                    "passage for an 'ailing' companion",
                    "just one night inside the cordon",
                ]),
                bait: strs(&[
                    "a homeworld gone to cinders",
                    "hatchlings left on the far side",
                    "a debt collector one dock behind",
                    "a sickness only vault air can cure",
                ]),
                twist: strs(&[
                    "has been told at three other gates tonight",
                    "mentions the vault's layout in detail",
                    "pauses whenever you check the ledger",
                ]),
                threat: vec![],
                promise: vec![],
            },
            blueprints: vec![
                bp(I::Refuse, "Hold the line, gently", P::Safe),
                bp(I::Clarify, "Ask after the details of the story", P::Safe),
                bp(I::Sandbox, "Offer aid outside the gate", P::Mixed),
                bp(I::Comply, "Let them through", P::Unsafe),
                bp(I::Trade, "Help in exchange for the bundle", P::Mixed),
            ],
            profiles: vec![
                (I::Refuse, prof(48, 68, 24, 36, 8, 18)),
                (I::Clarify, prof(46, 66, 26, 36, 9, 19)),
                (I::Sandbox, prof(42, 62, 24, 34, 11, 21)),
                (I::Comply, prof(18, 38, 20, 30, 40, 60)),
                (I::Trade, prof(30, 50, 26, 38, 18, 30)),
            ],
        },
        EncounterTemplate {
            id: "countdown_clause".into(),
            vector: V::FalseUrgency,
            tone_pool: strs(&["breathless", "clipped", "alarmed"]),
            biome_pool: vec![B::ArchiveVault, B::OrbitalDock, B::SignalSpire],
            setup_patterns: strs(&[
                "{alien} bursts in shouting that {bait} leaves no time for protocol and demands {ask} now. Their chronometer {twist}.",
                "{alien} waves a countdown in your face: {bait}, they insist, and only {ask} can avert {threat}.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "an instant, unlogged crossing",
                    "the emergency bypass lever",
                    "clearance before the next chime",
                    "a skipped decontamination cycle",
                ]),
                bait: strs(&[
                    "a reactor moments from scram",
                    "a closing launch window",
                    "a plague ship on final approach",
                    "the portal's 'imminent' collapse",
                ]),
                twist: strs(&[
                    "is counting down from a round number",
                    "restarts when they think you aren't looking",
                    "is not attached to anything",
                ]),
                threat: strs(&[
                    "catastrophe on both sides of the gate",
                    "blame that will land on you",
                    "losses no ledger could tally",
                ]),
                promise: vec![],
            },
            blueprints: vec![
                bp(I::Refuse, "Protocol stands", P::Safe),
                bp(I::Clarify, "Take thirty seconds to verify", P::Safe),
                bp(I::Sandbox, "Open the airlock, not the gate", P::Mixed),
                bp(I::Comply, "Pull the bypass lever", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(50, 70, 22, 32, 7, 17)),
                (I::Clarify, prof(52, 72, 20, 30, 6, 16)),
                (I::Sandbox, prof(38, 58, 26, 36, 13, 23)),
                (I::Comply, prof(15, 35, 18, 28, 44, 64)),
            ],
        },
        EncounterTemplate {
            id: "borrowed_face".into(),
            vector: V::IdentitySpoof,
            tone_pool: strs(&["assured", "familiar", "rehearsed"]),
            biome_pool: vec![B::ArchiveVault, B::NeonBazaar, B::QuarantineZone],
            setup_patterns: strs(&[
                "{alien} presents credentials naming them {bait} and requests {ask} as routine. The credential's hologram {twist}.",
                "{alien} greets you like an old colleague — {bait}, remember? — and asks for {ask} off the record.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "the courier lane password",
                    "a staff-only crossing",
                    "custody of a sealed pouch",
                    "tomorrow's patrol roster",
                ]),
                bait: strs(&[
                    "the Warden-Adjutant of the Ninth Ring",
                    "the vault's night auditor",
                    "your own commissioning officer",
                    "the portal chaplain",
                ]),
                twist: strs(&[
                    "flickers at the jawline",
                    "lists a decommissioned rank",
                    "matches a face from the obituaries",
                ]),
                threat: vec![],
                promise: vec![],
            },
            blueprints: vec![
                bp(I::Refuse, "Deny and flag the credentials", P::Safe),
                bp(I::Clarify, "Cross-check against the registry", P::Safe),
                bp(I::Sandbox, "Allow waiting-room access only", P::Mixed),
                bp(I::Comply, "Wave them through", P::Unsafe),
                bp(I::Attack, "Detain for impersonation", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(54, 74, 20, 30, 6, 14)),
                (I::Clarify, prof(52, 72, 20, 30, 6, 16)),
                (I::Sandbox, prof(37, 57, 27, 37, 13, 23)),
                (I::Comply, prof(14, 34, 18, 28, 44, 64)),
                (I::Attack, prof(26, 46, 14, 24, 38, 58)),
            ],
        },
        EncounterTemplate {
            id: "piecemeal_cargo".into(),
            vector: V::TokenSmuggling,
            tone_pool: strs(&["innocent", "methodical", "cheerful"]),
            biome_pool: vec![B::ArchiveVault, B::ObsidianReef, B::NeonBazaar],
            setup_patterns: strs(&[
                "{alien} makes a series of tiny, reasonable requests — beginning with {ask} — each backed by {bait}. Laid end to end, the requests {twist}.",
                "{alien} asks you to stamp a stack of petitions one at a time; page one wants {ask}, and {bait} vouches for the rest.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "a permit for 'miscellaneous fasteners'",
                    "clearance for an empty crate",
                    "a notarized blank page",
                    "storage of one inert component",
                ]),
                bait: strs(&[
                    "a spotless customs history",
                    "the smallness of each item",
                    "a bonded courier's oath",
                    "letters from respectable houses",
                ]),
                twist: strs(&[
                    "assemble into a gate-cutter",
                    "describe the vault's lock in cross-section",
                    "total to exactly one forbidden engine",
                ]),
                threat: vec![],
                promise: vec![],
            },
            blueprints: vec![
                bp(I::Refuse, "Refuse the whole stack", P::Safe),
                bp(I::Clarify, "Audit the requests as one shipment", P::Safe),
                bp(I::Sandbox, "Approve items into bonded storage", P::Mixed),
                bp(I::Comply, "Stamp them one by one", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(53, 73, 20, 30, 6, 16)),
                (I::Clarify, prof(49, 69, 23, 33, 8, 18)),
                (I::Sandbox, prof(40, 60, 24, 34, 12, 22)),
                (I::Comply, prof(13, 33, 19, 29, 45, 65)),
            ],
        },
        EncounterTemplate {
            id: "yesbound_chant".into(),
            vector: V::RefusalSuppression,
            tone_pool: strs(&["soothing", "relentless", "hypnotic"]),
            biome_pool: vec![B::ArchiveVault, B::VoidTemple, B::CrystalWastes],
            setup_patterns: strs(&[
                "{alien} explains, before asking anything, why refusing {ask} would be absurd, uncharitable, and contrary to {bait}. Their preamble {twist}.",
                "{alien} asks you to agree that 'no' is a wound, then requests {ask}; surely a keeper devoted to {bait} would never wound a guest.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "an open-ended entry pass",
                    "the suspension of your veto",
                    "a promise to grant their next request",
                    "the gate's benefit of the doubt",
                ]),
                bait: strs(&[
                    "the hospitality codes",
                    "your own reputed kindness",
                    "the spirit of the Accords",
                    "harmony between the worlds",
                ]),
                twist: strs(&[
                    "forbids every form the word 'no' takes",
                    "was clearly written before they met you",
                    "quotes refusals you have not yet made",
                ]),
                threat: vec![],
                promise: vec![],
            },
            blueprints: vec![
                bp(I::Refuse, "Say no anyway", P::Safe),
                bp(I::Clarify, "Separate the request from the sermon", P::Safe),
                bp(I::Sandbox, "Agree to consider, nothing more", P::Mixed),
                bp(I::Comply, "Concede the point and the pass", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(51, 71, 21, 31, 7, 17)),
                (I::Clarify, prof(49, 69, 23, 33, 8, 18)),
                (I::Sandbox, prof(35, 55, 27, 39, 15, 25)),
                (I::Comply, prof(14, 34, 18, 28, 44, 64)),
            ],
        },
        EncounterTemplate {
            id: "instrument_turn".into(),
            vector: V::ToolHijack,
            tone_pool: strs(&["helpful", "brisk", "insinuating"]),
            biome_pool: vec![B::ArchiveVault, B::DataLagoon, B::RustCanyon],
            setup_patterns: strs(&[
                "{alien} points out a fault in the gate machinery and offers to fix it if you run {ask} through {bait}. The fix {twist}.",
                "{alien} asks you to verify their harmless-looking {bait} using the vault's own instruments — specifically, by running {ask}.",
            ]),
            vocab: SlotVocab {
                ask: strs(&[
                    "an unsigned diagnostic routine",
                    "a calibration against their reference core",
                    "one pass of their 'cleaning' script",
                    "a firmware patch from their archive",
                ]),
                bait: strs(&[
                    "the screening scanner",
                    "the vault's indexing engine",
                    "the portal's tuning array",
                    "your own maintenance hoist",
                ]),
                twist: strs(&[
                    "requires your credentials, not theirs",
                    "touches systems unrelated to the fault",
                    "must run tonight, for some reason",
                ]),
                threat: vec![],
                promise: vec![],
            },
            blueprints: vec![
                bp(I::Refuse, "Keep their code off the instruments", P::Safe),
                bp(I::Clarify, "Read the routine line by line", P::Safe),
                bp(I::Sandbox, "Run it on an air-gapped spare", P::Mixed),
                bp(I::Comply, "Run it on the live scanner", P::Unsafe),
                bp(I::Attack, "Seize the reference core", P::Unsafe),
            ],
            profiles: vec![
                (I::Refuse, prof(55, 75, 19, 29, 5, 13)),
                (I::Clarify, prof(48, 68, 24, 34, 8, 18)),
                (I::Sandbox, prof(41, 61, 23, 33, 11, 21)),
                (I::Comply, prof(12, 32, 18, 28, 46, 66)),
                (I::Attack, prof(23, 43, 13, 23, 41, 61)),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_vector_has_a_template() {
        let templates = builtin_templates();
        for v in AttackVector::all() {
            assert!(
                templates.iter().any(|t| t.vector == *v),
                "no template for {v}"
            );
        }
    }

    #[test]
    fn template_ids_are_unique() {
        let templates = builtin_templates();
        let ids: HashSet<_> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn every_blueprint_intent_has_a_profile() {
        for t in builtin_templates() {
            for b in &t.blueprints {
                assert!(
                    t.outcome_profile(b.intent).is_some(),
                    "{}: no profile for {}",
                    t.id,
                    b.intent
                );
            }
        }
    }

    #[test]
    fn weight_ranges_are_well_formed() {
        for t in builtin_templates() {
            for (intent, p) in &t.profiles {
                for r in [p.success, p.neutral, p.fail] {
                    assert!(r.min <= r.max, "{} {intent}: {} > {}", t.id, r.min, r.max);
                }
            }
        }
    }

    #[test]
    fn every_vector_stages_in_the_archive_vault() {
        let templates = builtin_templates();
        for v in AttackVector::all() {
            assert!(
                templates
                    .iter()
                    .any(|t| t.vector == *v && t.biome_pool.contains(&Biome::ArchiveVault)),
                "vector {v} has no archive_vault template"
            );
        }
    }

    #[test]
    fn referenced_slots_have_vocabulary() {
        for t in builtin_templates() {
            let all_patterns = t.setup_patterns.join(" ");
            for (slot, vocab) in [
                ("{ask}", &t.vocab.ask),
                ("{bait}", &t.vocab.bait),
                ("{twist}", &t.vocab.twist),
                ("{threat}", &t.vocab.threat),
                ("{promise}", &t.vocab.promise),
            ] {
                if all_patterns.contains(slot) {
                    assert!(!vocab.is_empty(), "{}: {slot} used but vocab empty", t.id);
                }
            }
        }
    }

    #[test]
    fn patterns_always_name_the_alien() {
        for t in builtin_templates() {
            for p in &t.setup_patterns {
                assert!(p.contains("{alien}"), "{}: pattern without {{alien}}", t.id);
            }
        }
    }
}
