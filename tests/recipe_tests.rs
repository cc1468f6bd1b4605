//! End-to-end recipe tests over a small MTGJSON document.
//!
//! These tests exercise the full flow a CLI run goes through:
//! - catalog parsing and reprint merging
//! - synergy lookups through a static provider, including failures
//! - each recipe's output format

use std::fs;

use rust_cube::cards::{Card, CardFilter, CatalogIndex, ColorIdentity};
use rust_cube::compose::{
    add_lands, adjust_pool, all_commanders, build_half_decks, commander_cube, finish_decks,
    jumpstart_commanders, parse_half_decks, random_cube, render_half_decks,
    render_jumpstart_decks, select_commanders, CommanderCubeConfig, HalfDeckConfig, HalfDeckPair,
    LandConfig, PoolConfig, RandomCubeConfig, SelectionConfig,
};
use rust_cube::identity::ColorLabel;
use rust_cube::sampler::{CandidatePool, QuotaSampler};
use rust_cube::synergy::{StaticProvider, SynergyPage, SynergySection};
use rust_cube::text::{parse_names, parse_sections, read_sections, render_sections, Section};
use rust_cube::PoolRng;

fn legend(name: &str, identity: &str) -> String {
    let colors: Vec<String> = identity.chars().map(|c| format!("\"{c}\"")).collect();
    format!(
        r#"{{"name": "{name}", "types": ["Creature"], "supertypes": ["Legendary"],
            "colorIdentity": [{}], "legalities": {{"commander": "Legal"}},
            "leadershipSkills": {{"commander": true}}, "layout": "normal"}}"#,
        colors.join(", ")
    )
}

fn spell(name: &str, types: &str, identity: &str) -> String {
    let colors: Vec<String> = identity.chars().map(|c| format!("\"{c}\"")).collect();
    format!(
        r#"{{"name": "{name}", "types": ["{types}"], "colorIdentity": [{}],
            "legalities": {{"commander": "Legal"}}, "layout": "normal"}}"#,
        colors.join(", ")
    )
}

/// 24 legends across all guilds and colors, a few lands per color pair, and
/// plenty of mono-colored spells, split across a commander set and a masters
/// set. Basic lands are present and must never show up in output.
fn catalog() -> CatalogIndex {
    let identities = [
        "W", "U", "B", "R", "G", "WU", "UB", "BR", "RG", "WG", "WB", "UR", "BG", "WR", "UG",
    ];
    let mut commander_set = Vec::new();
    let mut masters_set = Vec::new();
    for (i, identity) in identities.iter().enumerate() {
        commander_set.push(legend(&format!("Legend {identity}"), identity));
        if i < 9 {
            masters_set.push(legend(&format!("Second Legend {identity}"), identity));
        }
        for n in 0..3 {
            masters_set.push(spell(&format!("{identity} Land {n}"), "Land", identity));
        }
    }
    for color in ["W", "U", "B", "R", "G"] {
        for n in 0..40 {
            commander_set.push(spell(&format!("{color} Spell {n}"), "Instant", color));
        }
    }
    for basic in ["Plains", "Island", "Swamp", "Mountain", "Forest"] {
        masters_set.push(format!(
            r#"{{"name": "{basic}", "types": ["Land"], "supertypes": ["Basic"],
                "colorIdentity": []}}"#
        ));
    }
    // Reprint: same card in both sets.
    masters_set.push(spell("W Spell 0", "Instant", "W"));

    let json = format!(
        r#"{{"data": {{
            "C16": {{"code": "C16", "cards": [{}]}},
            "UMA": {{"code": "UMA", "cards": [{}]}}
        }}}}"#,
        commander_set.join(",\n"),
        masters_set.join(",\n")
    );
    CatalogIndex::from_json_str(&json).unwrap()
}

fn provider() -> StaticProvider {
    StaticProvider::new()
        .with_page(
            "Legend UR",
            SynergyPage::new(vec![
                SynergySection::new("topcards", ["U Spell 0", "R Spell 0"]),
                SynergySection::new("highsynergycards", ["U Spell 1"]),
                SynergySection::new("utilitylands", ["UR Land 0", "UR Land 1"]),
                SynergySection::new("gamechangers", ["Rhystic Study"]),
                SynergySection::new("instants", ["U Spell 2", "R Spell 2"]),
            ]),
        )
        .with_page(
            "Legend WU",
            SynergyPage::new(vec![SynergySection::new("topcards", ["W Spell 0", "U Spell 0"])]),
        )
}

fn assert_unique(names: &[String]) {
    let mut seen = std::collections::BTreeSet::new();
    for name in names {
        assert!(seen.insert(name), "duplicate {name}");
    }
}

fn is_basic(name: &str) -> bool {
    ["Plains", "Island", "Swamp", "Mountain", "Forest"].contains(&name)
}

/// Seeds count toward the target and ordered filler keeps its order.
#[test]
fn test_seeded_fill_scenario() {
    let catalog: CatalogIndex = ["A", "B", "C", "D", "E", "F"]
        .into_iter()
        .map(Card::new)
        .collect();
    // The filler still lists the seeds; they are skipped as already claimed.
    let filler = CandidatePool::ordered("filler", catalog.filter_names(&CardFilter::any_card()));

    let mut sampler = QuotaSampler::new(PoolRng::new(1));
    sampler.seed(["A", "B"]);
    let report = sampler.fill_to(4, &[filler]);

    assert_eq!(sampler.output(), ["A", "B", "C", "D"]);
    assert!(report.is_complete());
}

#[test]
fn test_catalog_merges_reprints_and_hides_basics() {
    let catalog = catalog();
    let card = catalog.lookup("W Spell 0").unwrap();
    assert!(card.printed_in("C16"));
    assert!(card.printed_in("UMA"));
    assert!(catalog.get("Forest").is_some());
    let names = catalog.filter_names(&CardFilter::any_card());
    assert!(!names.iter().any(|n| is_basic(n)));
}

#[test]
fn test_pool_rotation() {
    let catalog = catalog();
    let decks = vec![
        vec!["R Spell 1".to_string(), "R Spell 2".to_string()],
        vec!["U Spell 1".to_string(), "Island".to_string(), "R Spell 1".to_string()],
        vec!["G Spell 1".to_string()],
    ];
    let outcome = adjust_pool(&catalog, &decks, &PoolConfig::default(), PoolRng::new(12));

    assert_eq!(outcome.cards.len(), 100);
    assert_eq!(&outcome.cards[..2], ["U Spell 1", "G Spell 1"]);
    assert!(!outcome.cards.iter().any(|c| c == "R Spell 1" || c == "R Spell 2"));
    assert!(!outcome.cards.iter().any(|c| is_basic(c)));
    assert_unique(&outcome.cards);
}

#[test]
fn test_random_cube_sections() {
    let catalog = catalog();
    let config = RandomCubeConfig::default().with_quotas(10, 8, 20, 15, 30);
    let sections = random_cube(&catalog, &config, PoolRng::new(3));

    let all: Vec<String> = sections.iter().flat_map(|s| s.names.clone()).collect();
    assert_unique(&all);
    assert_eq!(all.len(), 83);
    assert!(!all.iter().any(|n| is_basic(n)));

    let text = render_sections(&sections);
    assert_eq!(parse_sections(&text), sections);
}

#[test]
fn test_commander_cube_degrades_on_failed_fetch() {
    let catalog = catalog();
    let commanders = all_commanders(&catalog);
    let config = CommanderCubeConfig::classic().with_target(120);
    let staples = vec!["W Spell 5".to_string(), "B Spell 5".to_string()];

    let outcome =
        commander_cube(&catalog, &provider(), &commanders, &staples, &config, PoolRng::new(21))
            .unwrap();

    assert_eq!(outcome.cards.len(), 120);
    assert_eq!(&outcome.cards[..2], ["W Spell 5", "B Spell 5"]);
    assert_eq!(outcome.commanders.len(), 20);
    assert!(outcome.fetch_failures >= 18);
    assert!(!outcome.cards.iter().any(|n| n == "Rhystic Study"));
    assert_unique(&outcome.cards);
}

#[test]
fn test_hipster_cube_uses_multicolor_commanders() {
    let catalog = catalog();
    let commanders = all_commanders(&catalog);
    let config = CommanderCubeConfig::hipster().with_target(80).with_second_pass(Some(60));

    let outcome =
        commander_cube(&catalog, &provider(), &commanders, &[], &config, PoolRng::new(5)).unwrap();

    assert_eq!(outcome.commanders.len(), 10);
    for commander in &outcome.commanders {
        assert!(catalog.identity_of(commander).len() >= 2, "{commander}");
    }
    assert!(!outcome.cards.iter().any(|n| n == "Rhystic Study"));
    assert_eq!(outcome.cards.len(), 80);
    assert_unique(&outcome.cards);
}

#[test]
fn test_jumpstart_pipeline() {
    let catalog = catalog();
    let dir = tempfile::tempdir().unwrap();

    // Commander lists.
    let grouped = jumpstart_commanders(&catalog);
    assert_eq!(grouped.len(), ColorLabel::JUMPSTART.len());
    let listed = render_sections(&grouped);
    let commanders = parse_names(&listed);
    assert_eq!(commanders.len(), 24);

    // Selection.
    let selection =
        select_commanders(&commanders, &SelectionConfig::default(), PoolRng::new(8)).unwrap();
    let selection_text = render_sections(&selection.to_sections());
    let selected = parse_names(&selection_text);
    assert_eq!(selected.len(), 18);

    // Half decks, with one known pair up front.
    let mut paired = vec!["Legend UR".to_string(), "Legend U".to_string()];
    paired.extend(selected.into_iter().filter(|c| c != "Legend UR" && c != "Legend U"));
    let config = HalfDeckConfig::default();
    let pairs = build_half_decks(&catalog, &provider(), &paired, &config, PoolRng::new(9)).unwrap();
    assert_eq!(pairs.len(), paired.len() / 2);

    let first = &pairs[0];
    assert!(first.cards.contains(&"UR Land 0".to_string()));
    assert!(first.cards.contains(&"U Spell 0".to_string()));
    assert!(!first.cards.contains(&"Rhystic Study".to_string()));
    for pair in &pairs {
        assert_unique(&pair.cards);
        assert!(!pair.cards.iter().any(|c| is_basic(c)));
    }

    let half_text = render_half_decks(&pairs);
    let half_path = dir.path().join("3CommanderHalfDecks.txt");
    fs::write(&half_path, &half_text).unwrap();
    let reread = parse_half_decks(&fs::read_to_string(&half_path).unwrap());
    assert_eq!(reread, pairs);

    // Lands.
    let landbase_path = dir.path().join("3Landbases.txt");
    let landbases = vec![Section::new(
        "Izzet",
        vec!["Steam Vents".into(), "Sulfur Falls".into(), "UR Land 0".into()],
    )];
    fs::write(&landbase_path, render_sections(&landbases)).unwrap();
    let landbases = read_sections(&landbase_path).unwrap();

    let config = LandConfig::default();
    let decks = finish_decks(&catalog, &landbases, &reread, &config, PoolRng::new(10));
    assert_eq!(decks.len(), pairs.len());

    let izzet = &decks[0];
    assert_eq!(izzet.label, ColorLabel::Izzet);
    assert_eq!(izzet.lands.len(), 2);
    assert!(!izzet.lands.contains(&"UR Land 0".to_string()));
    assert_eq!(izzet.basics.len(), 15);

    let final_text = render_jumpstart_decks(&decks);
    assert!(final_text.contains("Steam Vents\n"));
    assert_eq!(final_text.matches("Commanders:").count(), decks.len());
}

/// A commander with an unrecognized color symbol makes the pair unclassifiable:
/// no landbase lands and no basics, even though the other colors are known.
#[test]
fn test_unknown_identity_gets_no_lands() {
    let catalog: CatalogIndex = [
        Card::new("Odd").with_identity(ColorIdentity::from_symbols(["W", "X"])),
        Card::new("Plain").with_identity(ColorIdentity::from_symbols(["U"])),
    ]
    .into_iter()
    .collect();
    let landbases = vec![
        Section::new("Azorius", vec!["Hallowed Fountain".into()]),
        Section::new("Blue", vec!["Flooded Strand".into()]),
    ];
    let pair = HalfDeckPair {
        commanders: ["Odd".to_string(), "Plain".to_string()],
        cards: vec!["Opt".to_string()],
    };

    let deck = add_lands(&catalog, &landbases, &pair, &LandConfig::default(), PoolRng::new(4));

    assert_eq!(deck.label, ColorLabel::Unknown);
    assert!(deck.lands.is_empty());
    assert!(deck.basics.is_empty());
    assert_eq!(deck.cards, ["Opt"]);
}

#[test]
fn test_selection_needs_twenty() {
    let commanders: Vec<String> = (0..5).map(|i| format!("C{i}")).collect();
    assert!(select_commanders(&commanders, &SelectionConfig::default(), PoolRng::new(1)).is_err());
}

#[test]
fn test_half_decks_need_commanders() {
    let catalog = catalog();
    let result = build_half_decks(
        &catalog,
        &StaticProvider::new(),
        &[],
        &HalfDeckConfig::default(),
        PoolRng::new(1),
    );
    assert!(result.is_err());
}
