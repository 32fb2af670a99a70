//! Tests for filter control sets
//!
//! Covers both render modes and mutually exclusive activation.

use crate::config::{default_curated, CuratedEntry, FolioConfig, RenderMode, ALL_TOKEN};
use crate::filter::card::Card;
use crate::filter::controls::ControlSet;
use crate::filter::rank::PopularTokens;

fn sample_cards() -> Vec<Card> {
    vec![
        Card::new(0, "").with_tags("linux, bash").with_meta("DevOps • Jan"),
        Card::new(1, "").with_tags("linux").with_meta("Security • Feb"),
        Card::new(2, "").with_tags("python").with_meta("devops • Mar"),
    ]
}

fn active_count(set: &ControlSet) -> usize {
    set.controls().iter().filter(|c| c.active).count()
}

// ============================================================================
// Curated Mode
// ============================================================================

#[test]
fn test_curated_emits_fixed_list_in_order() {
    let set = ControlSet::curated(&default_curated());
    assert_eq!(
        set.tokens(),
        vec!["all", "security", "devops", "kubernetes", "docker", "programming", "networking"]
    );
    assert_eq!(set.controls()[2].label, "DevOps");
    assert!(set.controls()[0].active);
    assert_eq!(active_count(&set), 1);
}

#[test]
fn test_curated_ignores_card_content() {
    let config = FolioConfig::default();
    let with_cards = ControlSet::build(&sample_cards(), &config);
    let without_cards = ControlSet::build(&[], &config);
    assert_eq!(with_cards, without_cards);
}

#[test]
fn test_curated_first_entry_active_whatever_its_token() {
    let entries = vec![
        CuratedEntry::new("rust", "Rust"),
        CuratedEntry::new(ALL_TOKEN, "All"),
    ];
    let set = ControlSet::curated(&entries);
    assert_eq!(set.active_token(), "rust");
}

// ============================================================================
// Ranked Mode
// ============================================================================

#[test]
fn test_ranked_all_then_categories_then_tags() {
    let popular = PopularTokens {
        tags: vec!["linux".into(), "bash".into()],
        categories: vec!["devops".into()],
    };
    let set = ControlSet::ranked(&popular);

    assert_eq!(set.tokens(), vec!["all", "devops", "linux", "bash"]);
    let labels: Vec<&str> = set.controls().iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["All", "Devops", "Linux", "Bash"]);
    assert_eq!(set.active_token(), ALL_TOKEN);
}

#[test]
fn test_ranked_build_from_cards() {
    let config = FolioConfig {
        mode: RenderMode::Ranked,
        max_tags: 1,
        ..FolioConfig::default()
    };
    let set = ControlSet::build(&sample_cards(), &config);
    assert_eq!(set.tokens(), vec!["all", "devops", "security", "linux"]);
}

#[test]
fn test_ranked_with_no_cards_is_just_all() {
    let config = FolioConfig {
        mode: RenderMode::Ranked,
        ..FolioConfig::default()
    };
    let set = ControlSet::build(&[], &config);
    assert_eq!(set.tokens(), vec![ALL_TOKEN]);
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_activation_is_mutually_exclusive() {
    let mut set = ControlSet::curated(&default_curated());

    assert_eq!(set.activate(3), Some("kubernetes"));
    assert_eq!(active_count(&set), 1);
    assert!(!set.controls()[0].active);

    assert_eq!(set.activate_token("docker"), Some("docker"));
    assert_eq!(active_count(&set), 1);
    assert_eq!(set.active_token(), "docker");
}

#[test]
fn test_activate_unknown_token_keeps_state() {
    let mut set = ControlSet::curated(&default_curated());
    set.activate(1);
    assert_eq!(set.activate_token("cobol"), None);
    assert_eq!(set.active_token(), "security");
}

#[test]
fn test_rebuild_replaces_previous_set() {
    let config = FolioConfig::default();
    let mut set = ControlSet::build(&[], &config);
    set.activate(4);

    let rebuilt = ControlSet::build(&[], &config);
    assert_eq!(rebuilt.len(), set.len());
    assert_eq!(rebuilt.active_token(), ALL_TOKEN);
}
