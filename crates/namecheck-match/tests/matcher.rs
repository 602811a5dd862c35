//! Behavioural tests for locating and classifying project names.

use std::collections::HashSet;
use std::sync::Arc;

use namecheck_match::normalize::normalize_with;
use namecheck_match::{MasterIndex, MatchOptions, NameMatcher};
use namecheck_model::{AmbiguityReason, CheckStatus, Issue, QualifierProblem};
use proptest::prelude::*;

const NAMES: &[&str] = &[
    "(민간)부산미음동물류",
    "(종심)성남복정1A",
    "(자체.시행)성남복정3BL",
    "(LH)오산세교",
    "(민간)오산세교",
    "(CM)광명학온(2공구)",
    "(도전)25년 밀양지사TN",
];

fn matcher() -> NameMatcher {
    NameMatcher::from_names(NAMES).expect("build matcher")
}

#[test]
fn every_canonical_name_matches_itself() {
    let matcher = matcher();
    for name in NAMES {
        let result = matcher.check(name).expect("canonical name yields a verdict");
        assert_eq!(result.status, CheckStatus::Match, "{name}");
        assert_eq!(result.suggestions, vec![name.to_string()]);
    }
}

#[test]
fn unique_bare_body_reports_missing_prefix() {
    let result = matcher().check("부산미음동물류").unwrap();
    assert_eq!(result.status, CheckStatus::Mismatch);
    assert_eq!(result.suggestion(), "(민간)부산미음동물류");
    assert_eq!(
        result.issue,
        Issue::Qualifier {
            problems: vec![QualifierProblem::PrefixMissing],
            official: "(민간)부산미음동물류".to_string(),
        }
    );
}

#[test]
fn shared_bare_body_without_prefix_lists_all_candidates() {
    let result = matcher().check("오산세교").unwrap();
    assert_eq!(result.suggestions, vec!["(LH)오산세교", "(민간)오산세교"]);
    assert_eq!(
        result.issue.to_string(),
        "접두어 누락 → 후보: (LH)오산세교 / (민간)오산세교"
    );
}

#[test]
fn partial_bare_body_is_incomplete() {
    // "성남복정3" is a proper leading part of exactly one bare body, two
    // characters short.
    let result = matcher().check("성남복정3").unwrap();
    assert_eq!(result.suggestion(), "(자체.시행)성남복정3BL");
    assert_eq!(result.issue.to_string(), "명칭 불완전 → 공식: (자체.시행)성남복정3BL");
}

#[test]
fn common_stem_is_ambiguous() {
    let result = matcher().check("성남복정").unwrap();
    assert_eq!(
        result.issue,
        Issue::Ambiguous {
            reason: AmbiguityReason::Containment,
            candidates: vec![
                "(종심)성남복정1A".to_string(),
                "(자체.시행)성남복정3BL".to_string()
            ],
        }
    );
    assert_eq!(
        result.issue.to_string(),
        "특정불가 (유사 2건):\n  1. (종심)성남복정1A\n  2. (자체.시행)성남복정3BL"
    );
}

#[test]
fn similarity_threshold_is_inclusive() {
    let matcher = NameMatcher::from_names(["(A)abcdefgxyz"]).unwrap();
    // Seven of ten characters in one block: ratio exactly 0.7.
    let result = matcher.check("abcdefgpqr").expect("typo at the threshold");
    assert_eq!(result.issue.to_string(), "오탈자 추정 (유사도 70%) → 공식: (A)abcdefgxyz");
    // Six of ten: 0.6.
    assert!(matcher.check("abcdefpqrs").is_none());
}

#[test]
fn custom_threshold_is_honoured() {
    let index = Arc::new(MasterIndex::build(["(A)abcdefgxyz"]).unwrap());
    let options = MatchOptions::new().with_similarity_threshold(0.5);
    let matcher = NameMatcher::with_options(index, options).unwrap();
    assert!(matcher.check("abcdefpqrs").is_some());
}

#[test]
fn locator_returns_whole_text_for_normalised_hits() {
    let matcher = matcher();
    assert_eq!(matcher.find_all_in_text("(CM)부산미음동물류(LH)"), vec!["(CM)부산미음동물류(LH)"]);
    assert_eq!(matcher.find_all_in_text("  오산세교 "), vec!["오산세교"]);
}

#[test]
fn locator_finds_names_inside_sentences() {
    let matcher = matcher();
    let found = matcher.find_all_in_text("금주 (LH)오산세교 및 (CM) 부산미음동물류 현장 점검");
    assert_eq!(found, vec!["(LH)오산세교", "(CM) 부산미음동물류"]);
}

#[test]
fn locator_skips_bare_hits_already_covered() {
    let matcher = matcher();
    let found = matcher.find_all_in_text("(민간)부산미음동물류 / 부산미음동물류");
    assert_eq!(found, vec!["(민간)부산미음동물류"]);
}

#[test]
fn locator_ignores_embedded_bare_bodies() {
    assert!(matcher().find_all_in_text("신오산세교동 주민센터 방문").is_empty());
}

#[test]
fn locator_falls_back_to_containment() {
    assert_eq!(matcher().find_all_in_text("성남복정"), vec!["성남복정"]);
}

#[test]
fn text_shorter_than_every_bare_body_yields_nothing() {
    let matcher = NameMatcher::from_names(["(BTL)논산관사", "(민간)부산미음동물류"]).unwrap();
    assert_eq!(matcher.index().min_bare_chars(), 4);
    assert!(matcher.find_all_in_text("논산관").is_empty());
    assert_eq!(matcher.find_all_in_text("논산관사"), vec!["논산관사"]);
}

#[test]
fn locator_rejects_headers() {
    let matcher = matcher();
    assert!(matcher.find_all_in_text("공사명").is_empty());
    assert!(matcher.find_all_in_text("  12-34 ").is_empty());
}

proptest! {
    #[test]
    fn short_strings_never_yield_a_verdict(text in "\\PC{0,2}") {
        let matcher = matcher();
        prop_assert!(matcher.check(&text).is_none());
        prop_assert!(matcher.find_all_in_text(&text).is_empty());
    }

    #[test]
    fn numbers_never_yield_a_verdict(text in "[0-9][0-9 .-]{2,12}") {
        prop_assert!(matcher().check(&text).is_none());
    }

    #[test]
    fn normalisation_is_idempotent(text in "[()a-zA-Z0-9가-힣 .]{0,24}") {
        let known: HashSet<String> = ["(2공구)".to_string()].into_iter().collect();
        let once = normalize_with(&text, &known);
        prop_assert_eq!(normalize_with(&once, &known), once);
    }
}
