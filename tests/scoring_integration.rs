//! Integration tests for text-pair scoring.

mod common;

use std::sync::Arc;

use semf1::{
    JiebaTokenizer, MatchKind, ScoringConfig, SimilarityScorer, TextSimilarity, Thesaurus,
    WordCategory,
};

use common::fixtures::{
    CILIN_FIXTURE, fixture_thesaurus, mock_tokenizer, pre_segmented_scorer, write_dictionary,
};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_all_synonym_sentence() {
    let scorer = SimilarityScorer::new(fixture_thesaurus(), mock_tokenizer());
    let report = scorer.score_detailed("学生非常快乐", "学员十分高兴");

    assert_eq!(report.pairs.len(), 3);
    assert!(report.pairs.iter().all(|p| p.kind == MatchKind::Synonym));

    let similarity = report.similarity();
    assert_eq!(similarity.f1, 0.0);
    assert_close(similarity.semantic_f1, 0.91);
    assert_close(similarity.position_aware_f1, 0.91);
}

#[test]
fn test_reordered_sentence_penalizes_position() {
    let scorer = SimilarityScorer::new(fixture_thesaurus(), mock_tokenizer());
    let report = scorer.score_detailed("老师很聪明", "聪明的老师");

    // "很" has nothing to pair with; the two nouns/adjectives swap ends.
    assert_eq!(report.pairs.len(), 2);
    assert_close(report.exact.f1, 2.0 / 3.0);
    assert_close(report.semantic.f1, 2.0 / 3.0);

    let noun_pos = (-1.5_f64 * (2.0 / 3.0 - 0.4_f64).powi(2)).exp();
    let adjective_pos = (-1.5_f64 * (2.0 / 3.0 - 0.5_f64).powi(2)).exp();
    assert_close(report.pairs[0].position_score, noun_pos);
    assert_close(report.pairs[1].position_score, adjective_pos);
    assert_close(report.position_aware.f1, (noun_pos + adjective_pos) / 3.0);
}

#[test]
fn test_greedy_alignment_depends_on_direction() {
    let scorer = pre_segmented_scorer();

    // Forward: "快乐" prefers its exact twin at the far end over the synonym
    // in place, leaving "学生" free for an exact match too.
    let forward = scorer.score_one("快乐 学生", "高兴 学生 快乐");
    // Backward: "高兴" grabs "快乐" first, so the trailing "快乐" goes unmatched.
    let backward = scorer.score_one("高兴 学生 快乐", "快乐 学生");

    assert_close(forward.f1, 0.8);
    assert_close(backward.f1, 0.4);
    for similarity in [forward, backward] {
        assert!((0.0..=1.0).contains(&similarity.semantic_f1));
        assert!((0.0..=1.0).contains(&similarity.position_aware_f1));
    }
}

#[test]
fn test_thesaurus_loaded_from_file() {
    let dictionary = write_dictionary(CILIN_FIXTURE);
    let thesaurus = Thesaurus::new();

    let stats = thesaurus.load(dictionary.path()).expect("load fixture");
    assert_eq!(stats.entries, 10);
    assert_eq!(stats.skipped, 1);
    assert_eq!(thesaurus.category("坏行"), WordCategory::Other);
    assert_eq!(thesaurus.category("您"), WordCategory::Other);
    assert_eq!(thesaurus.category("研习"), WordCategory::Verb);
    assert_eq!(thesaurus.category("很"), WordCategory::Adverb);
    assert!(thesaurus.synonyms("也").is_empty());

    let scorer = SimilarityScorer::new(Arc::new(thesaurus), semf1::PreSegmentedTokenizer);
    assert_close(scorer.score_one("念书", "学习").semantic_f1, 0.91);
}

#[test]
fn test_degraded_mode_scores_lexically() {
    let thesaurus = Thesaurus::new();
    assert!(thesaurus.load_once("/nonexistent/cilin.txt").is_degraded());

    let scorer = SimilarityScorer::new(Arc::new(thesaurus), semf1::PreSegmentedTokenizer);

    assert_eq!(scorer.score_one("快乐", "高兴"), TextSimilarity::default());
    let identical = scorer.score_one("快乐 学生", "快乐 学生");
    assert_eq!(identical.f1, 1.0);
    assert_eq!(identical.position_aware_f1, 1.0);
}

#[test]
fn test_concurrent_scoring_is_deterministic() {
    let scorer = Arc::new(pre_segmented_scorer());
    let expected = scorer.score_one("学生 非常 快乐 跑步", "学员 很 开心 奔跑 念书");

    std::thread::scope(|s| {
        for _ in 0..8 {
            let scorer = Arc::clone(&scorer);
            s.spawn(move || {
                for _ in 0..50 {
                    let similarity =
                        scorer.score_one("学生 非常 快乐 跑步", "学员 很 开心 奔跑 念书");
                    assert_eq!(similarity, expected);
                }
            });
        }
    });
}

#[test]
fn test_custom_scoring_config() {
    let config = ScoringConfig::default()
        .with_synonym_score(0.5)
        .with_category_boost(0.0);
    let scorer = SimilarityScorer::with_config(fixture_thesaurus(), mock_tokenizer(), config)
        .expect("valid config");

    let similarity = scorer.score_one("学生非常快乐", "学员十分高兴");
    assert_close(similarity.semantic_f1, 0.5);
}

#[test]
fn test_jieba_identity_and_empty() {
    let scorer = SimilarityScorer::new(fixture_thesaurus(), JiebaTokenizer::new(false));

    let identity = scorer.score_one("我们中出了一个叛徒", "我们中出了一个叛徒");
    assert_eq!(identity.f1, 1.0);
    assert_eq!(identity.semantic_f1, 1.0);
    assert_eq!(identity.position_aware_f1, 1.0);

    assert_eq!(scorer.score_one("", ""), TextSimilarity::default());
}

#[test]
fn test_jieba_accuracy_first_token() {
    let scorer = SimilarityScorer::new(fixture_thesaurus(), JiebaTokenizer::default());

    assert!(scorer.accuracy("我们出发了", "我们回来了").is_match());
    assert!(!scorer.accuracy("今天出发", "我们出发").is_match());
    assert!(!scorer.accuracy("", "我们").is_match());
}
