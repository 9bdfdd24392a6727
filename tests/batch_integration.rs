//! End-to-end batch scoring from TSV input.

mod common;

use std::sync::Arc;

use semf1::{BatchMetric, BatchScorer, SimilarityScorer, parse_rows};

use common::fixtures::{fixture_thesaurus, mock_tokenizer, pre_segmented_scorer};

const ROWS: &str = "\
actual\tpredicted
学生非常快乐\t学员十分高兴
老师很聪明\t聪明的老师
不完整的一行
学生非常快乐\t学生非常快乐
";

#[tokio::test]
async fn test_tsv_similarity_batch() {
    let rows = parse_rows(ROWS.as_bytes(), true).expect("parse rows");
    assert_eq!(rows.len(), 3);

    let scorer = SimilarityScorer::new(fixture_thesaurus(), mock_tokenizer());
    let batch = BatchScorer::new(Arc::new(scorer), 2);

    let results = batch
        .score_rows(rows, BatchMetric::Similarity)
        .await
        .expect("batch");

    let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![1, 2, 4]);

    let synonyms = results[0].similarity.expect("similarity");
    assert_eq!(synonyms.f1, 0.0);
    assert!((synonyms.semantic_f1 - 0.91).abs() < 1e-9);

    let identical = results[2].similarity.expect("similarity");
    assert_eq!(identical.f1, 1.0);
    assert_eq!(identical.position_aware_f1, 1.0);
}

#[tokio::test]
async fn test_batch_matches_sequential_scoring() {
    let scorer = Arc::new(pre_segmented_scorer());
    let pairs = [
        ("学生 非常 快乐", "学员 很 开心"),
        ("老师 很 聪明", "聪明 的 教师"),
        ("跑步 问题", "奔跑 疑问 问题"),
        ("", "学习"),
    ];
    let rows = pairs
        .iter()
        .enumerate()
        .map(|(i, (a, p))| semf1::ScoreRow::new(i, *a, *p))
        .collect();

    let results = BatchScorer::new(Arc::clone(&scorer), 3)
        .score_rows(rows, BatchMetric::Similarity)
        .await
        .expect("batch");

    for ((actual, predicted), result) in pairs.iter().zip(&results) {
        assert_eq!(result.similarity, Some(scorer.score_one(actual, predicted)));
    }
}

#[tokio::test]
async fn test_results_serialize_as_json_lines() {
    let rows = parse_rows("学生 快乐\t学生 高兴\n".as_bytes(), false).expect("parse rows");
    let results = BatchScorer::new(Arc::new(pre_segmented_scorer()), 1)
        .score_rows(rows, BatchMetric::Accuracy)
        .await
        .expect("batch");

    let line = serde_json::to_string(&results[0]).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&line).expect("json");
    assert_eq!(value["index"], 0);
    assert_eq!(value["accuracy"]["matches"], 1);
    assert!(value.get("similarity").is_none());
}
