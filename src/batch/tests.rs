use super::*;
use crate::thesaurus::Thesaurus;
use crate::tokenize::PreSegmentedTokenizer;

fn batch_scorer(max_workers: usize) -> BatchScorer<PreSegmentedTokenizer> {
    let thesaurus = Arc::new(Thesaurus::parse("Ga01A01= 快乐 高兴 愉快\n"));
    let scorer = Arc::new(SimilarityScorer::new(thesaurus, PreSegmentedTokenizer));
    BatchScorer::new(scorer, max_workers)
}

#[test]
fn test_parse_rows_skips_header_and_short_rows() {
    let input = "标准答案\t预测文本\n我 很 快乐\t 我 很 高兴 \nonly-one-column\n\t\n甲\t乙\t多余\n";
    let rows = parse_rows(input.as_bytes(), true).expect("parse");

    assert_eq!(
        rows,
        vec![
            ScoreRow::new(1, "我 很 快乐", "我 很 高兴"),
            ScoreRow::new(3, "", ""),
            ScoreRow::new(4, "甲", "乙"),
        ]
    );
}

#[test]
fn test_parse_rows_without_header() {
    let rows = parse_rows("a\tb\n".as_bytes(), false).expect("parse");
    assert_eq!(rows, vec![ScoreRow::new(0, "a", "b")]);
}

#[test]
fn test_new_clamps_workers() {
    assert_eq!(batch_scorer(0).max_workers(), 1);
    assert_eq!(batch_scorer(4).max_workers(), 4);
}

#[tokio::test]
async fn test_score_rows_preserves_order() {
    let scorer = batch_scorer(2);
    let rows: Vec<ScoreRow> = (0..20)
        .map(|i| {
            if i % 2 == 0 {
                ScoreRow::new(i, "我 很 快乐", "我 很 快乐")
            } else {
                ScoreRow::new(i, "我 很 快乐", "你 不 难过")
            }
        })
        .collect();

    let results = scorer
        .score_rows(rows, BatchMetric::Similarity)
        .await
        .expect("batch");

    assert_eq!(results.len(), 20);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.index, i);
        assert!(result.accuracy.is_none());
        let similarity = result.similarity.expect("similarity metric");
        let expected = if i % 2 == 0 { 1.0 } else { 0.0 };
        assert_eq!(similarity.f1, expected);
    }
}

#[tokio::test]
async fn test_score_rows_accuracy_metric() {
    let scorer = batch_scorer(3);
    let rows = vec![
        ScoreRow::new(0, "今天 晴", "今天 雨"),
        ScoreRow::new(1, "明天 晴", "今天 晴"),
        ScoreRow::new(2, "", "今天"),
    ];

    let results = scorer
        .score_rows(rows, BatchMetric::Accuracy)
        .await
        .expect("batch");

    let matches: Vec<u8> = results
        .iter()
        .map(|r| r.accuracy.expect("accuracy metric").matches)
        .collect();
    assert_eq!(matches, vec![1, 0, 0]);
    assert!(results.iter().all(|r| r.similarity.is_none()));
}

#[tokio::test]
async fn test_score_rows_empty() {
    let results = batch_scorer(2)
        .score_rows(Vec::new(), BatchMetric::Similarity)
        .await
        .expect("batch");

    assert!(results.is_empty());
}

#[test]
fn test_row_score_serialization_omits_unused_metric() {
    let row = RowScore {
        index: 3,
        actual: "甲".to_string(),
        predicted: "乙".to_string(),
        similarity: None,
        accuracy: Some(PairMatch { matches: 0 }),
    };

    let json = serde_json::to_value(&row).expect("serialize");
    assert_eq!(json["index"], 3);
    assert_eq!(json["accuracy"]["matches"], 0);
    assert!(json.get("similarity").is_none());
}
