//! Test fixtures for integration tests.

use std::io::Write;
use std::sync::Arc;

use semf1::{MockTokenizer, PreSegmentedTokenizer, SimilarityScorer, Thesaurus};
use tempfile::NamedTempFile;

/// A small Cilin-style dictionary covering every category class.
pub const CILIN_FIXTURE: &str = "\
Aa01A01= 学生 学员 学子
Ab02B01= 老师 教师 先生
Da01A01= 问题 疑问
Fa01A01= 跑步 奔跑
Fb02A01= 学习 研习 念书
Ga01A01= 快乐 高兴 愉快 开心
Hb01A01= 聪明 伶俐 智慧
Ka01A01= 非常 十分 很
Ka02A01@ 也
La01A01= 您 阁下
AB01A1 坏行 被跳过
";

pub fn write_dictionary(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp dictionary");
    file.write_all(text.as_bytes()).expect("write dictionary");
    file.flush().expect("flush dictionary");
    file
}

pub fn fixture_thesaurus() -> Arc<Thesaurus> {
    Arc::new(Thesaurus::parse(CILIN_FIXTURE))
}

pub fn pre_segmented_scorer() -> SimilarityScorer<PreSegmentedTokenizer> {
    SimilarityScorer::new(fixture_thesaurus(), PreSegmentedTokenizer)
}

/// Canned segmentations for unsegmented sentences used across tests.
pub fn mock_tokenizer() -> MockTokenizer {
    MockTokenizer::new()
        .with("学生非常快乐", &["学生", "非常", "快乐"])
        .with("学员十分高兴", &["学员", "十分", "高兴"])
        .with("老师很聪明", &["老师", "很", "聪明"])
        .with("聪明的老师", &["聪明", "的", "老师"])
}
