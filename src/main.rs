//! semf1 batch scorer entrypoint.
//!
//! Usage: `semf1 <rows.tsv|-> [--acc] [--no-header]`
//!
//! Reads `actual<TAB>predicted` rows, scores them and prints one JSON object
//! per row on stdout. Logs go to stderr (`RUST_LOG` controls verbosity).

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, bail};
use mimalloc::MiMalloc;

use semf1::{
    BatchMetric, BatchScorer, Config, JiebaTokenizer, ScoringConfig, SimilarityScorer, Thesaurus,
    parse_rows,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

struct Args {
    input: String,
    metric: BatchMetric,
    skip_header: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut input = None;
    let mut metric = BatchMetric::Similarity;
    let mut skip_header = true;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--acc" => metric = BatchMetric::Accuracy,
            "--no-header" => skip_header = false,
            flag if flag.starts_with("--") => bail!("unknown flag: {flag}"),
            path => {
                if input.replace(path.to_string()).is_some() {
                    bail!("only one input file may be given");
                }
            }
        }
    }

    let Some(input) = input else {
        bail!("usage: semf1 <rows.tsv|-> [--acc] [--no-header]");
    };

    Ok(Args {
        input,
        metric,
        skip_header,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        dict_path = %config.dict_path.display(),
        max_workers = config.max_workers,
        hmm = config.hmm,
        "semf1 starting"
    );

    let thesaurus = Arc::new(Thesaurus::new());
    if thesaurus.load_once(&config.dict_path).is_degraded() {
        tracing::warn!("Scoring without thesaurus: synonyms and categories disabled");
    }

    let mut tokenizer = JiebaTokenizer::new(config.hmm);
    if let Some(path) = &config.user_dict_path {
        tokenizer = tokenizer.with_user_dict(path)?;
    }

    let scorer = SimilarityScorer::with_config(thesaurus, tokenizer, ScoringConfig::from_env())?;
    let batch = BatchScorer::new(Arc::new(scorer), config.max_workers);

    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("failed to open input {}", args.input))?;
        Box::new(BufReader::new(file))
    };
    let rows = parse_rows(reader, args.skip_header).context("failed to read input rows")?;

    tracing::info!(rows = rows.len(), metric = ?args.metric, "Scoring rows");
    let results = batch.score_rows(rows, args.metric).await?;

    let mut out = BufWriter::new(io::stdout().lock());
    for result in &results {
        serde_json::to_writer(&mut out, result)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    tracing::info!(rows = results.len(), "semf1 done");
    Ok(())
}
