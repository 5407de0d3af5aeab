use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use explmap::baseline::{collect_explanations, load_questions_file, rank_nearest, SparseVector, TfidfVectorizer};
use indicatif::{ProgressBar, ProgressStyle};

/// Rank candidate explanations for each question by TF-IDF cosine distance,
/// emitting a prediction table the scorer can consume.
#[derive(Parser, Debug)]
#[command(name = "baseline")]
struct Args {
    /// How many nearest explanations to emit per question.
    #[arg(short, long, default_value_t = 100)]
    nearest: usize,

    /// Directory of explanation tables, searched recursively.
    tables: PathBuf,

    /// Question table (TSV with QuestionID and question columns).
    questions: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let explanations = collect_explanations(&args.tables).with_context(|| {
        format!(
            "failed to read explanation tables from {}",
            args.tables.display()
        )
    })?;
    let questions = load_questions_file(&args.questions)
        .with_context(|| format!("failed to load questions from {}", args.questions.display()))?;

    let texts: Vec<&str> = explanations.iter().map(|e| e.text.as_str()).collect();
    let vectorizer = TfidfVectorizer::fit(&texts);
    let corpus: Vec<SparseVector> = explanations
        .iter()
        .map(|e| vectorizer.transform(&e.text))
        .collect();

    let progress = ProgressBar::new(questions.len() as u64);
    progress.set_style(ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")?.progress_chars("=> "));
    progress.set_message(args.questions.display().to_string());

    for question in &questions {
        let query = vectorizer.transform(&question.text);
        for index in rank_nearest(&query, &corpus, args.nearest) {
            println!("{}\t{}", question.id, explanations[index].uid);
        }
        progress.inc(1);
    }
    progress.finish();

    Ok(())
}
