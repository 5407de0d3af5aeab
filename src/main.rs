use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use explmap::eval::{mean_average_precision, EvalReport};
use explmap::{load_gold_file, load_pred_file};

/// Score ranked explanation predictions against a gold table (MAP).
#[derive(Parser, Debug)]
#[command(name = "evaluate")]
struct Args {
    /// Gold explanations table (TSV with QuestionID, explanation, flags).
    #[arg(long)]
    gold: PathBuf,

    /// Predicted (question, explanation) pairs: TSV, no header, best first.
    pred: PathBuf,

    /// Print a JSON report instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let gold = load_gold_file(&args.gold)
        .with_context(|| format!("failed to load gold table {}", args.gold.display()))?;
    let pred = load_pred_file(&args.pred)
        .with_context(|| format!("failed to load prediction table {}", args.pred.display()))?;

    eprintln!(
        "{} gold questions, {} predicted questions",
        gold.len(),
        pred.len()
    );

    let mut report = EvalReport::new(gold.len(), pred.len());
    let json = args.json;

    let map = mean_average_precision(
        &gold,
        &pred,
        Some(&mut |question: &str, score: f64| {
            if !json {
                eprintln!("{question} {score}");
            }
            report.record(question, score);
        }),
    );
    report.mean_average_precision = map;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("MAP: {map}");
    }

    Ok(())
}
