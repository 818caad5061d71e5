use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use credit_core::impls::DEFAULT_REMOTE_LATENCY;
use credit_core::{CreditDecisionMaker, CreditScore, Decision, RemoteDecisionService};

/// Runs one credit decision against the (simulated) remote decision service.
#[derive(Debug, Parser)]
#[command(name = "credit-cli", version)]
struct Cli {
    /// Credit score to decide on (any integer).
    #[arg(allow_negative_numbers = true)]
    score: i32,

    /// Simulated latency of the remote call, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_REMOTE_LATENCY.as_millis() as u64)]
    latency_ms: u64,

    /// Print a JSON report instead of the bare label.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct DecisionReport {
    score: CreditScore,
    decision: Decision,
    label: &'static str,
    elapsed_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // (A) 遅いリモートサービスを注入して decision maker を組み立てる
    let service = RemoteDecisionService::with_latency(Duration::from_millis(cli.latency_ms));
    let decision_maker = CreditDecisionMaker::new(service);

    // (B) 判定（latency の分だけブロックする）
    let started = Instant::now();
    let decision = decision_maker
        .make_credit_decision(cli.score)
        .with_context(|| format!("credit decision failed for score={}", cli.score))?;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    tracing::info!(score = cli.score, %decision, elapsed_ms, "decision made");

    // (C) 出力
    if cli.json {
        let report = DecisionReport {
            score: CreditScore::new(cli.score),
            decision,
            label: decision.label(),
            elapsed_ms,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{decision}");
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
