// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use cadence::config::{load_and_validate_config, RuntimeBuilder};
use cadence::model::{Outcome, StageRequest};
use cadence::traits::PipelineExecutor;

/// Parsed command line: config files plus an optional generator count override
struct CliArgs {
    config_files: Vec<String>,
    count_override: Option<i64>,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut config_files = Vec::new();
    let mut count_override = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--count" {
            let value = iter
                .next()
                .ok_or_else(|| anyhow!("--count requires a value"))?;
            count_override = Some(
                value
                    .parse::<i64>()
                    .with_context(|| format!("invalid --count value '{}'", value))?,
            );
        } else {
            config_files.push(arg.clone());
        }
    }

    Ok(CliArgs {
        config_files,
        count_override,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    if cli.config_files.is_empty() {
        eprintln!("Usage: cadence <config1.yaml> [config2.yaml ...] [--count N]");
        eprintln!("Example: cadence configs/pipeline.yaml");
        eprintln!("Example: cadence configs/pipeline.yaml --count 5");
        std::process::exit(1);
    }

    println!("🚀 Cadence Paced Pipeline Demo");
    println!("═══════════════════════════════");
    if let Some(count) = cli.count_override {
        println!("Count override: {}", count);
    }
    println!("Config files: {:?}", cli.config_files);
    println!();

    for (i, config_file) in cli.config_files.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(80));
        }

        if let Err(e) = run_single_config(config_file, cli.count_override).await {
            eprintln!("❌ Failed to execute {}: {:#}", config_file, e);
        }
    }

    println!("\n🎉 Demo complete!");
    Ok(())
}

async fn run_single_config(config_file: &str, count_override: Option<i64>) -> Result<()> {
    let start_time = Instant::now();

    let mut config = load_and_validate_config(config_file)
        .map_err(|e| anyhow!(e.to_string()))
        .with_context(|| format!("failed to load {}", config_file))?;

    if let Some(count) = count_override {
        config.override_generator_count(count);
    }

    let (stages, order, executor, failure_strategy) =
        RuntimeBuilder::from_config(&config).context("failed to build pipeline runtime")?;

    println!("📋 Configuration: {}", config_file);
    println!("🧵 Pipeline: {}", config.pipeline);
    println!("🔢 Stages: {}", order.len());
    println!("🛡️  Failure Strategy: {:?}", failure_strategy);

    let ordered_stages: Vec<String> = order.iter().cloned().collect();

    // Execute the pipeline
    let execution_start = Instant::now();
    let (results, run_metadata) = executor
        .execute_with_strategy(stages, order, StageRequest::empty(), failure_strategy)
        .await?;
    let execution_time = execution_start.elapsed();

    println!("\n📊 Execution Results:");
    println!("⏱️  Execution Time: {:?}", execution_time);
    println!("🔢 Stages Executed: {}", results.len());

    println!("\n🔄 Stage Chain:");
    for (i, stage_id) in ordered_stages.iter().enumerate() {
        if let Some(result) = results.get(stage_id) {
            let output = match &result.outcome {
                Some(Outcome::Values(values)) => format!("{:?}", values),
                Some(Outcome::Total(total)) => format!("total {}", total),
                Some(Outcome::Error(detail)) => format!("error: {}", detail.message),
                None => "[No outcome]".to_string(),
            };
            println!("  {}. {} → {}", i + 1, stage_id, output);

            if let Some(metadata) = run_metadata.metadata.get(stage_id) {
                println!("     📝 Metadata: {} entries", metadata.len());
                for (key, value) in metadata.iter().take(3) {
                    println!("        • {}: {}", key, value);
                }
                if metadata.len() > 3 {
                    println!("        • ... and {} more", metadata.len() - 3);
                }
            } else {
                println!("     📝 Metadata: no entries");
            }
        }
    }

    // Final reduction summary
    if let Some(final_stage) = ordered_stages.last() {
        if let Some(final_result) = results.get(final_stage) {
            if let Some(Outcome::Total(total)) = &final_result.outcome {
                println!("\n🎯 Final Total: {}", total);
            }
        }
    }

    let total_time = start_time.elapsed();
    println!("\n⏱️  Total Time (including config load): {:?}", total_time);

    Ok(())
}
