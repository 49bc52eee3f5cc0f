//! CLI entrypoint for agent-gauge
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration is loaded once here, the adapters
//! are constructed once, and everything is passed down explicitly.

use anyhow::{Context, Result};
use clap::Parser;
use gauge_infrastructure::{ConfigLoader, FileConfig};
use gauge_presentation::Cli;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        print_config_locations();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    info!(report = %config.report.path, "Configuration loaded");

    run(cli, config).await
}

fn print_config_locations() {
    println!("Configuration file locations (highest priority first):");
    println!("  1. --config <path>");
    println!("  2. ./gauge.toml or ./.gauge.toml");
    match ConfigLoader::global_config_path() {
        Some(path) => println!("  3. {}", path.display()),
        None => println!("  3. (no global config directory on this platform)"),
    }
}

#[cfg(feature = "bedrock")]
async fn run(cli: Cli, config: FileConfig) -> Result<()> {
    use gauge_application::{EvaluationParams, GateMode, NoProgress, RunEvaluationUseCase};
    use gauge_infrastructure::providers::bedrock;
    use gauge_infrastructure::{
        BedrockAgentInvoker, BuiltinProvider, QaJudge, RuleBasedPolicyGate, ToolRegistry,
    };
    use gauge_presentation::{ConsoleSummary, MarkdownReport, ProgressReporter, SimpleProgress};
    use std::sync::Arc;
    use std::time::Duration;

    info!("Starting agent-gauge evaluation run");

    let cases = config.evaluation_cases();

    // === Dependency Injection ===
    // Policy gate: compiled from the configured rule set
    let gate = Arc::new(
        RuleBasedPolicyGate::from_rules(&config.gate.rules)
            .map_err(|e| anyhow::anyhow!("Failed to build policy gate: {}", e))?,
    );

    // Tool registry with all providers
    let mut registry = ToolRegistry::new().register(BuiltinProvider::new());
    #[cfg(feature = "web-tools")]
    {
        registry = registry.register(gauge_infrastructure::WebToolProvider::new());
    }
    registry
        .discover()
        .await
        .map_err(|e| anyhow::anyhow!("Tool discovery failed: {}", e))?;
    let registry = Arc::new(registry);

    // Bedrock client, shared by the invoker and the judge
    let client = Arc::new(bedrock::connect(&config.provider.region).await);

    let max_tokens = config
        .provider
        .max_tokens_i32()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    let invoker = Arc::new(BedrockAgentInvoker::new(
        client.clone(),
        registry,
        &config.provider.model_id,
        max_tokens,
        config.provider.max_steps as usize,
    ));

    let judge_model = if config.judge.model_id.is_empty() {
        config.provider.model_id.clone()
    } else {
        config.judge.model_id.clone()
    };
    let judge = Arc::new(QaJudge::new(client, judge_model, max_tokens));

    // Run parameters: CLI flags override the file configuration
    let gate_mode = if cli.advisory {
        GateMode::Advisory
    } else {
        config.gate.mode
    };
    let case_timeout = match config.provider.case_timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let params = EvaluationParams::default()
        .with_gate_mode(gate_mode)
        .with_judge_enabled(config.judge.enabled && !cli.no_judge)
        .with_case_timeout(case_timeout);

    let use_case = RunEvaluationUseCase::new(gate, invoker, judge, params);

    // Progress bars and log lines fight over the terminal, so verbose
    // runs get plain line-per-case progress instead.
    let results = if cli.quiet {
        use_case.execute(&cases, &NoProgress).await?
    } else if cli.verbose > 0 {
        use_case.execute(&cases, &SimpleProgress).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute(&cases, &progress).await?
    };

    let report_path = cli
        .report
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.report.path));
    MarkdownReport::write(&results, &report_path)
        .with_context(|| format!("Failed to write report to {}", report_path.display()))?;

    if !cli.quiet {
        print!("{}", ConsoleSummary::format(&results));
        println!("\nReport written to {}", report_path.display());
    }

    Ok(())
}

#[cfg(not(feature = "bedrock"))]
async fn run(_cli: Cli, _config: FileConfig) -> Result<()> {
    anyhow::bail!("this build was compiled without the `bedrock` feature; no agent provider is available")
}
