//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for agent-gauge
#[derive(Parser, Debug)]
#[command(name = "agent-gauge")]
#[command(author, version, about = "Policy-gated agent evaluation harness")]
#[command(long_about = r#"
Agent Gauge runs a fixed set of evaluation cases through a policy-gated
tool-using agent, scores the tool trajectory and answer correctness of each
case, and writes a markdown report.

Each case flows through four stages:
1. Policy Gate: the input is checked against the configured rule set
2. Invocation: the agent answers, recording every tool call in order
3. Scoring: the trajectory is matched against the expected tools and the
   answer is graded against the reference
4. Report: one section per case, written to the report file

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./gauge.toml        Project-level config
3. ~/.config/agent-gauge/config.toml   Global config

Example:
  agent-gauge
  agent-gauge --report out/eval.md -vv
  agent-gauge --advisory --config ci/gauge.toml
"#)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Write the report to this path instead of the configured one
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Treat the policy gate as advisory: log decisions but never block
    #[arg(long)]
    pub advisory: bool,

    /// Skip the correctness judgment call for every case
    #[arg(long)]
    pub no_judge: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
