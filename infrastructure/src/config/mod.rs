//! Configuration file model and loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    CaseConfig, FileConfig, GateConfig, GateRuleAction, GateRuleConfig, JudgeConfig,
    ProviderConfig, ReportConfig,
};
pub use loader::ConfigLoader;
