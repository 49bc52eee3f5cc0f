//! Policy gate adapter

pub mod gate;

pub use gate::RuleBasedPolicyGate;
