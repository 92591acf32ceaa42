//! Shared test harness for stages.

pub mod stage_contract;
