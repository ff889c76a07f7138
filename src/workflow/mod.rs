pub mod unit_flow;

pub use unit_flow::{process_unit, UnitOutcome};
