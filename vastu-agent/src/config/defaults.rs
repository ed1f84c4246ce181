//! Default value functions for serde deserialization.

pub fn agent_id() -> String {
    "VAC-E".to_string()
}

pub fn movement_weight() -> u32 {
    2
}

pub fn turn_weight() -> u32 {
    1
}

pub fn max_expansions() -> usize {
    100_000
}
