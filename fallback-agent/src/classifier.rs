//! Shared pure functions for prompt intent classification.
//!
//! Rules are checked in a fixed order and the first match wins; later rules are
//! not evaluated once one matches. Ordering is significant: a calculator trigger
//! word can co-occur with other phrasing ("remember 10 plus 5" classifies as
//! calculator, not memory save). Matching is case-insensitive on the whole
//! prompt.

use agent_core::ToolId;

/// Substrings that route a prompt to the calculator.
const CALCULATOR_WORDS: [&str; 3] = ["plus", "minus", "times"];

/// Substring that routes a prompt to memory save.
const MEMORY_SAVE_WORD: &str = "remember";

/// Substring that routes a prompt to memory read.
const MEMORY_READ_PHRASE: &str = "what is my";

/// Returns the first matching tool for `prompt`, or `None` when no rule applies.
pub fn classify(prompt: &str) -> Option<ToolId> {
    let lower = prompt.to_lowercase();

    if CALCULATOR_WORDS.iter().any(|word| lower.contains(word)) {
        return Some(ToolId::Calculator);
    }
    if lower.contains(MEMORY_SAVE_WORD) {
        return Some(ToolId::MemorySave);
    }
    if lower.contains(MEMORY_READ_PHRASE) {
        return Some(ToolId::MemoryRead);
    }
    None
}
