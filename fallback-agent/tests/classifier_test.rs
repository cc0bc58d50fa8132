//! Unit tests for [`fallback_agent::classify`] rule ordering and matching.
//! BDD style: each test documents scenario and expected outcome.

use agent_core::ToolId;
use fallback_agent::classify;

// --- Rule 1: calculator trigger words ---

/// **Test: "plus", "minus", and "times" each route to the calculator.**
#[test]
fn classify_arithmetic_words_pick_calculator() {
    assert_eq!(classify("What is 10 plus 5?"), Some(ToolId::Calculator));
    assert_eq!(classify("what is 9 minus 3"), Some(ToolId::Calculator));
    assert_eq!(classify("2 times 4 please"), Some(ToolId::Calculator));
}

/// **Test: matching is case-insensitive on the whole prompt.**
#[test]
fn classify_is_case_insensitive() {
    assert_eq!(classify("WHAT IS 10 PLUS 5"), Some(ToolId::Calculator));
    assert_eq!(classify("ReMeMbEr my pet is Rex"), Some(ToolId::MemorySave));
    assert_eq!(classify("WHAT IS MY pet"), Some(ToolId::MemoryRead));
}

/// **Test: trigger words match as substrings, even inside other words.**
#[test]
fn classify_matches_substrings() {
    // "surplus" contains "plus"; substring matching is the contract.
    assert_eq!(classify("we have a surplus"), Some(ToolId::Calculator));
}

// --- Rule ordering: first match wins ---

/// **Test: a remember-request containing "plus" resolves to calculator, not memory save.**
#[test]
fn classify_calculator_outranks_memory_save() {
    assert_eq!(classify("remember 10 plus 5"), Some(ToolId::Calculator));
}

/// **Test: "remember" outranks "what is my" when both appear.**
#[test]
fn classify_memory_save_outranks_memory_read() {
    assert_eq!(
        classify("remember what is my favorite"),
        Some(ToolId::MemorySave)
    );
}

// --- Rule 2 and 3 ---

/// **Test: "remember" routes to memory save.**
#[test]
fn classify_remember_picks_memory_save() {
    assert_eq!(
        classify("Remember my cat's name is Fluffy"),
        Some(ToolId::MemorySave)
    );
}

/// **Test: "what is my" routes to memory read.**
#[test]
fn classify_what_is_my_picks_memory_read() {
    assert_eq!(classify("What is my cat's name?"), Some(ToolId::MemoryRead));
}

/// **Test: "what is" without "my" is not a memory read.**
#[test]
fn classify_what_is_alone_does_not_match() {
    assert_eq!(classify("What is the weather?"), None);
}

// --- No match ---

/// **Test: prompts with no trigger substring classify as no match.**
#[test]
fn classify_unrelated_prompt_returns_none() {
    assert_eq!(classify("Tell me a joke"), None);
    assert_eq!(classify(""), None);
    assert_eq!(classify("10 + 5"), None);
}
