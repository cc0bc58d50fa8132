//! Calculator executor: builds a binary addition expression from the first two
//! integers in the prompt and evaluates it with a fixed two-operand parser.
//!
//! The expression is always `"N1 + N2"` no matter which trigger word matched
//! ("plus", "minus", or "times"); with fewer than two integers it falls back to
//! the inert `"0+0"`. This mirrors the upstream service's observable contract.

use agent_core::{ToolError, ToolId, ToolResponse};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{Tool, ToolOutput};

static DIGIT_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// Executor for prompts containing an arithmetic trigger word.
#[derive(Debug, Clone, Default)]
pub struct CalculatorTool;

impl CalculatorTool {
    pub fn new() -> Self {
        Self
    }
}

/// All decimal digit runs in `prompt`, in order of appearance.
fn digit_runs(prompt: &str) -> Vec<&str> {
    DIGIT_RUNS.find_iter(prompt).map(|m| m.as_str()).collect()
}

/// Evaluates a two-operand integer expression: `<lhs> <op> <rhs>` with one of
/// `+ - *`. This is the only arithmetic the agent performs; there is no
/// general expression grammar.
pub(crate) fn evaluate(expr: &str) -> Result<i64, ToolError> {
    let trimmed = expr.trim();
    let (index, op) = trimmed
        .char_indices()
        .find(|(_, c)| matches!(c, '+' | '-' | '*'))
        .ok_or_else(|| ToolError::Evaluation(format!("no operator in '{}'", expr)))?;

    let lhs = trimmed[..index].trim();
    let rhs = trimmed[index + op.len_utf8()..].trim();

    let lhs: i64 = lhs
        .parse()
        .map_err(|_| ToolError::Evaluation(format!("invalid operand '{}'", lhs)))?;
    let rhs: i64 = rhs
        .parse()
        .map_err(|_| ToolError::Evaluation(format!("invalid operand '{}'", rhs)))?;

    let result = match op {
        '+' => lhs.checked_add(rhs),
        '-' => lhs.checked_sub(rhs),
        '*' => lhs.checked_mul(rhs),
        _ => unreachable!("operator set is fixed above"),
    };
    result.ok_or_else(|| ToolError::Evaluation(format!("overflow evaluating '{}'", expr)))
}

#[async_trait]
impl Tool for CalculatorTool {
    fn id(&self) -> ToolId {
        ToolId::Calculator
    }

    async fn run(&self, prompt: &str) -> Result<Option<ToolOutput>, ToolError> {
        let numbers = digit_runs(prompt);
        let expr = if numbers.len() >= 2 {
            format!("{} + {}", numbers[0], numbers[1])
        } else {
            "0+0".to_string()
        };
        debug!(expr = %expr, count = numbers.len(), "calculator expression built");

        let result = evaluate(&expr)?;
        Ok(Some(ToolOutput {
            tool_input: expr,
            response: ToolResponse::Calculation { result },
        }))
    }
}
