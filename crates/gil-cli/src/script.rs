//! JSON-lines invocation scripts.
//!
//! Each non-blank line not starting with `#` is one invocation object:
//! `{"entry": "invoke" | "query", "function": "...", "args": [...]}`.
//! `entry` defaults to `invoke`.

use std::io::BufRead;

use gil_contract::{GoodsInspectionContract, Invocation};
use gil_store::KvStore;

/// Result of one script line.
#[derive(Debug)]
pub struct Outcome {
    /// 1-based line number in the script.
    pub line: usize,
    pub invocation: Option<Invocation>,
    pub result: Result<Option<Vec<u8>>, String>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct ScriptReport {
    pub outcomes: Vec<Outcome>,
}

impl ScriptReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_ok()).count()
    }
}

/// Run every invocation in `reader` against `contract`, in order.
///
/// A failing invocation is recorded and the script continues. Only I/O
/// errors while reading the script abort the run.
pub fn run_script<S: KvStore, R: BufRead>(
    contract: &GoodsInspectionContract<S>,
    reader: R,
) -> std::io::Result<ScriptReport> {
    let mut report = ScriptReport::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let outcome = match serde_json::from_str::<Invocation>(trimmed) {
            Ok(invocation) => Outcome {
                line: index + 1,
                result: contract.handle(&invocation).map_err(|e| e.to_string()),
                invocation: Some(invocation),
            },
            Err(e) => Outcome {
                line: index + 1,
                invocation: None,
                result: Err(format!("invalid invocation: {e}")),
            },
        };
        report.outcomes.push(outcome);
    }
    Ok(report)
}
