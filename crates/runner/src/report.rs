//! Text and JSON rendering of analysis results

use roleta_core::{AnalysisResult, HistoryBuffer};

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn join(numbers: impl Iterator<Item = u8>, sep: &str) -> String {
    numbers.map(|n| n.to_string()).collect::<Vec<_>>().join(sep)
}

/// `History (n/capacity): a, b, c`
pub fn history_line(history: &HistoryBuffer) -> String {
    let listed = if history.is_empty() {
        "empty".to_string()
    } else {
        join(history.iter(), ", ")
    };
    format!("History ({}/{}): {}", history.len(), history.capacity(), listed)
}

/// Multi-line report for a terminal
pub fn render_text(history: &HistoryBuffer, result: &AnalysisResult) -> String {
    let mut out = String::new();
    if let Some(last) = history.last() {
        out.push_str(&format!("Last number: {last}\n"));
    }
    out.push_str(&format!("{}\n", history_line(history)));
    out.push_str(&format!("Diagnosis: {}\n", result.diagnosis));
    out.push_str(&format!("Strategy: {}\n", result.strategy));

    let numbers = result.recommended();
    if !numbers.is_empty() {
        let listed = join(numbers.iter().copied(), " - ");
        out.push_str(&format!("Recommended ({}): {listed}\n", numbers.len()));
    }
    out
}

/// Single-line JSON encoding of a result
pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}
