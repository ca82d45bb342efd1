//! Rendering of results for the command line.

use crate::compare::{Comparison, MultiplicationMethod};
use crate::display::ComplexDisplay;
use crate::error::PolymulResult;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One root of unity as a serializable row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootRecord {
    /// Index `k` of the root
    pub index: usize,
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl RootRecord {
    /// Build the record for root `index`.
    pub fn new(index: usize, root: Complex64) -> Self {
        Self {
            index,
            re: root.re,
            im: root.im,
        }
    }
}

/// One `Root <k>: (re±imi)` line per root.
pub fn render_text(roots: &[Complex64]) -> String {
    let mut out = String::new();
    for (k, root) in roots.iter().enumerate() {
        // writing into a String cannot fail
        let _ = writeln!(out, "Root {k}: {}", ComplexDisplay(*root));
    }
    out
}

/// Pretty-printed JSON array of [`RootRecord`]s.
pub fn render_json(roots: &[Complex64]) -> PolymulResult<String> {
    let records: Vec<RootRecord> = roots
        .iter()
        .enumerate()
        .map(|(k, root)| RootRecord::new(k, *root))
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Human-readable comparison block.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Numbers: {} × {}", comparison.x, comparison.y);
    for method in MultiplicationMethod::ALL {
        let label = format!("{method}:");
        let _ = writeln!(out, "{label:<11}{}", comparison.product(method));
    }
    let _ = writeln!(out, "All methods agree: {}", comparison.all_agree());
    out
}
