//! Canned demonstrations of the multiplication methods.
//!
//! Each demo runs a fixed list of operand pairs and renders a titled text
//! block. The Karatsuba demo prints one `Example i` line per pair with its
//! verification against native multiplication; the Toom-3 demo prints the
//! full method comparison for each pair.

use crate::compare::{compare, Comparison, MultiplicationMethod};
use crate::report::render_comparison;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use tracing::debug;

/// Operand pairs of the Karatsuba demo.
pub const KARATSUBA_EXAMPLES: [(i64, i64); 3] = [(123, 456), (12345, 6789), (1234567, 7654321)];

/// Operand pairs of the Toom-3 demo.
pub const TOOM3_EXAMPLES: [(i64, i64); 2] = [(123, 456), (1234567, 7654321)];

/// Available demonstrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demo {
    /// Karatsuba examples with verification
    Karatsuba,
    /// Toom-3 comparison against the other methods
    Toom3,
}

impl Demo {
    /// All demos, in the order they are shown.
    pub const ALL: [Demo; 2] = [Self::Karatsuba, Self::Toom3];

    /// Heading printed above the demo.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Karatsuba => "Karatsuba Multiplication Algorithm Demonstration",
            Self::Toom3 => "Toom-3 Multiplication Algorithm Demonstration",
        }
    }

    /// The operand pairs this demo multiplies.
    pub fn examples(&self) -> &'static [(i64, i64)] {
        match self {
            Self::Karatsuba => &KARATSUBA_EXAMPLES,
            Self::Toom3 => &TOOM3_EXAMPLES,
        }
    }

    /// Method whose result the demo is about.
    pub fn method(&self) -> MultiplicationMethod {
        match self {
            Self::Karatsuba => MultiplicationMethod::Karatsuba,
            Self::Toom3 => MultiplicationMethod::Toom3,
        }
    }

    /// Multiply every example pair with every method.
    pub fn run(&self) -> Vec<Comparison> {
        debug!(demo = %self, "running demo");
        self.examples()
            .iter()
            .map(|&(x, y)| compare(&BigInt::from(x), &BigInt::from(y)))
            .collect()
    }

    /// Titled text block for this demo.
    pub fn render(&self) -> String {
        let title = self.title();
        let mut out = format!("{title}\n{}\n", "-".repeat(title.len()));

        let blocks: Vec<String> = self
            .run()
            .iter()
            .enumerate()
            .map(|(i, comparison)| match self {
                Self::Karatsuba => example_block(i + 1, comparison),
                Self::Toom3 => render_comparison(comparison),
            })
            .collect();
        out.push_str(&blocks.join("\n"));
        out
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Karatsuba => write!(f, "karatsuba"),
            Self::Toom3 => write!(f, "toom3"),
        }
    }
}

fn example_block(number: usize, comparison: &Comparison) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Example {number}: {} × {} = {}",
        comparison.x, comparison.y, comparison.karatsuba
    );
    let _ = writeln!(
        out,
        "Verification: {}",
        comparison.karatsuba == comparison.standard
    );
    out
}
