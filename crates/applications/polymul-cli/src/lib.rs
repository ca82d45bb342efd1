//! Command-line surface for polymul.
//!
//! Running `polymul` with no subcommand prints the roots of unity for the
//! configured order (4 unless overridden), one `Root <k>: (re±imi)` line
//! each. Subcommands expose the multiplication methods and the canned
//! Karatsuba/Toom-3 demonstrations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use num_bigint::BigInt;
use polymul_core::config::{OutputFormat, Settings};
use polymul_core::prelude::*;
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Roots of unity and fast multiplication demos
#[derive(Parser, Debug, Clone)]
#[command(name = "polymul", version, about)]
pub struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format flag
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Demo selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoArg {
    /// Karatsuba examples
    Karatsuba,
    /// Toom-3 comparisons
    Toom3,
}

impl From<DemoArg> for Demo {
    fn from(arg: DemoArg) -> Self {
        match arg {
            DemoArg::Karatsuba => Demo::Karatsuba,
            DemoArg::Toom3 => Demo::Toom3,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the n-th roots of unity
    Roots {
        /// Order n (defaults to roots.order from the configuration)
        #[arg(short = 'n', long = "order")]
        n: Option<usize>,
    },
    /// Multiply two integers with Karatsuba's algorithm
    #[command(allow_negative_numbers = true)]
    Karatsuba {
        /// Left operand
        x: BigInt,
        /// Right operand
        y: BigInt,
    },
    /// Multiply two integers with Toom-3
    #[command(allow_negative_numbers = true)]
    Toom3 {
        /// Left operand
        x: BigInt,
        /// Right operand
        y: BigInt,
    },
    /// Compare native, Karatsuba and Toom-3 products
    #[command(allow_negative_numbers = true)]
    Compare {
        /// Left operand
        x: BigInt,
        /// Right operand
        y: BigInt,
    },
    /// Run the built-in demonstrations (both when none is named)
    Demo {
        /// Which demonstration to run
        #[arg(value_enum)]
        which: Option<DemoArg>,
    },
}

impl Cli {
    /// Load configuration and apply command-line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())
            .context("failed to load configuration")?;

        if let Some(format) = self.format {
            settings.output = format.into();
        }
        if let Some(level) = &self.log_level {
            settings.logging.level = level.to_lowercase();
        }
        settings.validate()?;
        Ok(settings)
    }
}

/// Execute the parsed command, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> Result<()> {
    let command = cli
        .command
        .clone()
        .unwrap_or(Command::Roots { n: None });

    match command {
        Command::Roots { n } => {
            let n = n.unwrap_or(settings.roots.order);
            info!(n, "generating roots of unity");
            let roots = roots_of_unity(n)?;
            match settings.output {
                OutputFormat::Text => write!(out, "{}", render_text(&roots))?,
                OutputFormat::Json => writeln!(out, "{}", render_json(&roots)?)?,
            }
        }
        Command::Karatsuba { x, y } => {
            write_product(out, settings.output, MultiplicationMethod::Karatsuba, &x, &y)?
        }
        Command::Toom3 { x, y } => {
            write_product(out, settings.output, MultiplicationMethod::Toom3, &x, &y)?
        }
        Command::Compare { x, y } => {
            info!(%x, %y, "comparing multiplication methods");
            let comparison = compare(&x, &y);
            match settings.output {
                OutputFormat::Text => write!(out, "{}", render_comparison(&comparison))?,
                OutputFormat::Json => {
                    let value = comparison_json(&comparison);
                    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
                }
            }
        }
        Command::Demo { which } => {
            let demos = match which {
                Some(demo) => vec![Demo::from(demo)],
                None => Demo::ALL.to_vec(),
            };
            info!(count = demos.len(), "running demos");
            match settings.output {
                OutputFormat::Text => {
                    let blocks: Vec<String> = demos.iter().map(Demo::render).collect();
                    write!(out, "{}", blocks.join("\n"))?;
                }
                OutputFormat::Json => {
                    let value: Vec<Value> = demos
                        .iter()
                        .map(|demo| {
                            let examples: Vec<Value> =
                                demo.run().iter().map(comparison_json).collect();
                            json!({ "demo": demo, "method": demo.method(), "examples": examples })
                        })
                        .collect();
                    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn write_product<W: Write>(
    out: &mut W,
    format: OutputFormat,
    method: MultiplicationMethod,
    x: &BigInt,
    y: &BigInt,
) -> Result<()> {
    info!(%method, %x, %y, "multiplying");
    let product = method.multiply(x, y);
    let verified = product == x * y;

    match format {
        OutputFormat::Text => {
            writeln!(out, "Result: {x} × {y} = {product}")?;
            writeln!(out, "Verification: {verified}")?;
        }
        OutputFormat::Json => {
            let value = json!({
                "method": method,
                "x": x.to_string(),
                "y": y.to_string(),
                "product": product.to_string(),
                "verified": verified,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}

fn comparison_json(comparison: &Comparison) -> Value {
    json!({
        "x": comparison.x.to_string(),
        "y": comparison.y.to_string(),
        "standard": comparison.standard.to_string(),
        "karatsuba": comparison.karatsuba.to_string(),
        "toom3": comparison.toom3.to_string(),
        "all_agree": comparison.all_agree(),
    })
}
