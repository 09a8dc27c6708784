//! @acp:module "Analyze Command"
//! @acp:summary "Score a post and render the result"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;

use crate::analyze::{Analyzer, PostInput};
use crate::config::ScoringConfig;
use crate::language::Language;
use crate::linguistic::HeuristicProvider;
use crate::platform::Platform;
use crate::score::{AnalysisResult, Dimension, FeedbackKind};

/// Output format for the analyze command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled progress bars and an annotated feedback list
    Text,
    /// The raw `AnalysisResult` as pretty JSON
    Json,
}

/// Options for the analyze command
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Post text; `None` falls back to `file`, then stdin
    pub text: Option<String>,
    /// Read the post text from a file
    pub file: Option<PathBuf>,
    /// Target platform name
    pub platform: String,
    /// Explicit language tag; `None` auto-detects
    pub language: Option<String>,
    /// Scoring config file overriding the reference policy
    pub config: Option<PathBuf>,
    /// Disable the linguistic rule group
    pub basic: bool,
    pub format: OutputFormat,
}

/// Execute the analyze command
pub fn execute_analyze(options: AnalyzeOptions) -> Result<()> {
    let text = read_text(&options)?;
    let platform: Platform = options.platform.parse()?;
    let language: Option<Language> = options
        .language
        .as_deref()
        .map(str::parse)
        .transpose()?;
    let config = match &options.config {
        Some(path) => ScoringConfig::load(path)
            .with_context(|| format!("loading scoring config {}", path.display()))?,
        None => ScoringConfig::default(),
    };

    let mut analyzer = Analyzer::with_config(config);
    if !options.basic {
        analyzer = analyzer.with_provider(Box::new(HeuristicProvider));
    }
    let result = analyzer.analyze(&PostInput {
        text,
        platform,
        language,
    });

    match options.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => render_text(&result, platform),
    }
    Ok(())
}

fn read_text(options: &AnalyzeOptions) -> Result<String> {
    if let Some(text) = &options.text {
        return Ok(text.clone());
    }
    if let Some(path) = &options.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading post text from {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading post text from stdin")?;
    Ok(buffer)
}

fn render_text(result: &AnalysisResult, platform: Platform) {
    println!("{} Scoring for {}\n", style("→").cyan(), style(platform).bold());

    let rows = [
        (Dimension::Attention, result.aida.attention),
        (Dimension::Interest, result.aida.interest),
        (Dimension::Desire, result.aida.desire),
        (Dimension::Action, result.aida.action),
        (Dimension::Engagement, result.engagement),
    ];
    for (dimension, value) in rows {
        println!("  {:<11} {} {:>3}", dimension.label(), bar(value), value);
    }

    if result.feedback.is_empty() {
        return;
    }
    println!("\nFeedback:");
    for item in &result.feedback {
        let glyph = match item.kind {
            FeedbackKind::Success => style("✓").green(),
            FeedbackKind::Warning => style("⚠").yellow(),
            FeedbackKind::Error => style("✗").red(),
            FeedbackKind::Info => style("•").cyan(),
        };
        println!("  {} {}", glyph, item.message);
    }
}

fn bar(value: u32) -> console::StyledObject<String> {
    let filled = (value as usize).min(100) / 5;
    let cells = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));
    match value {
        70.. => style(cells).green(),
        40..=69 => style(cells).yellow(),
        _ => style(cells).red(),
    }
}
