//! @acp:module "Languages Command"
//! @acp:summary "Print supported languages and their lexicon sizes"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::language::{Language, DEFAULT_LANGUAGE};

/// Execute the languages command
pub fn execute_languages() -> Result<()> {
    println!("{} Supported languages:\n", style("→").cyan());
    for language in Language::ALL {
        let marker = if language == DEFAULT_LANGUAGE {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<4} {:<10} {:>3} keywords{}",
            style(language.tag()).bold(),
            language.name(),
            language.lexicon().len(),
            marker
        );
    }
    Ok(())
}
