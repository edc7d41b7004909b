use std::sync::Arc;

use anyhow::Result;
use venture_core::config::VentureConfig;
use venture_core::extraction::{KeywordExtractor, Role};

pub fn run(config: &VentureConfig, role: Role, text: &str) -> Result<()> {
    let extractor = KeywordExtractor::new(
        Arc::new(config.keyword_table()?),
        config.extraction.match_policy,
    );
    let suggestions = extractor.extract(text, role);
    println!("{}", serde_json::to_string_pretty(&suggestions)?);
    Ok(())
}
