//! Rendering of resolved URLs for standard output.

use clap::ValueEnum;

use crate::resolver::MavenBinaries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `['<tar.gz url>', '<zip url>']`
    #[default]
    List,
    /// `{"version": ..., "tar_gz": ..., "zip": ...}`
    Json,
    /// One URL per line, tar.gz first
    Lines,
}

pub fn render(
    binaries: &MavenBinaries,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let rendered = match format {
        OutputFormat::List => format!(
            "[{}, {}]",
            quote_literal(&binaries.tar_gz),
            quote_literal(&binaries.zip)
        ),
        OutputFormat::Json => serde_json::to_string(binaries)?,
        OutputFormat::Lines => binaries.urls().join("\n"),
    };
    Ok(rendered)
}

// Single quotes unless the text itself holds one and no double quote.
fn quote_literal(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\");
    if s.contains('\'') && !s.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}
