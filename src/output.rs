use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub total: usize,
    pub tests: Vec<String>,
}

/// Render the discovered test list for the terminal: one path per line, or
/// a JSON document for downstream tooling.
pub fn render(tests: &[PathBuf], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(tests
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let output = JsonOutput {
                total: tests.len(),
                tests: tests.iter().map(|path| path.display().to_string()).collect(),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PathBuf> {
        vec![
            PathBuf::from("/tests/a_test.dart"),
            PathBuf::from("/tests/b_test.dart"),
        ]
    }

    #[test]
    fn test_render_text() {
        let rendered = render(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(rendered, "/tests/a_test.dart\n/tests/b_test.dart");
    }

    #[test]
    fn test_render_text_empty() {
        let rendered = render(&[], OutputFormat::Text).unwrap();
        assert!(rendered.is_empty());
    }

    #[test]
    fn test_render_json() {
        let rendered = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["tests"][0], "/tests/a_test.dart");
    }
}
