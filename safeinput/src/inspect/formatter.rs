use super::*;

/// Trait for rendering a [`FileSummary`].
pub trait SummaryFormatter {
    fn format(&self, summary: &FileSummary) -> Result<String, InspectError>;
}

/// The plain `--- File Summary ---` block.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;
/// The summary as a pretty-printed JSON object.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl SummaryFormatter for TextFormatter {
    fn format(&self, summary: &FileSummary) -> Result<String, InspectError> {
        Ok(format!(
            "\n--- File Summary ---\nFile name: {}\nNumber of lines: {}\nNumber of words: {}\nNumber of characters: {}",
            summary.file_name, summary.line_count, summary.word_count, summary.char_count
        ))
    }
}

impl SummaryFormatter for JsonFormatter {
    fn format(&self, summary: &FileSummary) -> Result<String, InspectError> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}
