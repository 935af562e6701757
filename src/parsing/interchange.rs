use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Maximum number of records read from a single input (DOS protection)
pub const MAX_RECORDS: usize = 1_000_000;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input on line {line}: {message}")]
    InvalidFormat { line: usize, message: String },

    #[error("Too many records: {0} exceeds maximum allowed ({MAX_RECORDS})")]
    TooManyRecords(usize),
}

/// One interchange string read from an input, with an optional sample label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterchangeRecord {
    /// Sample label from the first column, if present
    pub label: Option<String>,

    /// The interchange string itself
    pub value: String,

    /// 1-based line number in the input (0 for command-line values)
    pub line: usize,
}

impl InterchangeRecord {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
            line: 0,
        }
    }

    /// Label if given, otherwise the interchange string
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Read interchange records from a file, or from stdin when the path is `-`
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_interchange_file(path: &Path) -> Result<Vec<InterchangeRecord>, ParseError> {
    let content = if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    parse_interchange_text(&content)
}

/// Parse interchange records, one per line.
///
/// Each line holds an interchange string, optionally preceded by a sample
/// label and a tab. Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line has more than two fields or
/// an empty value, or `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_interchange_text(text: &str) -> Result<Vec<InterchangeRecord>, ParseError> {
    let mut records = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if records.len() >= MAX_RECORDS {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let (label, value) = match fields.as_slice() {
            [value] => (None, *value),
            [label, value] => (Some((*label).to_string()), *value),
            _ => {
                return Err(ParseError::InvalidFormat {
                    line: line_num,
                    message: format!("expected 1 or 2 tab-separated fields, found {}", fields.len()),
                });
            }
        };

        if value.is_empty() {
            return Err(ParseError::InvalidFormat {
                line: line_num,
                message: "missing interchange string".to_string(),
            });
        }

        records.push(InterchangeRecord {
            label,
            value: value.to_string(),
            line: line_num,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_lines() {
        let text = "3481096A2C22806\n3481096A2C22806---------\n";
        let records = parse_interchange_text(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value, "3481096A2C22806");
        assert_eq!(records[0].label, None);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].line, 2);
    }

    #[test]
    fn test_parse_labelled_lines_with_comments() {
        let text = "# strain\tprofile\n\nH37Rv\t3481096A2C22806\n  \nBCG\t3481096A2C22806 \n";
        let records = parse_interchange_text(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label.as_deref(), Some("H37Rv"));
        assert_eq!(records[0].line, 3);
        assert_eq!(records[1].display_name(), "BCG");
        assert_eq!(records[1].value, "3481096A2C22806");
    }

    #[test]
    fn test_parse_rejects_extra_fields() {
        let err = parse_interchange_text("a\tb\tc\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_missing_value() {
        let err = parse_interchange_text("ok\n\nH37Rv\t \n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat { line: 3, .. }));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_interchange_text("# nothing here\n").unwrap().is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_value() {
        let record = InterchangeRecord::new("3481096A2C22806");
        assert_eq!(record.display_name(), "3481096A2C22806");
    }
}
