use ariadne::{Color, Label, Report, ReportKind, Source};
use std::fmt;
use tally::TallyError;

/// A TallyError together with the text it was produced from
#[derive(Debug)]
pub struct ExpressionError {
    pub source_text: String,
    pub error: TallyError,
}

impl ExpressionError {
    pub fn new(source_text: &str, error: TallyError) -> Self {
        Self {
            source_text: source_text.to_string(),
            error,
        }
    }
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ExpressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Format an ExpressionError with fancy terminal output using Ariadne
///
/// Errors without a position fall back to the plain message.
pub fn format_error(error: &ExpressionError) -> String {
    let Some(position) = error.error.position() else {
        return format!("Error: {}", error.error);
    };

    let source_id = "expression".to_string();
    let label = match &error.error {
        TallyError::InvalidCharacter { .. } => "not allowed here",
        TallyError::UnbalancedParentheses { .. } => "no matching parenthesis",
        _ => "",
    };

    let mut report = Report::build(ReportKind::Error, &source_id, position)
        .with_message(error.error.to_string())
        .with_label(
            Label::new((&source_id, position..position + 1))
                .with_message(label)
                .with_color(Color::Red),
        );

    if let TallyError::InvalidCharacter { found, .. } = &error.error {
        if found.chars().all(char::is_whitespace) {
            report = report.with_help("whitespace is not allowed inside an expression");
        }
    }

    let mut output = Vec::new();
    match report
        .finish()
        .write((&source_id, Source::from(error.source_text.as_str())), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => format!("Error: {}", error.error),
    }
}
