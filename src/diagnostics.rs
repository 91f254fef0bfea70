//! Diagnostic printing for hmw errors.

use ariadne::{Color, ColorGenerator, Fmt, Label, Report, ReportKind, Source};

use crate::error::{HmwError, LexError, ParseError, TypeError};
use crate::types::PrettyContext;

/// Print an hmw error with colored diagnostics.
pub fn print_error(filename: &str, source: &str, error: &HmwError) {
    let span = error.span();

    // Mismatches get both sides colored, like an expected/found pair
    if let HmwError::Type {
        error: TypeError::UnificationMismatch { t1, t2 },
        ..
    } = error
    {
        let mut colors = ColorGenerator::new();
        let left_color = colors.next();
        let right_color = colors.next();

        let mut ctx = PrettyContext::new();
        let left = ctx.format_type(t1);
        let right = ctx.format_type(t2);

        let msg = format!(
            "Type mismatch: cannot unify '{}' with '{}'",
            left.fg(left_color),
            right.fg(right_color)
        );

        let report = Report::build(ReportKind::Error, (filename, span.start..span.end))
            .with_message(&msg)
            .with_label(
                Label::new((filename, span.start..span.end))
                    .with_message("in this statement")
                    .with_color(Color::Red),
            )
            .with_note("the two types have different shapes and no variable can bridge them");

        eprintln!();
        let _ = report.finish().eprint((filename, Source::from(source)));
        eprintln!();
        return;
    }

    let (message, note) = match error {
        HmwError::Lex(e) => match e {
            LexError::UnexpectedCharacter { ch, .. } => {
                (format!("Unexpected character: '{}'", ch), None)
            }
            LexError::InvalidNumber { text, .. } => (
                format!("Invalid integer literal: '{}'", text),
                Some("integers must fit in 64 bits".to_string()),
            ),
        },

        HmwError::Parse(e) => match e {
            ParseError::UnexpectedToken {
                found, expected, ..
            } => (
                format!("Unexpected token: found '{}', expected {}", found, expected),
                None,
            ),
            ParseError::UnexpectedEof { expected, .. } => {
                (format!("Unexpected end of input, expected {}", expected), None)
            }
        },

        HmwError::Type { error, .. } => match error {
            TypeError::UnboundVariable { name } => {
                (format!("Unbound variable: '{}'", name), None)
            }
            TypeError::OccursCheck { .. } => (
                error.to_string(),
                Some("This would create an infinite type".to_string()),
            ),
            TypeError::UnificationMismatch { .. } => (error.to_string(), None),
        },
    };

    let mut report = Report::build(ReportKind::Error, (filename, span.start..span.end))
        .with_message(&message)
        .with_label(
            Label::new((filename, span.start..span.end))
                .with_message(&message)
                .with_color(Color::Red),
        );

    if let Some(note_text) = note {
        report.add_help(note_text);
    }

    let _ = report
        .finish()
        .eprint((filename, Source::from(source)));
}
