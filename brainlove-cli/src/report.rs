// Human-readable rendering of interpreter errors

use brainlove_core::RuntimeError;
use std::process::ExitCode;

/// `Error: <message>`, followed by the snippet and caret lines when the
/// error points at a place in the source.
pub fn render(err: &RuntimeError) -> String {
    let mut text = format!("Error: {}", err);
    if let Some(snippet) = err.snippet() {
        text.push('\n');
        text.push_str(&snippet.to_string());
    }
    text
}

pub fn exit_status(result: Result<(), RuntimeError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render(&e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brainlove_core::{BoundsError, Interpreter};

    #[test]
    fn test_render_syntax_error_with_snippet() {
        let err = Interpreter::new()
            .with_snippet_radius(3)
            .execute("+\n+]")
            .unwrap_err();

        assert_eq!(
            render(&err),
            "Error: Closing bracket has no corresponding opening bracket (line: 2, column: 2)\n\
             + +]   \n   ^"
        );
    }

    #[test]
    fn test_render_without_position() {
        let err = RuntimeError::from(BoundsError::BeforeStart);
        assert_eq!(render(&err), "Error: cursor position cannot go below zero");
    }
}
