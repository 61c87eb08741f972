// Integration tests for complete brainfuck and brainlove programs
// These tests drive the public API the way an embedding application would:
// hardcoded program strings, in-memory output and scripted input

use brainlove_core::{
    BrainloveRunner, BufferOutput, ErrorKind, Interpreter, RuntimeError, ScriptedInput, transpile,
};

const HELLO_WORLD_BF: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

const HELLO_WORLD_BL: &str = r#"
    +8 [                    set counter to eight
        >+4 [               inner counter four
            >+2 >+3 >+3 >+  fill the cells
            <4 -
        ]
        >+ >+ >- >2+        adjust and mark the end
        [<] <-
    ]
    >2.  >-3.  +7..  +3.    Hell o
    >2.  <-.  <.  +3.       space W o r
    -6.  -8.  >2+.  >+2.    l d ! newline
"#;

// Helper function to run brainfuck and collect everything it printed
fn run_brainfuck(code: &str, input: &[&str]) -> Result<Vec<u8>, RuntimeError> {
    let buffer = BufferOutput::new();
    let mut interp = Interpreter::new()
        .with_output(Box::new(buffer.clone()))
        .with_input(Box::new(ScriptedInput::new(input.iter().copied())));
    interp.execute(code)?;
    Ok(buffer.contents())
}

fn run_brainlove(code: &str, input: &[&str]) -> Result<Vec<u8>, RuntimeError> {
    let buffer = BufferOutput::new();
    let mut runner = BrainloveRunner::new(code)
        .with_output(Box::new(buffer.clone()))
        .with_input(Box::new(ScriptedInput::new(input.iter().copied())));
    runner.execute()?;
    Ok(buffer.contents())
}

#[test]
fn test_hello_world_brainfuck() {
    let output = run_brainfuck(HELLO_WORLD_BF, &[]).unwrap();
    assert_eq!(
        output,
        b"Hello World!\n",
        "Unexpected output: {:?}",
        String::from_utf8_lossy(&output)
    );
}

#[test]
fn test_hello_world_brainlove() {
    // The commented macro version expands to exactly the classic program
    assert_eq!(transpile(HELLO_WORLD_BL), HELLO_WORLD_BF);

    let output = run_brainlove(HELLO_WORLD_BL, &[]).unwrap();
    assert_eq!(output, b"Hello World!\n");
}

#[test]
fn test_brainlove_matches_interpreting_the_transpilation() {
    let program = "+7[>+0<-]>++.+3.-9.";

    let direct = run_brainlove(program, &[]).unwrap();
    let manual = run_brainfuck(&transpile(program), &[]).unwrap();

    assert_eq!(direct, manual);
    assert_eq!(direct, [72, 75, 66]);
}

#[test]
fn test_echo_input_until_zero() {
    // Read numbers and echo them until a 0 arrives
    let output = run_brainfuck(",[.,]", &["3", "A", "255", "0", "9"]).unwrap();
    assert_eq!(output, [3, b'A', 255]);
}

#[test]
fn test_add_two_inputs() {
    // Classic adder: read two cells, move the second into the first
    let output = run_brainfuck(",>,[<+>-]<.", &["200", "100"]).unwrap();
    assert_eq!(output, [44], "200 + 100 wraps modulo 256");
}

#[test]
fn test_pointer_walks_left_of_origin() {
    let output = run_brainfuck("<<<+++[>+<-]>.<<.", &[]).unwrap();
    assert_eq!(output, [3, 0]);
}

#[test]
fn test_unmatched_opener_reports_real_position() {
    let program = "+++\n>\n  [ >\n+";
    // Cell 1 is zero when the [ is reached, so the forward scan runs off the end
    let err = run_brainfuck(program, &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnmatchedOpener);
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.column(), Some(3));

    let snippet = err.snippet().expect("syntax errors carry a snippet");
    assert_eq!(snippet.window.chars().count(), 21);
    assert_eq!(snippet.window.chars().nth(snippet.caret), Some('['));
}

#[test]
fn test_unmatched_closer_reports_real_position() {
    let err = run_brainfuck("+[-]\n\n+ ] +", &[]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnmatchedCloser);
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.column(), Some(3));
}

#[test]
fn test_output_before_error_is_kept() {
    let buffer = BufferOutput::new();
    let mut interp = Interpreter::new().with_output(Box::new(buffer.clone()));

    let result = interp.execute("+.+.]");
    assert!(matches!(result, Err(RuntimeError::Syntax(_))));
    assert_eq!(buffer.contents(), [1, 2]);
}

#[test]
fn test_interpreter_recovers_after_error() {
    let buffer = BufferOutput::new();
    let mut interp = Interpreter::new().with_output(Box::new(buffer.clone()));

    assert!(interp.execute("+]").is_err());
    interp.execute("+++.").unwrap();
    assert_eq!(buffer.contents(), [3], "a new run starts from a clean tape");
}

#[test]
fn test_same_interpreter_twice_gives_same_output() {
    let buffer = BufferOutput::new();
    let mut interp = Interpreter::new().with_output(Box::new(buffer.clone()));

    interp.execute(HELLO_WORLD_BF).unwrap();
    interp.execute(HELLO_WORLD_BF).unwrap();

    assert_eq!(buffer.as_string(), "Hello World!\nHello World!\n");
}
