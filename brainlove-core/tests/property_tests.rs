use brainlove_core::{BrainloveRunner, BufferOutput, Interpreter, RuntimeError, Step, transpile};
use proptest::prelude::*;

// Upper bound on steps for programs that may loop forever
const STEP_BUDGET: usize = 20_000;

/// Programs with properly nested brackets and no input instructions.
fn balanced_program() -> impl Strategy<Value = String> {
    let leaf = prop::collection::vec(prop::sample::select(vec!['>', '<', '+', '-', '.', ' ']), 0..8)
        .prop_map(|chars| chars.into_iter().collect::<String>());

    leaf.prop_recursive(4, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(|parts| parts.concat()),
            inner.prop_map(|body| format!("[{}]", body)),
        ]
    })
}

/// Brainlove programs without brackets, so every run terminates.
fn straight_brainlove() -> impl Strategy<Value = String> {
    let unit = (
        prop::sample::select(vec!['>', '<', '+', '-', '.']),
        prop::option::of(0u32..10),
    )
        .prop_map(|(op, digit)| match digit {
            Some(d) => format!("{}{}", op, d),
            None => op.to_string(),
        });
    prop::collection::vec(unit, 0..24).prop_map(|units| units.concat())
}

fn run_brainfuck(code: &str) -> (Result<(), RuntimeError>, Vec<u8>) {
    let buffer = BufferOutput::new();
    let mut interp = Interpreter::new().with_output(Box::new(buffer.clone()));
    let result = interp.execute(code);
    (result, buffer.contents())
}

proptest! {
    /// Balanced programs never hit a syntax error, however far they get
    /// within the step budget.
    #[test]
    fn balanced_programs_never_fail(program in balanced_program()) {
        let mut interp = Interpreter::new();
        interp.load(&program);

        for _ in 0..STEP_BUDGET {
            match interp.step() {
                Step::Continue => {}
                Step::Halt => break,
                Step::Fail(err) => prop_assert!(false, "{:?} failed: {}", program, err),
            }
        }
    }

    /// Cells count modulo 256 in both directions.
    #[test]
    fn cell_arithmetic_is_modular(ups in 0usize..600, downs in 0usize..600) {
        let program = format!("{}{}.", "+".repeat(ups), "-".repeat(downs));
        let (result, output) = run_brainfuck(&program);

        let expected = (ups as i64 - downs as i64).rem_euclid(256) as u8;
        prop_assert!(result.is_ok());
        prop_assert_eq!(output, vec![expected]);
    }

    /// Running brainlove is the same as interpreting its transpilation.
    #[test]
    fn runner_matches_manual_pipeline(program in straight_brainlove()) {
        let buffer = BufferOutput::new();
        let mut runner = BrainloveRunner::new(&program).with_output(Box::new(buffer.clone()));
        let runner_result = runner.execute();

        let (manual_result, manual_output) = run_brainfuck(&transpile(&program));

        prop_assert_eq!(runner_result, manual_result);
        prop_assert_eq!(buffer.contents(), manual_output);
    }

    /// A completed run resets the machine, so a second run repeats the first.
    #[test]
    fn reruns_are_identical(program in straight_brainlove()) {
        let code = transpile(&program);
        let buffer = BufferOutput::new();
        let mut interp = Interpreter::new().with_output(Box::new(buffer.clone()));

        interp.execute(&code).unwrap();
        let first = buffer.contents();
        buffer.clear();
        interp.execute(&code).unwrap();

        prop_assert_eq!(buffer.contents(), first);
    }

    /// Without digits, transpiling just drops everything outside the alphabet.
    #[test]
    fn transpile_without_digits_filters(source in "[a-z <>+\\-\\[\\].,\n]*") {
        let expected: String = source.chars().filter(|c| "<>+-[].,".contains(*c)).collect();
        prop_assert_eq!(transpile(&source), expected);
    }

    /// Output holds base instructions only, and one digit after an
    /// instruction gives that instruction `digit` times (ten for zero).
    #[test]
    fn transpile_emits_only_instructions(source in "([<>+\\-\\[\\].,][0-9]?){0,12}") {
        let output = transpile(&source);
        prop_assert!(output.chars().all(|c| "<>+-[].,".contains(c)));

        let expected_len: usize = source
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(0) => 9,
                Some(d) => d as usize - 1,
                None => 1,
            })
            .sum();
        prop_assert_eq!(output.len(), expected_len);
    }
}
