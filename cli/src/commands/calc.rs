use std::io::{BufRead, Write};
use std::str::FromStr;

use colored::*;
use primer_common::{config::Config, error, error::ValueError, success, warn};
use primer_core::calculator::{Accumulator, Operation};

use crate::terminal::{colors, format, print, prompt::Console};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    /// Menu keys: `1`..`4` pick an operation, `0` exits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Run(Operation::Addition)),
            "2" => Ok(MenuChoice::Run(Operation::Subtraction)),
            "3" => Ok(MenuChoice::Run(Operation::Multiplication)),
            "4" => Ok(MenuChoice::Run(Operation::Division)),
            "0" => Ok(MenuChoice::Exit),
            other => Err(format!("Invalid choice '{other}'")),
        }
    }
}

/// One answered menu round.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub operation: Operation,
    pub outcome: Result<f64, ValueError>,
}

/// Runs the menu until the user exits or input ends.
pub fn calc<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
) -> anyhow::Result<Vec<Evaluation>> {
    let mut history: Vec<Evaluation> = Vec::new();

    loop {
        print_menu(cfg);

        let Some(answer) = console.read_answer("Enter your choice:")? else {
            break;
        };

        let operation: Operation = match answer.parse::<MenuChoice>() {
            Ok(MenuChoice::Run(operation)) => operation,
            Ok(MenuChoice::Exit) => break,
            Err(reason) => {
                warn!("{reason}. Please try again.");
                continue;
            }
        };

        let numbers: String = console.ask("Enter numbers separated by spaces:")?;
        let outcome: Result<f64, ValueError> = evaluate(operation, &numbers);

        match &outcome {
            Ok(result) => print_result(operation, *result, cfg),
            Err(e) => error!("{operation} failed: {e}"),
        }

        history.push(Evaluation { operation, outcome });
    }

    success!("Exiting the calculator. Goodbye!");
    Ok(history)
}

/// Parses `numbers` into an [`Accumulator`] and applies `operation` to it.
pub fn evaluate(operation: Operation, numbers: &str) -> Result<f64, ValueError> {
    let accumulator: Accumulator = numbers.parse()?;
    operation.apply(&accumulator)
}

fn print_menu(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    for (idx, operation) in Operation::ALL.iter().enumerate() {
        print::tree_head(idx + 1, &operation.to_string());
    }
    print::tree_head(0, "Exit");
}

fn print_result(operation: Operation, result: f64, cfg: &Config) {
    let value: ColoredString = format::decimal(result, cfg.precision).color(colors::VALUE).bold();
    let width: usize = print::key_width(Operation::ALL.iter().map(|op| op.label()));
    print::aligned_line(&operation.to_string(), width, value);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(
            "1".parse::<MenuChoice>(),
            Ok(MenuChoice::Run(Operation::Addition))
        );
        assert_eq!(
            " 4 ".parse::<MenuChoice>(),
            Ok(MenuChoice::Run(Operation::Division))
        );
        assert_eq!("0".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert!("5".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(Operation::Addition, "1 2 3"), Ok(6.0));
        assert_eq!(evaluate(Operation::Subtraction, "1 2 3"), Ok(-6.0));
        assert_eq!(evaluate(Operation::Multiplication, "2 3 4"), Ok(24.0));
        assert_eq!(evaluate(Operation::Division, "10 2"), Ok(5.0));
        assert_eq!(evaluate(Operation::Addition, ""), Ok(0.0));
        assert_eq!(
            evaluate(Operation::Division, "10 0"),
            Err(ValueError::DivisionByZero)
        );
        assert!(matches!(
            evaluate(Operation::Division, "10"),
            Err(ValueError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            evaluate(Operation::Addition, "1 x"),
            Err(ValueError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_session_until_exit() {
        let mut console = console("1\n1 2 3\n9\n4\n10 0\n2\n5\n0\n3\n2 2\n");
        let history = calc(&mut console, &Config::default()).unwrap();

        assert_eq!(
            history,
            vec![
                Evaluation {
                    operation: Operation::Addition,
                    outcome: Ok(6.0),
                },
                Evaluation {
                    operation: Operation::Division,
                    outcome: Err(ValueError::DivisionByZero),
                },
                Evaluation {
                    operation: Operation::Subtraction,
                    outcome: Ok(-5.0),
                },
            ]
        );
    }

    #[test]
    fn test_session_ends_with_input() {
        let mut console = console("3\n2 5\n");
        let history = calc(&mut console, &Config::default()).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].outcome, Ok(10.0));
    }

    #[test]
    fn test_missing_numbers_is_an_error() {
        let mut console = console("1\n");
        assert!(calc(&mut console, &Config::default()).is_err());
    }
}
