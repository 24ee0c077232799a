//! Terminal quiz runner
//!
//! Reads `questions.json` from the working directory, runs one session over
//! a shuffled sample (the whole bank by default, or the count given on the
//! command line), and prints a summary with a per-question review at the
//! end. Exits non-zero when the bank cannot be loaded.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use quiz_core::{QuestionBank, QuizError, QuizSession, Summary};

/// Question file the runner looks for in the working directory
const BANK_FILE: &str = "questions.json";

type RunResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let requested = match count_arg() {
        Ok(requested) => requested,
        Err(raw) => {
            eprintln!("Usage: quiz [COUNT]  ({:?} is not a question count)", raw);
            return ExitCode::from(2);
        }
    };

    let bank = QuestionBank::new(BANK_FILE);
    match run(&bank, requested) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            if matches!(
                err.downcast_ref::<QuizError>(),
                Some(QuizError::DataNotFound { .. })
            ) {
                eprintln!(
                    "Create {} next to where you run the quiz; see README.md for the format.",
                    bank.path().display()
                );
            }
            ExitCode::FAILURE
        }
    }
}

/// Optional question count from the command line
fn count_arg() -> Result<Option<usize>, String> {
    match std::env::args().nth(1) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| raw),
    }
}

fn run(bank: &QuestionBank, requested: Option<usize>) -> RunResult {
    let all = bank.load()?;
    log::info!("loaded {} questions from {}", all.len(), bank.path().display());

    let size = requested.unwrap_or(all.len());
    let mut session = QuizSession::start_sampled(all, size)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !session.is_finished() {
        let question = session.current()?.0.clone();

        clear_screen();
        println!(
            "--- Question {} of {} ---",
            session.index() + 1,
            session.total()
        );
        println!("\nCurrent score: {}/{}\n", session.score(), session.answered());
        println!("{}", question.prompt);
        println!("{}", "-".repeat(20));
        for label in question.labels() {
            println!("{}) {}", label, question.options[label]);
        }

        let choice = loop {
            print!("\nYour answer ({}): ", question.labels().join(", "));
            io::stdout().flush()?;
            let Some(answer) = read_line(&mut input)? else {
                println!("\nInput closed, leaving the quiz.");
                return Ok(());
            };
            if question.is_valid_choice(&answer) {
                break answer;
            }
            println!(
                "Invalid input. Please enter one of: {}.",
                question.labels().join(", ")
            );
        };

        let record = session.submit(&choice)?;
        if record.correct {
            println!("\n✅ Correct!");
        } else {
            println!(
                "\n❌ Wrong! The correct answer was {}) {}.",
                question.correct_label(),
                question.correct_text()
            );
        }

        if !question.explanation.is_empty() {
            println!("\n--- Explanation ---");
            println!("{}", question.explanation);
        }
        println!("{}", "-".repeat(20));

        print!("\nPress Enter for the next question...");
        io::stdout().flush()?;
        if read_line(&mut input)?.is_none() {
            println!("\nInput closed, leaving the quiz.");
            return Ok(());
        }

        session.advance()?;
    }

    let summary = session.summary()?;
    clear_screen();
    print_summary(&summary);
    Ok(())
}

/// Read one trimmed line, `None` once stdin is closed
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Clear the terminal and move the cursor home
fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

fn print_summary(summary: &Summary) {
    println!("--- Quiz finished! ---");
    println!(
        "\nYou answered {} of {} questions correctly.",
        summary.score, summary.total
    );
    match summary.percentage() {
        Some(pct) => println!("Accuracy: {:.2}%", pct),
        None => println!("No questions were asked."),
    }

    println!("\n--- Review ---");
    for (i, entry) in summary.review.iter().enumerate() {
        let mark = if entry.record.correct { "✅" } else { "❌" };
        println!("\n{}. {} {}", i + 1, mark, entry.question.prompt);
        println!("   Your answer: {}", entry.record.chosen);
        if !entry.record.correct {
            println!(
                "   Correct answer: {}) {}",
                entry.question.correct_label(),
                entry.question.correct_text()
            );
        }
    }
}
