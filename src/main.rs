//! Word Search Generator
//!
//! Builds a word-search puzzle from a list of words, optionally shaped by a
//! mask, and prints it or writes it out as SVG and text files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordsearch::puzzle::DEFAULT_OUTPUT_STEM;
use wordsearch::{persistence, Mask, Puzzle, PuzzleConfig, SvgLayout, DEFAULT_ATTEMPTS};

/// Generates word-search puzzles and their solutions.
#[derive(Parser)]
#[command(name = "wordsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log each attempt and placement (also enabled by WORDSEARCH_DEBUG).
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the puzzle grid followed by the word list.
    Text(MakeArgs),
    /// Print the solution grid: placed words only.
    Solution(MakeArgs),
    /// Write <OUTPUT>.svg, <OUTPUT>-solution.svg and <OUTPUT>.txt.
    Svg(SvgArgs),
}

#[derive(Args)]
struct MakeArgs {
    /// Number of rows (at most 32).
    rows: usize,

    /// Number of columns (at most 32).
    cols: usize,

    /// Words to hide in the grid.
    #[arg(short, long, num_args = 1..)]
    words: Vec<String>,

    /// File with one word per line; blank lines and lines starting with '#' are skipped.
    #[arg(short = 'f', long)]
    wordlist: Option<PathBuf>,

    /// Shape of the grid: none, circle or squares.
    #[arg(short, long, default_value_t = Mask::None)]
    mask: Mask,

    /// Allow words to be written backwards.
    #[arg(short, long)]
    backwards: bool,

    /// Number of whole-grid attempts before giving up.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Seed for a reproducible puzzle.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct SvgArgs {
    #[command(flatten)]
    make: MakeArgs,

    /// Stem of the output file names.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_STEM)]
    output: String,

    /// Maximum number of columns in the SVG word list.
    #[arg(long, default_value_t = 2)]
    wordlist_columns: usize,
}

impl MakeArgs {
    fn to_config(&self) -> PuzzleConfig {
        let mut config = PuzzleConfig::new(self.rows, self.cols)
            .with_mask(self.mask)
            .with_backwards(self.backwards);
        if !self.words.is_empty() {
            config = config.with_words(self.words.iter().cloned());
        }
        if let Some(path) = &self.wordlist {
            config = config.with_wordlist_path(path);
        }
        config
    }
}

impl Command {
    fn make_args(&self) -> &MakeArgs {
        match self {
            Command::Text(args) | Command::Solution(args) => args,
            Command::Svg(args) => &args.make,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("WORDSEARCH_DEBUG").is_ok();
    wordsearch::log::init_logger(debug_enabled);

    if let Err(e) = run(&cli.command) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Builds the puzzle and produces the output the command asks for.
fn run(command: &Command) -> Result<(), Box<dyn std::error::Error>> {
    let puzzle = make_puzzle(command)?;

    match command {
        Command::Text(_) => {
            if let Some(text) = puzzle.wordsearch_text() {
                println!("{text}");
            }
        }
        Command::Solution(_) => {
            if let Some(solution) = puzzle.solution() {
                println!("{}", solution.to_text());
            }
        }
        Command::Svg(args) => {
            let layout = SvgLayout {
                wordlist_columns: args.wordlist_columns,
                ..SvgLayout::default()
            };
            let paths = persistence::save(&puzzle, &layout)?;
            for path in paths {
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}

/// Validates the arguments and runs the placement attempts.
fn make_puzzle(command: &Command) -> Result<Puzzle, Box<dyn std::error::Error>> {
    let args = command.make_args();
    let mut config = args.to_config();
    if let Command::Svg(svg_args) = command {
        config = config.with_output_stem(svg_args.output.as_str());
    }

    let mut puzzle = Puzzle::new(config)?;
    let outcome = match args.seed {
        Some(seed) => puzzle.make_with_rng(args.attempts, &mut StdRng::seed_from_u64(seed)),
        None => puzzle.make(args.attempts),
    };

    if !outcome.is_success() {
        return Err(outcome.to_string().into());
    }
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_text_command() {
        let cli = Cli::try_parse_from([
            "wordsearch", "text", "13", "13", "-w", "MERCURY", "VENUS", "--mask", "circle", "-b",
        ])
        .unwrap();
        let args = cli.command.make_args();
        assert_eq!((args.rows, args.cols), (13, 13));
        assert_eq!(args.words, ["MERCURY", "VENUS"]);
        assert_eq!(args.mask, Mask::Circle);
        assert!(args.backwards);
        assert_eq!(args.attempts, DEFAULT_ATTEMPTS);
    }

    #[test]
    fn test_parse_svg_defaults() {
        let cli =
            Cli::try_parse_from(["wordsearch", "svg", "15", "15", "-f", "states.txt"]).unwrap();
        let Command::Svg(args) = &cli.command else {
            panic!("expected svg command");
        };
        assert_eq!(args.output, DEFAULT_OUTPUT_STEM);
        assert_eq!(args.wordlist_columns, 2);
        assert_eq!(args.make.wordlist, Some(PathBuf::from("states.txt")));
        assert!(args.make.words.is_empty());
    }

    #[test]
    fn test_unknown_mask_rejected() {
        assert!(Cli::try_parse_from(["wordsearch", "text", "5", "5", "-w", "A", "-m", "star"])
            .is_err());
    }

    #[test]
    fn test_both_word_sources_reach_config_validation() {
        let cli = Cli::try_parse_from([
            "wordsearch", "text", "5", "5", "-w", "ONE", "-f", "words.txt",
        ])
        .unwrap();
        let err = make_puzzle(&cli.command).unwrap_err();
        assert!(err.to_string().contains("not both"), "{err}");
    }

    #[test]
    fn test_seeded_solution_is_reproducible() {
        let args = [
            "wordsearch", "solution", "9", "9", "-w", "RUST", "CARGO", "CRATE", "--seed", "17",
        ];
        let first = make_puzzle(&Cli::try_parse_from(args).unwrap().command).unwrap();
        let second = make_puzzle(&Cli::try_parse_from(args).unwrap().command).unwrap();
        assert_eq!(first.grid(), second.grid());
        assert_eq!(first.solution(), second.solution());
    }
}
