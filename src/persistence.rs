//! Writing finished puzzles to disk.
//!
//! For an output stem `S` three files are written:
//! - `S.svg`: the puzzle grid with the word list
//! - `S-solution.svg`: the solution grid with the word list
//! - `S.txt`: the puzzle grid and word list as plain text

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::ExportError;
use crate::puzzle::Puzzle;
use crate::svg::{self, SvgLayout};

/// Paths of the files [`save`] writes for a given stem.
pub fn output_paths(stem: &str) -> [PathBuf; 3] {
    [
        PathBuf::from(format!("{stem}.svg")),
        PathBuf::from(format!("{stem}-solution.svg")),
        PathBuf::from(format!("{stem}.txt")),
    ]
}

/// Saves the puzzle and its solution as SVG, and the puzzle as text.
///
/// Returns the paths written, in the order given by [`output_paths`].
pub fn save(puzzle: &Puzzle, layout: &SvgLayout) -> Result<[PathBuf; 3], ExportError> {
    let (Some(grid), Some(solution), Some(text)) =
        (puzzle.grid(), puzzle.solution(), puzzle.wordsearch_text())
    else {
        return Err(ExportError::NoGrid);
    };

    let paths = output_paths(puzzle.output_stem());
    let [svg_path, solution_path, text_path] = &paths;

    write_file(svg_path, &svg::render(grid, puzzle.words(), layout))?;
    write_file(solution_path, &svg::render(solution, puzzle.words(), layout))?;
    write_file(text_path, &text)?;

    for path in &paths {
        log::info!("wrote {}", path.display());
    }
    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        writeln!(file)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn temp_stem(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("wordsearch-{}-{name}", std::process::id()))
            .display()
            .to_string()
    }

    #[test]
    fn test_output_paths() {
        let [svg, solution, text] = output_paths("out/planets");
        assert_eq!(svg, PathBuf::from("out/planets.svg"));
        assert_eq!(solution, PathBuf::from("out/planets-solution.svg"));
        assert_eq!(text, PathBuf::from("out/planets.txt"));
    }

    #[test]
    fn test_save_requires_a_grid() {
        let config = PuzzleConfig::new(5, 5)
            .with_words(["RUST"])
            .with_output_stem(temp_stem("unmade"));
        let puzzle = Puzzle::new(config).unwrap();
        let err = save(&puzzle, &SvgLayout::default()).unwrap_err();
        assert!(matches!(err, ExportError::NoGrid));
        assert!(!output_paths(puzzle.output_stem())[0].exists());
    }

    #[test]
    fn test_save_writes_all_files() {
        let config = PuzzleConfig::new(6, 6)
            .with_words(["RUST", "CRATE"])
            .with_output_stem(temp_stem("made"));
        let mut puzzle = Puzzle::new(config).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        assert!(puzzle.make_with_rng(10, &mut rng).is_success());

        let paths = save(&puzzle, &SvgLayout::default()).unwrap();
        let contents: Vec<String> = paths
            .iter()
            .map(|path| std::fs::read_to_string(path).unwrap())
            .collect();
        for path in &paths {
            std::fs::remove_file(path).unwrap();
        }

        let [puzzle_svg, solution_svg, text] = &contents[..] else {
            panic!("expected three files");
        };
        assert!(puzzle_svg.contains(r#"class="wordlist">CRATE</text>"#));
        assert!(solution_svg.contains(r#"class="wordlist">RUST</text>"#));
        // the solution has blanks, so it renders fewer letters
        assert!(solution_svg.matches("<text").count() < puzzle_svg.matches("<text").count());
        assert_eq!(text, &format!("{}\n", puzzle.wordsearch_text().unwrap()));
    }
}
