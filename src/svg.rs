//! SVG rendering of puzzle grids and word lists.
//!
//! Coordinate conventions:
//! - Letters sit on a square lattice at most 32 units wide, centred
//!   horizontally, starting 20 units from the top.
//! - The word list goes below the grid in alphabetical order, split into
//!   columns spread over the middle 80% of the page, 25 units per line.
//!
//! Rendering is deterministic: the same grid and words give the same markup.

use crate::grid::{Cell, Grid};

/// Padding above the grid.
const YPAD: f64 = 20.0;
/// Widest a grid cell may be.
const MAX_LETTER_WIDTH: f64 = 32.0;
/// Vertical distance between word-list lines.
const LINE_HEIGHT: f64 = 25.0;

/// Page size and word-list arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgLayout {
    pub width: u32,
    pub height: u32,
    /// Maximum number of word-list columns.
    pub wordlist_columns: usize,
}

impl Default for SvgLayout {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1414,
            wordlist_columns: 2,
        }
    }
}

/// Formats a coordinate: integral values keep one decimal (`300.0`), others
/// print in shortest form (`15.625`).
fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn preamble(layout: &SvgLayout) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}">
<defs>
<style type="text/css"><![CDATA[
text {{
  font: bold 24px Verdana, Helvetica, Arial, sans-serif;
}}
text.wordlist {{
  font-weight: normal;
}}
]]></style>
</defs>
"#,
        layout.width, layout.height
    )
}

/// Returns one `<text>` element per lettered cell, plus the y-coordinate just
/// below the last row.
pub fn grid_elements(grid: &Grid, width: u32) -> (f64, Vec<String>) {
    let width = f64::from(width);
    let cols = grid.cols().max(1) as f64;
    let letter_width = MAX_LETTER_WIDTH.min(width / cols);
    let xpad = (width - letter_width * cols) / 2.0;

    let elements = grid
        .cells()
        .filter_map(|((row, col), cell)| match cell {
            Cell::Letter(letter) => {
                let x = xpad + letter_width * (col as f64 + 0.5);
                let y = YPAD + letter_width * (row as f64 + 0.5);
                Some(format!(
                    r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                    fmt_num(x),
                    fmt_num(y),
                    escape(&letter.to_string())
                ))
            }
            Cell::Empty | Cell::Blocked => None,
        })
        .collect();

    let below = YPAD + letter_width * (grid.rows() as f64 + 0.5);
    (below, elements)
}

/// Escapes the characters that are special in SVG text content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Number of words per column when `count` words share `columns` columns.
fn words_per_column(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

/// Returns the word list as `<text>` elements starting at height `y0`.
///
/// Words are sorted alphabetically and filled column by column. Only as
/// many columns as are needed are used, and they are spread evenly.
pub fn wordlist_elements(words: &[String], width: u32, y0: f64, columns: usize) -> Vec<String> {
    let mut sorted = words.to_vec();
    sorted.sort();

    let per_column = words_per_column(sorted.len(), columns);
    if per_column == 0 {
        return Vec::new();
    }
    let used_columns = sorted.len().div_ceil(per_column);

    let width = f64::from(width);
    let spacing = (0.8 * width / used_columns as f64).floor();
    let x0 = 0.1 * width + (spacing / 2.0).floor();

    let mut elements = Vec::with_capacity(sorted.len());
    for (column, chunk) in sorted.chunks(per_column).enumerate() {
        let x = x0 + spacing * column as f64;
        for (line, word) in chunk.iter().enumerate() {
            let y = y0 + LINE_HEIGHT * line as f64;
            elements.push(format!(
                r#"<text x="{}" y="{}" text-anchor="middle" class="wordlist">{}</text>"#,
                fmt_num(x),
                fmt_num(y),
                escape(word)
            ));
        }
    }
    elements
}

/// Renders a grid and its word list as a complete SVG document.
///
/// The word list is left out when it would run off the bottom of the page.
pub fn render(grid: &Grid, words: &[String], layout: &SvgLayout) -> String {
    let mut svg = preamble(layout);

    let (y0, cells) = grid_elements(grid, layout.width);
    for element in cells {
        svg.push_str(&element);
        svg.push('\n');
    }

    let per_column = words_per_column(words.len(), layout.wordlist_columns);
    if y0 + LINE_HEIGHT * (per_column as f64) < f64::from(layout.height) {
        for element in wordlist_elements(words, layout.width, y0, layout.wordlist_columns) {
            svg.push_str(&element);
            svg.push('\n');
        }
    } else {
        log::debug!("no room for the word list below a {}-row grid", grid.rows());
    }

    svg.push_str("</svg>\n");
    svg
}
