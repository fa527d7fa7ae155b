//! Word placement
//!
//! Words are placed largest first on an occupancy grid. Each word walks an
//! elliptical spiral out from the canvas centre and takes the first free
//! slot. When no slot exists the word is tried in the other orientation,
//! then the font shrinks one pixel at a time. Layout ends as soon as a word
//! does not fit even at the minimum font size.
//!
//! Text extents are estimated per character from the font size; the browser
//! does the actual glyph rendering, so the estimates err on the wide side.

use serde::Serialize;

use super::options::CloudOptions;
use super::palette;
use super::CloudError;
use crate::analysis::WordCount;

/// Smallest font size a word is drawn at
pub const MIN_FONT_SIZE: u32 = 4;
/// Pixels removed from the font size per failed attempt
pub const FONT_STEP: u32 = 1;
/// How much a word's size follows its frequency (0 = rank only, 1 = linear)
pub const RELATIVE_SCALING: f64 = 0.5;
/// Empty space kept around every word, in pixels
pub const MARGIN: u32 = 2;
/// Smallest canvas edge accepted
pub const MIN_CANVAS: u32 = 16;

/// Occupancy grid resolution in pixels
const CELL: u32 = 4;
/// Glyph advances relative to the font size, sized for DejaVu Sans
const ADVANCE_DEFAULT: f64 = 0.6875;
const ADVANCE_CAPITAL: f64 = 0.8125;
const ADVANCE_WIDE_LATIN: f64 = 1.0;
const ADVANCE_FULL_WIDTH: f64 = 1.0;
/// Line box height relative to the font size
const LINE_HEIGHT: f64 = 1.125;
/// One word in ten is drawn vertically
const VERTICAL_ONE_IN: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn rotated(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Pixel rectangle on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }
}

/// A word with its final size, position and colour
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: u32,
    pub orientation: Orientation,
    /// Box reserved for the word, margin included
    pub bounds: Rect,
    pub color: &'static str,
}

/// Result of a layout run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudLayout {
    pub width: u32,
    pub height: u32,
    pub words: Vec<PlacedWord>,
}

/// Lay out the most frequent words on a `width` x `height` canvas.
///
/// `counts` must be sorted by descending count. At most
/// `options.max_words` words are considered.
pub fn layout(counts: &[WordCount], options: &CloudOptions) -> Result<CloudLayout, CloudError> {
    if options.width < MIN_CANVAS || options.height < MIN_CANVAS {
        return Err(CloudError::InvalidDimensions {
            width: options.width,
            height: options.height,
        });
    }

    let words = &counts[..counts.len().min(options.max_words)];
    if words.is_empty() {
        return Err(CloudError::NoWords);
    }

    // Probe with the two most frequent words at full canvas height, then use
    // the harmonic mean of their sizes as the real starting size
    let trial = place_words(&words[..words.len().min(2)], options, options.height);
    let start_size = match trial.as_slice() {
        [first, second, ..] => {
            let (a, b) = (first.font_size as f64, second.font_size as f64);
            (2.0 * a * b / (a + b)) as u32
        }
        [only] => only.font_size,
        [] => options.height,
    };

    let placed = place_words(words, options, start_size);
    tracing::debug!(
        candidates = words.len(),
        placed = placed.len(),
        start_size,
        "Word cloud laid out"
    );

    Ok(CloudLayout {
        width: options.width,
        height: options.height,
        words: placed,
    })
}

fn place_words(words: &[WordCount], options: &CloudOptions, start_size: u32) -> Vec<PlacedWord> {
    let mut grid = OccupancyGrid::new(options.width, options.height);
    let mut placed = Vec::with_capacity(words.len());

    let Some(max_count) = words.first().map(|w| w.count.max(1) as f64) else {
        return placed;
    };

    let mut font_size = start_size;
    let mut last_freq = 1.0;

    for entry in words {
        let freq = entry.count as f64 / max_count;
        if freq != last_freq {
            let scale = RELATIVE_SCALING * (freq / last_freq) + (1.0 - RELATIVE_SCALING);
            font_size = (scale * font_size as f64).round() as u32;
        }

        let mut orientation = preferred_orientation(&entry.word);
        let mut tried_other = false;

        let slot = loop {
            if font_size < MIN_FONT_SIZE {
                break None;
            }
            let (width, height) = text_extent(&entry.word, font_size, orientation);
            if let Some(rect) = grid.find_slot(width + 2 * MARGIN, height + 2 * MARGIN) {
                break Some(rect);
            }
            if !tried_other {
                orientation = orientation.rotated();
                tried_other = true;
            } else {
                font_size = font_size.saturating_sub(FONT_STEP);
                orientation = Orientation::Horizontal;
            }
        };

        let Some(bounds) = slot else {
            // Canvas is full
            break;
        };

        grid.occupy(&bounds);
        placed.push(PlacedWord {
            word: entry.word.clone(),
            count: entry.count,
            font_size,
            orientation,
            bounds,
            color: palette::color_for(&entry.word),
        });
        last_freq = freq;
    }

    placed
}

/// Estimated pixel extent of `word` drawn at `font_size`
fn text_extent(word: &str, font_size: u32, orientation: Orientation) -> (u32, u32) {
    let ems: f64 = word.chars().map(glyph_advance).sum::<f64>().max(ADVANCE_DEFAULT);
    let along = (ems * font_size as f64).ceil() as u32;
    let across = (font_size as f64 * LINE_HEIGHT).ceil() as u32;
    match orientation {
        Orientation::Horizontal => (along, across),
        Orientation::Vertical => (across, along),
    }
}

fn glyph_advance(c: char) -> f64 {
    match c {
        'm' | 'w' | 'M' | 'W' => ADVANCE_WIDE_LATIN,
        c if is_full_width(c) => ADVANCE_FULL_WIDTH,
        c if c.is_uppercase() => ADVANCE_CAPITAL,
        _ => ADVANCE_DEFAULT,
    }
}

/// East Asian wide and full-width characters (Hangul, CJK, kana, full-width forms)
fn is_full_width(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x1F300..=0x1F64F
            | 0x20000..=0x3FFFD
    )
}

fn preferred_orientation(word: &str) -> Orientation {
    if palette::fnv1a(word.as_bytes()) % VERTICAL_ONE_IN == 0 {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

/// Coarse occupancy map with a summed-area table for O(1) box queries
struct OccupancyGrid {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
    /// (cols + 1) x (rows + 1) prefix sums of `cells`
    integral: Vec<u32>,
}

impl OccupancyGrid {
    fn new(width: u32, height: u32) -> Self {
        let cols = (width / CELL) as usize;
        let rows = (height / CELL) as usize;
        Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
            integral: vec![0; (cols + 1) * (rows + 1)],
        }
    }

    fn occupied_in(&self, col: usize, row: usize, w: usize, h: usize) -> u32 {
        let stride = self.cols + 1;
        let at = |c: usize, r: usize| self.integral[r * stride + c];
        at(col + w, row + h) + at(col, row) - at(col + w, row) - at(col, row + h)
    }

    /// First free box of `width` x `height` pixels along the spiral
    fn find_slot(&self, width: u32, height: u32) -> Option<Rect> {
        let w = width.div_ceil(CELL) as usize;
        let h = height.div_ceil(CELL) as usize;
        if w == 0 || h == 0 || w > self.cols || h > self.rows {
            return None;
        }

        let max_col = self.cols - w;
        let max_row = self.rows - h;

        spiral(self.cols, self.rows)
            .map(|(cx, cy)| {
                let col = (cx - w as f64 / 2.0).round().clamp(0.0, max_col as f64) as usize;
                let row = (cy - h as f64 / 2.0).round().clamp(0.0, max_row as f64) as usize;
                (col, row)
            })
            .find(|&(col, row)| self.occupied_in(col, row, w, h) == 0)
            .map(|(col, row)| Rect {
                x: col as u32 * CELL,
                y: row as u32 * CELL,
                width: w as u32 * CELL,
                height: h as u32 * CELL,
            })
    }

    fn occupy(&mut self, rect: &Rect) {
        let col0 = (rect.x / CELL) as usize;
        let row0 = (rect.y / CELL) as usize;
        let col1 = (rect.right() / CELL) as usize;
        let row1 = (rect.bottom() / CELL) as usize;

        for row in row0..row1.min(self.rows) {
            for col in col0..col1.min(self.cols) {
                self.cells[row * self.cols + col] = true;
            }
        }
        self.rebuild_integral();
    }

    fn rebuild_integral(&mut self) {
        let stride = self.cols + 1;
        for row in 0..self.rows {
            let mut row_sum = 0;
            for col in 0..self.cols {
                row_sum += self.cells[row * self.cols + col] as u32;
                self.integral[(row + 1) * stride + col + 1] =
                    self.integral[row * stride + col + 1] + row_sum;
            }
        }
    }
}

/// Points of an elliptical Archimedean spiral centred on the grid, in cell
/// units, roughly one cell apart, until the spiral has covered the corners.
fn spiral(cols: usize, rows: usize) -> impl Iterator<Item = (f64, f64)> {
    let cx = cols as f64 / 2.0;
    let cy = rows as f64 / 2.0;
    let aspect = if rows == 0 { 1.0 } else { cols as f64 / rows as f64 };
    let max_radius = cx.max(cy) * std::f64::consts::SQRT_2 + 1.0;
    let stretch = aspect.max(1.0);

    let mut theta: f64 = 0.0;
    std::iter::from_fn(move || {
        let radius = theta / std::f64::consts::TAU;
        if radius > max_radius {
            return None;
        }
        let point = (
            cx + radius * theta.cos() * aspect,
            cy + radius * theta.sin(),
        );
        theta += 1.0 / (radius * stretch).max(1.0);
        Some(point)
    })
}
