//! Fixed-grid block formatting.
//!
//! The display surface receives exactly `height` lines of exactly `width`
//! characters each. Formatting is a pure function: identical input yields an
//! identical block byte-for-byte. A "character" is one grapheme cluster, so
//! a combining sequence occupies one grid cell.

use unicode_segmentation::UnicodeSegmentation;

/// Truncates `line` to the first `width` clusters, or right-pads it with
/// spaces to exactly `width`. No ellipsis, no word-boundary awareness.
pub fn fit_line(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width.max(line.len()));
    let mut count = 0;
    for cluster in line.graphemes(true) {
        if count == width {
            break;
        }
        out.push_str(cluster);
        count += 1;
    }
    for _ in count..width {
        out.push(' ');
    }
    out
}

/// Formats raw multi-line text into the fixed `width` x `height` block.
///
/// Rows past the end of the input are blank; input lines past `height` are
/// silently dropped. Rows are joined with a single line feed and no trailing
/// separator.
pub fn format_block(text: &str, width: usize, height: usize) -> String {
    let mut lines = text.split('\n');
    let mut block = String::with_capacity((width + 1) * height);
    for row in 0..height {
        if row > 0 {
            block.push('\n');
        }
        block.push_str(&fit_line(lines.next().unwrap_or(""), width));
    }
    block
}
