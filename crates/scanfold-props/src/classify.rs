//! Single-pass line classification.
//!
//! One physical line's content (terminators excluded) is scanned forward once and
//! covered with contiguous style runs. Every malformed construct has a degraded
//! styling, so classification is total over all inputs.

use scanfold_core::{StyleRun, StyleTag};

/// Space or horizontal tab.
pub fn is_space_or_tab(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// An assignment character separating key from value.
pub fn is_assign_char(ch: char) -> bool {
    ch == '=' || ch == ':'
}

/// A character that starts a comment running to the end of the line.
pub fn is_comment_leader(ch: char) -> bool {
    matches!(ch, '#' | '!' | ';')
}

/// Whitespace for the purpose of blank-line detection, terminators included.
pub(crate) fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\x0b' | '\x0c' | '\r' | '\n')
}

/// Emits runs behind a moving cursor, so positions skipped between emits (leading and
/// interior whitespace) are absorbed into the next run. Empty emits are dropped.
struct RunEmitter {
    runs: Vec<StyleRun>,
    cursor: usize,
}

impl RunEmitter {
    fn new(start: usize) -> Self {
        Self {
            runs: Vec::new(),
            cursor: start,
        }
    }

    fn emit(&mut self, end: usize, tag: StyleTag) {
        if end > self.cursor {
            self.runs.push(StyleRun::new(self.cursor, end, tag));
            self.cursor = end;
        }
    }
}

/// Classify one line's content into style runs covering `[line_start, end_boundary)`.
///
/// `text` is the line's content without terminator characters; `line_start` is its
/// absolute document position and `end_boundary` the position classification runs to
/// (the next line's start minus terminators, or the scanned range's end for a final
/// partial line).
///
/// With `allow_initial_spaces` unset, a line starting with whitespace is wholly
/// `Default`: the host document treats indentation as structurally meaningful, so an
/// indented line is disqualified from structured classification.
pub fn classify_line(
    text: &str,
    line_start: usize,
    end_boundary: usize,
    allow_initial_spaces: bool,
) -> Vec<StyleRun> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut out = RunEmitter::new(line_start);

    if !allow_initial_spaces && chars.first().copied().is_some_and(is_space_or_tab) {
        out.emit(end_boundary, StyleTag::Default);
        return out.runs;
    }

    let mut i = 0;
    if allow_initial_spaces {
        while i < len && is_space_or_tab(chars[i]) {
            i += 1;
        }
    }

    // `i` is the resumable cursor: the key/value branch re-enters here when a value is
    // cut short by a `;`, so the rest of the line goes back through comment dispatch.
    while i < len {
        let ch = chars[i];
        if is_space_or_tab(ch) {
            i += 1;
            continue;
        }

        if is_comment_leader(ch) {
            out.emit(end_boundary, StyleTag::Comment);
            break;
        } else if ch == '[' {
            let mut j = i;
            while j < len && chars[j] != ']' {
                j += 1;
            }
            if j < len {
                out.emit(line_start + j + 1, StyleTag::Section);
                i = j + 1;
            } else {
                // Unterminated header: the rest of the line still reads as a section.
                out.emit(end_boundary, StyleTag::Section);
                break;
            }
        } else if ch == '@' {
            out.emit(line_start + i + 1, StyleTag::DefaultValueMarker);
            if i + 1 < len && is_assign_char(chars[i + 1]) {
                out.emit(line_start + i + 2, StyleTag::Assignment);
            }
            out.emit(end_boundary, StyleTag::Default);
            break;
        } else {
            let mut j = i;
            while j < len && !is_assign_char(chars[j]) {
                j += 1;
            }
            if j < len {
                out.emit(line_start + j, StyleTag::Key);
                out.emit(line_start + j + 1, StyleTag::Assignment);
                let mut k = j + 1;
                while k < len && chars[k] != ';' {
                    k += 1;
                }
                // The value stops at the first `;`; dispatch resumes there.
                out.emit(line_start + k, StyleTag::Default);
                if k < len {
                    i = k;
                    continue;
                }
                break;
            } else {
                out.emit(end_boundary, StyleTag::Default);
                break;
            }
        }
    }

    // Cover whatever the scan left behind (blank lines, trailing whitespace after a
    // closed header) so runs tile the line exactly.
    out.emit(end_boundary, StyleTag::Default);
    out.runs
}
