//! The scan driver: slices a character range into physical lines and styles them.

use log::trace;
use scanfold_core::{DocumentAccess, StyleRun, StyleTag};

use crate::classify::classify_line;
use crate::ALLOW_INITIAL_SPACES;

/// End-of-line boundary: `\n`, or `\r` not immediately followed by `\n`.
pub(crate) fn at_line_end(ch: char, next: char) -> bool {
    ch == '\n' || (ch == '\r' && next != '\n')
}

/// Style `[start, start + length)`, one physical line at a time.
///
/// Characters are buffered from `start`; at each end-of-line boundary the buffered
/// content is classified and the resulting runs written back through the accessor,
/// with the terminator position(s) styled `Default`. A trailing unterminated buffer is
/// classified against the range end. The only lookahead is one character past the
/// current position, for `\r\n` detection.
///
/// Precondition: `start` is a line start. Re-scans after an edit must realign by
/// rewinding to the start of the line containing the edit.
pub fn scan<D: DocumentAccess + ?Sized>(doc: &mut D, start: usize, length: usize) {
    let end = start + length;
    trace!("style pass over [{start}, {end})");
    let allow_initial_spaces = doc.config_int(ALLOW_INITIAL_SPACES, 1) != 0;

    doc.start_styling(start);
    let mut buffer = String::new();
    let mut line_start = start;

    for pos in start..end {
        let ch = doc.char_at(pos);
        buffer.push(ch);
        if at_line_end(ch, doc.safe_char_at(pos + 1)) {
            strip_terminator(&mut buffer);
            let end_boundary = line_start + buffer.chars().count();
            write_runs(
                doc,
                &classify_line(&buffer, line_start, end_boundary, allow_initial_spaces),
            );
            // Terminators sit outside every run; give them a defined style so a later
            // fold pass never reads a stale tag off a boundary character.
            doc.extend_style(pos, StyleTag::Default);
            buffer.clear();
            line_start = pos + 1;
        }
    }

    if !buffer.is_empty() {
        // Range ended mid-line; the range end is the line's boundary.
        write_runs(
            doc,
            &classify_line(&buffer, line_start, end, allow_initial_spaces),
        );
    }
}

fn strip_terminator(buffer: &mut String) {
    if buffer.ends_with('\n') {
        buffer.pop();
    }
    if buffer.ends_with('\r') {
        buffer.pop();
    }
}

fn write_runs<D: DocumentAccess + ?Sized>(doc: &mut D, runs: &[StyleRun]) {
    for run in runs {
        doc.extend_style(run.end - 1, run.tag);
    }
}
