use serde::Serialize;
use std::ops::Range;

/// The primary selection of the editor, as byte offsets into the document.
///
/// `anchor == head` is a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// A collapsed selection at `pos`.
    pub fn cursor(pos: usize) -> Self {
        Self { anchor: pos, head: pos }
    }
}

/// True when either selection endpoint lies within `[range.start, range.end]`
/// inclusive.
pub fn is_cursor_in_range(selection: Selection, range: Range<usize>) -> bool {
    let inside = |pos: usize| range.start <= pos && pos <= range.end;
    inside(selection.anchor) || inside(selection.head)
}
