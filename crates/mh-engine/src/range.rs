//! Match spans and the text ranges built from them.

use crate::dom::NodeId;

/// Half-open byte range `[start, end)` inside one text node's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty span {start}..{end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl From<(usize, usize)> for MatchSpan {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// A span bound to the text node it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub node: NodeId,
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(node: NodeId, span: MatchSpan) -> Self {
        Self {
            node,
            start: span.start,
            end: span.end,
        }
    }
}

/// All ranges one entry produced during one scan, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<TextRange>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend_from_spans(&mut self, node: NodeId, spans: &[MatchSpan]) {
        self.ranges
            .extend(spans.iter().map(|span| TextRange::new(node, *span)));
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[TextRange] {
        &self.ranges
    }

}

/// One entry's matches from one scan, with what is needed to paint them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMatches {
    /// Position of the entry in the stored list.
    pub index: usize,
    pub color: String,
    pub ranges: RangeSet,
}

impl EntryMatches {
    pub fn new(index: usize, color: impl Into<String>) -> Self {
        Self {
            index,
            color: color.into(),
            ranges: RangeSet::new(),
        }
    }
}
