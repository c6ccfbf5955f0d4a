/// The subset of data rows an action or workflow applies to.
///
/// Row indices are zero-based and inclusive on both ends. Bounds are checked
/// for ordering at construction; clamping against the store's actual row
/// count happens at execution time via [`RowRange::resolve`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowRange {
    /// Every row the store currently holds.
    All,
    /// An explicit inclusive span, `start <= end`.
    Span { start: u32, end: u32 },
}

impl RowRange {
    pub fn span(start: u32, end: u32) -> Result<Self, &'static str> {
        if start > end {
            return Err("Range must be ordered: start <= end");
        }
        Ok(RowRange::Span { start, end })
    }

    /// A single row.
    pub fn single(row: u32) -> Self {
        RowRange::Span {
            start: row,
            end: row,
        }
    }

    /// Clamp this range against the store's current row count.
    ///
    /// Returns the effective inclusive `(start, end)` pair, or `None` when no
    /// rows fall inside the range (empty store, or the span lies entirely past
    /// the last row).
    pub fn resolve(&self, row_count: u32) -> Option<(u32, u32)> {
        if row_count == 0 {
            return None;
        }
        let last = row_count - 1;
        match *self {
            RowRange::All => Some((0, last)),
            RowRange::Span { start, end } => {
                if start > last {
                    None
                } else {
                    Some((start, end.min(last)))
                }
            }
        }
    }

    /// Number of rows the resolved range would cover.
    pub fn len(&self, row_count: u32) -> u32 {
        match self.resolve(row_count) {
            Some((start, end)) => end - start + 1,
            None => 0,
        }
    }

    pub fn is_empty(&self, row_count: u32) -> bool {
        self.len(row_count) == 0
    }
}

impl Default for RowRange {
    fn default() -> Self {
        RowRange::All
    }
}
