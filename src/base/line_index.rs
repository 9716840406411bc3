use text_size::{TextRange, TextSize};

/// A 0-indexed line/column position. Columns count UTF-8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Maps byte offsets to lines and back.
///
/// Every line is stored twice: where it starts and where its content ends,
/// i.e. before the `\n` or `\r\n` terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<TextSize>,
    ends: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut starts = vec![TextSize::new(0)];
        let mut ends = Vec::new();

        for (i, byte) in bytes.iter().enumerate() {
            if *byte != b'\n' {
                continue;
            }
            let end = if i > 0 && bytes[i - 1] == b'\r' { i - 1 } else { i };
            ends.push(TextSize::new(end as u32));
            starts.push(TextSize::new(i as u32 + 1));
        }
        ends.push(TextSize::of(text));

        Self { starts, ends }
    }

    /// Number of lines, counting the (possibly empty) line after a final newline.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// The 0-indexed line containing `offset`.
    pub fn line_of(&self, offset: TextSize) -> usize {
        self.starts.partition_point(|&start| start <= offset).saturating_sub(1)
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self.line_of(offset);
        let col = offset - self.starts[line];
        LineCol::new(line as u32, col.into())
    }

    /// Converts a position back to an offset, if the line exists and the
    /// column lies within the line content.
    pub fn offset(&self, pos: LineCol) -> Option<TextSize> {
        let line = pos.line as usize;
        let start = *self.starts.get(line)?;
        let offset = start + TextSize::new(pos.col);
        (offset <= self.ends[line]).then_some(offset)
    }

    /// Content range of the line containing `offset`, without its terminator.
    pub fn line_range(&self, offset: TextSize) -> TextRange {
        let line = self.line_of(offset);
        TextRange::new(self.starts[line], self.ends[line])
    }

    pub fn line_start(&self, line: usize) -> Option<TextSize> {
        self.starts.get(line).copied()
    }
}
