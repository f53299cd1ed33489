//! Source map for the one file an interpreter run ever touches.
//!
//! The teacher's `SourceMap` is a registry of many [`FileId`]-keyed files,
//! since a compiler links multiple compilation units together. A single
//! interpreter invocation only ever has one source file open at a time, so
//! this holds just that file's name and content plus precomputed line-start
//! offsets, and answers the one question diagnostics need: "what does line N
//! look like?"

pub struct SourceMap {
    name: String,
    content: String,
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &str) -> Vec<usize> {
        let mut line_starts = vec![0];
        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The text of a 1-indexed source line, with its trailing newline
    /// trimmed. `None` if `line` is out of range.
    pub fn line_at(&self, line: u32) -> Option<&str> {
        let line = line as usize;
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_at_returns_requested_line() {
        let map = SourceMap::new("main.lua", "local x = 1\nprint(x)\n");
        assert_eq!(map.line_at(1), Some("local x = 1"));
        assert_eq!(map.line_at(2), Some("print(x)"));
    }

    #[test]
    fn line_at_out_of_range_is_none() {
        let map = SourceMap::new("main.lua", "print(1)\n");
        assert_eq!(map.line_at(0), None);
        assert_eq!(map.line_at(99), None);
    }

    #[test]
    fn line_count_matches_number_of_lines() {
        let map = SourceMap::new("main.lua", "a\nb\nc");
        assert_eq!(map.line_count(), 3);
    }
}
