//! Accumulation of the comment block preceding a declaration.

/// Contiguous comment lines seen since the last declaration or code line.
///
/// Each entry is the trimmed text of one comment line with its `--` marker
/// removed. Empty comment lines are kept as empty entries so that they
/// become paragraph breaks in the joined description; trailing ones are
/// dropped when joining.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CommentBlock {
    lines: Vec<String>,
}

impl CommentBlock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    /// Join the block into a description.
    ///
    /// Returns `None` if the block holds no text, which includes a block of
    /// empty comment lines only.
    pub(crate) fn into_description(mut self) -> Option<String> {
        while self.lines.last().is_some_and(|line| line.is_empty()) {
            self.lines.pop();
        }

        if self.lines.is_empty() {
            None
        } else {
            Some(self.lines.join("\n"))
        }
    }
}
