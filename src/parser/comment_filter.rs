//! Line classifier for `/* ... */` block comments.
//!
//! Classification is line-granular: a line that opens a comment, lies inside
//! one, or closes one is dropped as a whole.

/// Marker that opens a block comment
pub const COMMENT_START: &str = "/*";

/// Marker that closes a block comment
pub const COMMENT_END: &str = "*/";

/// What to do with a classified line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Line survives (line breaks are still removed by the caller)
    Keep,
    /// Line is part of a block comment
    Drop,
}

/// Stateful block-comment classifier
///
/// Comments do not nest: a start marker seen while a comment is already
/// open leaves the state unchanged, and the first end marker closes it.
#[derive(Debug, Default)]
pub struct CommentFilter {
    inside_comment: bool,
}

impl CommentFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the filter is currently inside a block comment
    #[must_use]
    pub fn inside_comment(&self) -> bool {
        self.inside_comment
    }

    /// Classify one physical line and advance the comment state
    ///
    /// The start check runs before the keep decision and the end check runs
    /// after it, so both the opening and the closing line of a comment are
    /// dropped together with everything in between.
    pub fn classify(&mut self, line: &str) -> LineAction {
        if line.contains(COMMENT_START) {
            self.inside_comment = true;
        }

        let action = if self.inside_comment {
            LineAction::Drop
        } else {
            LineAction::Keep
        };

        if line.contains(COMMENT_END) {
            self.inside_comment = false;
        }

        action
    }
}

/// Remove every line-break character (`\r` and `\n`) from a line
///
/// Other whitespace is left untouched. Borrows when there is nothing to remove.
#[must_use]
pub fn strip_line_breaks(line: &str) -> std::borrow::Cow<'_, str> {
    if line.contains(['\r', '\n']) {
        std::borrow::Cow::Owned(line.chars().filter(|&c| c != '\r' && c != '\n').collect())
    } else {
        std::borrow::Cow::Borrowed(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_all(lines: &[&str]) -> Vec<LineAction> {
        let mut filter = CommentFilter::new();
        lines.iter().map(|line| filter.classify(line)).collect()
    }

    #[test]
    fn test_plain_lines_kept() {
        let actions = classify_all(&["a: 1;", "b: 2;"]);
        assert_eq!(actions, vec![LineAction::Keep, LineAction::Keep]);
    }

    #[test]
    fn test_single_line_comment_dropped() {
        let mut filter = CommentFilter::new();
        assert_eq!(filter.classify("x /* start-end */ y"), LineAction::Drop);
        assert!(!filter.inside_comment());
    }

    #[test]
    fn test_multiline_comment() {
        let actions = classify_all(&["a=1", "/* comment", "b=2", "*/", "c=3"]);
        assert_eq!(
            actions,
            vec![
                LineAction::Keep,
                LineAction::Drop,
                LineAction::Drop,
                LineAction::Drop,
                LineAction::Keep,
            ]
        );
    }

    #[test]
    fn test_closing_line_with_code_dropped() {
        // Code after the end marker on the closing line does not survive
        let actions = classify_all(&["/* open", "close */ x: 5;", "y: 6;"]);
        assert_eq!(
            actions,
            vec![LineAction::Drop, LineAction::Drop, LineAction::Keep]
        );
    }

    #[test]
    fn test_start_marker_inside_open_comment() {
        // No nesting: the first end marker closes the comment
        let mut filter = CommentFilter::new();
        assert_eq!(filter.classify("/* outer"), LineAction::Drop);
        assert_eq!(filter.classify("/* inner"), LineAction::Drop);
        assert!(filter.inside_comment());
        assert_eq!(filter.classify("*/"), LineAction::Drop);
        assert!(!filter.inside_comment());
        assert_eq!(filter.classify("z: 3;"), LineAction::Keep);
    }

    #[test]
    fn test_end_marker_before_start_marker() {
        // Marker positions within the line do not matter, only presence
        let mut filter = CommentFilter::new();
        assert_eq!(filter.classify("a */ b /* c"), LineAction::Drop);
        assert!(!filter.inside_comment());
    }

    #[test]
    fn test_stray_end_marker_kept() {
        let mut filter = CommentFilter::new();
        assert_eq!(filter.classify("x: 1; */"), LineAction::Keep);
        assert!(!filter.inside_comment());
    }

    #[test]
    fn test_strip_line_breaks() {
        assert_eq!(strip_line_breaks("a=1\n"), "a=1");
        assert_eq!(strip_line_breaks("a=1\r\n"), "a=1");
        assert_eq!(strip_line_breaks("  a = 1\t\n"), "  a = 1\t");
        assert_eq!(strip_line_breaks("no break"), "no break");
    }
}
