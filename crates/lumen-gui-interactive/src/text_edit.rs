//! Editing state of a single-line text input.
//!
//! All indices are character indices (not byte offsets) into the text.

use crate::keymap::EditAction;
use lumen_gui::Clipboard;
use std::ops::Range;

/// Text buffer, cursor and selection of a text input.
///
/// Invariants:
/// - `cursor <= len()` and `anchor <= len()` at all times
/// - `selected_text()` always equals the characters in `selection()`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    text: String,
    cursor: usize,
    anchor: Option<usize>,
    selected_text: String,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State holding `text` with the cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.set_text(text);
        state.cursor = state.len();
        state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Selected span `[min(anchor, cursor), max(anchor, cursor))`
    pub fn selection(&self) -> Option<Range<usize>> {
        self.anchor
            .map(|anchor| anchor.min(self.cursor)..anchor.max(self.cursor))
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    /// Text before character index `index`
    pub fn prefix(&self, index: usize) -> &str {
        &self.text[..self.byte_offset(index)]
    }

    /// Replace the whole text. The cursor is clamped and the selection cleared.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.cursor.min(self.len());
        self.clear_selection();
    }

    /// Move the cursor without selecting, e.g. from a pointer click
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.len());
        self.clear_selection();
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
        self.selected_text.clear();
    }

    /// Apply one editing action. Returns whether the text changed.
    pub fn apply(&mut self, action: EditAction, clipboard: &mut dyn Clipboard) -> bool {
        match action {
            EditAction::Insert(ch) => {
                let mut buf = [0u8; 4];
                self.insert_str(ch.encode_utf8(&mut buf))
            }
            EditAction::MoveLeft { word, select } => {
                self.move_left(word, select);
                false
            }
            EditAction::MoveRight { word, select } => {
                self.move_right(word, select);
                false
            }
            EditAction::DeleteBackward => self.delete_backward(),
            EditAction::BeginSelection => {
                self.begin_selection();
                false
            }
            EditAction::Copy => {
                self.copy(clipboard);
                false
            }
            EditAction::Paste => self.paste(clipboard),
        }
    }

    pub fn move_left(&mut self, word: bool, select: bool) {
        let before = self.cursor;
        self.cursor = if word {
            word_boundary_left(&self.text, before)
        } else {
            before.saturating_sub(1)
        };
        self.after_move(before, select);
    }

    pub fn move_right(&mut self, word: bool, select: bool) {
        let before = self.cursor;
        self.cursor = if word {
            word_boundary_right(&self.text, before)
        } else {
            (before + 1).min(self.len())
        };
        self.after_move(before, select);
    }

    /// Anchor a selection at the current cursor
    pub fn begin_selection(&mut self) {
        self.anchor = Some(self.cursor);
        self.refresh_selected_text();
    }

    /// Remove the character before the cursor.
    ///
    /// An open selection is not deleted as a whole; it is dropped and only
    /// the single character is removed.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        self.clear_selection();
        true
    }

    /// Splice `s` in at the cursor and move the cursor past it
    pub fn insert_str(&mut self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }

        self.cursor = self.cursor.min(self.len());
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
        self.clear_selection();
        true
    }

    /// Put the selected text on the clipboard. Nothing is copied without a
    /// selection.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) {
        if self.selected_text.is_empty() {
            return;
        }
        if let Err(err) = clipboard.set_text(&self.selected_text) {
            log::warn!("text input: copy failed: {err}");
        }
    }

    /// Insert the clipboard text with line breaks flattened to spaces.
    /// An unreadable clipboard pastes nothing.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let pasted = match clipboard.get_text() {
            Ok(text) => flatten_newlines(&text),
            Err(err) => {
                log::warn!("text input: paste failed: {err}");
                String::new()
            }
        };
        self.insert_str(&pasted)
    }

    fn after_move(&mut self, before: usize, select: bool) {
        if select {
            self.anchor = Some(self.anchor.unwrap_or(before));
            self.refresh_selected_text();
        } else {
            self.clear_selection();
        }
    }

    fn refresh_selected_text(&mut self) {
        self.selected_text = match self.selection() {
            Some(span) => self
                .text
                .chars()
                .skip(span.start)
                .take(span.end - span.start)
                .collect(),
            None => String::new(),
        };
    }

    /// Byte offset of character index `index`, clamped to the text end
    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}

/// Target of a word jump to the left: the index just after the nearest space
/// before the cursor, or 0.
pub fn word_boundary_left(text: &str, from: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let from = from.min(chars.len());
    chars[..from]
        .iter()
        .rposition(|&c| c == ' ')
        .map_or(0, |space| space + 1)
}

/// Target of a word jump to the right: the index of the nearest space after
/// the cursor, or the text length.
///
/// A space directly under the cursor is skipped.
pub fn word_boundary_right(text: &str, from: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    if from >= chars.len() {
        return chars.len();
    }
    chars[from + 1..]
        .iter()
        .position(|&c| c == ' ')
        .map_or(chars.len(), |offset| from + 1 + offset)
}

/// Replace line breaks (`\r\n`, `\n`, `\r`) with single spaces
pub fn flatten_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_gui::{MemoryClipboard, NoClipboard};

    fn assert_consistent(state: &TextInputState) {
        assert!(state.cursor() <= state.len());
        let expected: String = match state.selection() {
            Some(span) => state
                .text()
                .chars()
                .skip(span.start)
                .take(span.len())
                .collect(),
            None => String::new(),
        };
        assert_eq!(state.selected_text(), expected);
    }

    fn type_str(state: &mut TextInputState, s: &str) {
        let mut clipboard = NoClipboard;
        for ch in s.chars() {
            state.apply(EditAction::Insert(ch), &mut clipboard);
        }
    }

    #[test]
    fn test_moves_stay_in_bounds_and_clear_selection() {
        let mut state = TextInputState::with_text("abc");
        state.begin_selection();
        for _ in 0..5 {
            state.move_right(false, false);
            assert_consistent(&state);
        }
        assert_eq!(state.cursor(), 3);
        for _ in 0..5 {
            state.move_left(false, false);
            assert_consistent(&state);
        }
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.selection(), None);
    }

    #[test]
    fn test_word_jumps() {
        let text = "hello world foo";
        assert_eq!(word_boundary_left(text, 15), 12);
        assert_eq!(word_boundary_left(text, 12), 12);
        assert_eq!(word_boundary_left(text, 11), 6);
        assert_eq!(word_boundary_left(text, 6), 6);
        assert_eq!(word_boundary_left(text, 5), 0);
        assert_eq!(word_boundary_left(text, 0), 0);
        assert_eq!(word_boundary_left(text, 99), 12);

        assert_eq!(word_boundary_right(text, 0), 5);
        assert_eq!(word_boundary_right(text, 5), 11);
        assert_eq!(word_boundary_right(text, 11), 15);
        assert_eq!(word_boundary_right(text, 15), 15);

        assert_eq!(word_boundary_left("nospaces", 5), 0);
        assert_eq!(word_boundary_right("nospaces", 5), 8);
    }

    #[test]
    fn test_word_jump_left_lands_after_preceding_space() {
        // From every index, the jump ends just after the closest space to its left
        let text = "one two three";
        let chars: Vec<char> = text.chars().collect();
        for from in 0..=chars.len() {
            let expected = (0..from)
                .rev()
                .find(|&i| chars[i] == ' ')
                .map_or(0, |space| space + 1);
            assert_eq!(word_boundary_left(text, from), expected, "from {from}");
        }
        assert_eq!(word_boundary_left("hello world", 6), 6);
        assert_eq!(word_boundary_left(text, 8), 8);
    }

    #[test]
    fn test_word_jump_moves_cursor() {
        let mut state = TextInputState::with_text("one two");
        state.move_left(true, false);
        assert_eq!(state.cursor(), 4);

        // Right after a space the jump stays put
        state.move_left(true, false);
        assert_eq!(state.cursor(), 4);

        state.move_left(false, true);
        state.move_left(true, true);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.selection(), Some(0..4));
        assert_eq!(state.selected_text(), "one ");
        assert_consistent(&state);
    }

    #[test]
    fn test_delete_backward() {
        let mut state = TextInputState::with_text("abc");
        state.set_cursor(0);
        assert!(!state.delete_backward());
        assert_eq!(state.text(), "abc");
        assert_eq!(state.cursor(), 0);

        state.set_cursor(2);
        assert!(state.delete_backward());
        assert_eq!(state.text(), "ac");
        assert_eq!(state.cursor(), 1);

        state.set_cursor(2);
        assert!(state.delete_backward());
        assert_eq!(state.text(), "a");
    }

    #[test]
    fn test_delete_ignores_selection_but_clears_it() {
        let mut state = TextInputState::with_text("abcdef");
        state.move_left(false, true);
        state.move_left(false, true);
        assert_eq!(state.selected_text(), "ef");

        state.delete_backward();
        assert_eq!(state.text(), "abcef");
        assert_eq!(state.cursor(), 3);
        assert_eq!(state.selection(), None);
        assert_consistent(&state);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut state = TextInputState::with_text("acd");
        state.set_cursor(1);
        type_str(&mut state, "b");
        assert_eq!(state.text(), "abcd");
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn test_multibyte_text() {
        let mut state = TextInputState::with_text("héllo");
        state.move_left(false, false);
        state.move_left(false, false);
        state.move_left(false, false);
        state.delete_backward();
        assert_eq!(state.text(), "hllo");
        type_str(&mut state, "ë");
        assert_eq!(state.text(), "hëllo");
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.prefix(2), "hë");
    }

    #[test]
    fn test_shift_selection_scenario() {
        let mut state = TextInputState::with_text("abcdef");
        assert_eq!(state.cursor(), 6);
        for _ in 0..3 {
            state.move_left(false, true);
        }
        assert_eq!(state.selection(), Some(3..6));
        assert_eq!(state.selected_text(), "def");

        // Crossing the anchor flips the span
        for _ in 0..5 {
            state.move_right(false, true);
        }
        assert_eq!(state.selection(), Some(6..6));
        state.move_left(true, true);
        assert_eq!(state.selection(), Some(0..6));
        assert_consistent(&state);
    }

    #[test]
    fn test_begin_selection_anchors_at_cursor() {
        let mut state = TextInputState::with_text("abcdef");
        state.set_cursor(2);
        state.begin_selection();
        state.move_right(false, true);
        state.move_right(false, true);
        assert_eq!(state.selection(), Some(2..4));
        assert_eq!(state.selected_text(), "cd");
    }

    #[test]
    fn test_copy_leaves_state_untouched() {
        let mut state = TextInputState::with_text("copy me");
        state.move_left(true, true);
        let before = state.clone();

        let mut clipboard = MemoryClipboard::new();
        assert!(!state.apply(EditAction::Copy, &mut clipboard));
        assert_eq!(clipboard.contents(), Some("me"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_copy_without_selection_keeps_clipboard() {
        let state = TextInputState::with_text("abc");
        let mut clipboard = MemoryClipboard::with_text("kept");
        state.copy(&mut clipboard);
        assert_eq!(clipboard.contents(), Some("kept"));
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut state = TextInputState::with_text("xy");
        state.set_cursor(1);
        let mut clipboard = MemoryClipboard::with_text("a\nb");
        assert!(state.apply(EditAction::Paste, &mut clipboard));
        assert_eq!(state.text(), "xa by");
        assert_eq!(state.cursor(), 4);

        assert_eq!(flatten_newlines("a\r\nb\rc"), "a b c");
    }

    #[test]
    fn test_paste_from_unavailable_clipboard_is_noop() {
        let mut state = TextInputState::with_text("abc");
        assert!(!state.apply(EditAction::Paste, &mut NoClipboard));
        assert_eq!(state.text(), "abc");
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_set_text_clamps_cursor() {
        let mut state = TextInputState::with_text("a long line");
        state.move_left(false, true);
        state.set_text("ab");
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.selection(), None);
        assert_consistent(&state);
    }
}
