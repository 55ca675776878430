//! Translation from key presses to editing actions.
//!
//! Keeping this a pure function of `(key, modifiers)` lets the text input's
//! editing rules be tested without any rendering or input plumbing.

use lumen_gui::{InputState, Key, NamedKey};
use std::collections::HashMap;

/// Modifier keys relevant to text editing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Either Shift key
    pub shift: bool,
    /// Ctrl or Command/Super, used for word jumps and clipboard shortcuts
    pub command: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        command: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        command: false,
    };
    pub const COMMAND: Modifiers = Modifiers {
        shift: false,
        command: true,
    };

    pub fn from_input(input: &InputState) -> Self {
        Self {
            shift: input.shift_held(),
            command: input.command_held(),
        }
    }
}

/// A single semantic editing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Insert a character at the cursor
    Insert(char),
    /// Move the cursor one character (or one word) to the left
    MoveLeft { word: bool, select: bool },
    /// Move the cursor one character (or one word) to the right
    MoveRight { word: bool, select: bool },
    /// Remove the character before the cursor
    DeleteBackward,
    /// Anchor a selection at the cursor
    BeginSelection,
    /// Copy the selected text to the clipboard
    Copy,
    /// Insert the clipboard text at the cursor
    Paste,
}

/// Table from an unshifted key character to the symbol it types with Shift.
///
/// Letters are not part of the table; Shift + letter always types the
/// uppercase letter. Keys missing from the table type nothing while Shift is
/// held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftMap {
    table: HashMap<char, char>,
}

impl ShiftMap {
    /// A table with no shifted symbols
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// US ANSI keyboard layout
    pub fn us() -> Self {
        [
            ('0', ')'),
            ('1', '!'),
            ('2', '@'),
            ('3', '#'),
            ('4', '$'),
            ('5', '%'),
            ('6', '^'),
            ('7', '&'),
            ('8', '*'),
            ('9', '('),
            ('-', '_'),
            ('=', '+'),
            ('[', '{'),
            (']', '}'),
            ('\\', '|'),
            ('`', '~'),
            (';', ':'),
            ('\'', '"'),
            (',', '<'),
            ('.', '>'),
            ('/', '?'),
        ]
        .into_iter()
        .collect()
    }

    /// Add or replace a mapping
    pub fn with_mapping(mut self, unshifted: char, shifted: char) -> Self {
        self.table.insert(unshifted, shifted);
        self
    }

    /// Remove a mapping so the key types nothing with Shift held
    pub fn without_mapping(mut self, unshifted: char) -> Self {
        self.table.remove(&unshifted);
        self
    }

    /// Character typed by `unshifted` with Shift held, if any
    pub fn shifted(&self, unshifted: char) -> Option<char> {
        if unshifted.is_ascii_alphabetic() {
            return Some(unshifted.to_ascii_uppercase());
        }
        self.table.get(&unshifted).copied()
    }
}

impl Default for ShiftMap {
    fn default() -> Self {
        Self::us()
    }
}

impl FromIterator<(char, char)> for ShiftMap {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}

/// Resolve a discrete key press into an editing action.
///
/// Returns `None` for keys that do nothing in a single-line text input
/// (pure modifiers other than Shift, navigation keys without a binding,
/// unmapped shifted symbols, control characters).
pub fn resolve_key(key: Key, modifiers: Modifiers, shift_map: &ShiftMap) -> Option<EditAction> {
    use EditAction::*;

    match key {
        Key::Named(NamedKey::Backspace) => Some(DeleteBackward),
        Key::Named(NamedKey::ArrowLeft) => Some(MoveLeft {
            word: modifiers.command,
            select: modifiers.shift,
        }),
        Key::Named(NamedKey::ArrowRight) => Some(MoveRight {
            word: modifiers.command,
            select: modifiers.shift,
        }),
        Key::Named(named) if named.is_shift() => Some(BeginSelection),
        Key::Named(_) | Key::Unknown => None,

        Key::Character(ch) if modifiers.shift => shift_map.shifted(ch).map(Insert),
        Key::Character(ch) if modifiers.command && ch.eq_ignore_ascii_case(&'c') => Some(Copy),
        Key::Character(ch) if modifiers.command && ch.eq_ignore_ascii_case(&'v') => Some(Paste),
        Key::Character(ch) if ch.is_control() => None,
        Key::Character(ch) => Some(Insert(ch.to_ascii_lowercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(key: Key, modifiers: Modifiers) -> Option<EditAction> {
        resolve_key(key, modifiers, &ShiftMap::us())
    }

    #[test]
    fn test_shifted_symbols() {
        let map = ShiftMap::us();
        assert_eq!(map.shifted('1'), Some('!'));
        assert_eq!(map.shifted('-'), Some('_'));
        assert_eq!(map.shifted('['), Some('{'));
        assert_eq!(map.shifted('q'), Some('Q'));
        assert_eq!(map.shifted('§'), None);
    }

    #[test]
    fn test_shift_inserts_uppercase_and_symbols() {
        assert_eq!(
            resolve(Key::Character('a'), Modifiers::SHIFT),
            Some(EditAction::Insert('A'))
        );
        assert_eq!(
            resolve(Key::Character('2'), Modifiers::SHIFT),
            Some(EditAction::Insert('@'))
        );
        assert_eq!(resolve(Key::Character('§'), Modifiers::SHIFT), None);
        assert_eq!(resolve(Key::Character(' '), Modifiers::SHIFT), None);
    }

    #[test]
    fn test_plain_keys_insert_lowercase_or_raw() {
        assert_eq!(
            resolve(Key::Character('H'), Modifiers::NONE),
            Some(EditAction::Insert('h'))
        );
        assert_eq!(
            resolve(Key::Character('1'), Modifiers::NONE),
            Some(EditAction::Insert('1'))
        );
        assert_eq!(
            resolve(Key::Character(' '), Modifiers::NONE),
            Some(EditAction::Insert(' '))
        );
    }

    #[test]
    fn test_clipboard_shortcuts() {
        assert_eq!(
            resolve(Key::Character('c'), Modifiers::COMMAND),
            Some(EditAction::Copy)
        );
        assert_eq!(
            resolve(Key::Character('v'), Modifiers::COMMAND),
            Some(EditAction::Paste)
        );
        // Other letters still type with the command modifier held
        assert_eq!(
            resolve(Key::Character('x'), Modifiers::COMMAND),
            Some(EditAction::Insert('x'))
        );
        // Shift takes precedence over the shortcut
        let both = Modifiers {
            shift: true,
            command: true,
        };
        assert_eq!(
            resolve(Key::Character('c'), both),
            Some(EditAction::Insert('C'))
        );
    }

    #[test]
    fn test_modifiers_never_insert() {
        for named in [
            NamedKey::ControlLeft,
            NamedKey::ControlRight,
            NamedKey::SuperLeft,
            NamedKey::SuperRight,
            NamedKey::AltLeft,
            NamedKey::CapsLock,
        ] {
            assert_eq!(resolve(Key::Named(named), Modifiers::NONE), None);
            assert_eq!(resolve(Key::Named(named), Modifiers::SHIFT), None);
        }
        assert_eq!(
            resolve(Key::Named(NamedKey::ShiftRight), Modifiers::SHIFT),
            Some(EditAction::BeginSelection)
        );
    }

    #[test]
    fn test_navigation_modifiers() {
        assert_eq!(
            resolve(Key::Named(NamedKey::ArrowLeft), Modifiers::COMMAND),
            Some(EditAction::MoveLeft {
                word: true,
                select: false
            })
        );
        assert_eq!(
            resolve(Key::Named(NamedKey::ArrowRight), Modifiers::SHIFT),
            Some(EditAction::MoveRight {
                word: false,
                select: true
            })
        );
        assert_eq!(resolve(Key::Named(NamedKey::Enter), Modifiers::NONE), None);
    }

    #[test]
    fn test_custom_layout() {
        let map = ShiftMap::empty().with_mapping('7', '/');
        assert_eq!(
            resolve_key(Key::Character('7'), Modifiers::SHIFT, &map),
            Some(EditAction::Insert('/'))
        );
        assert_eq!(
            resolve_key(Key::Character('1'), Modifiers::SHIFT, &map),
            None
        );
        assert_eq!(ShiftMap::us().without_mapping('1').shifted('1'), None);
    }
}
