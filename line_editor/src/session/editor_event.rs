// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

use crate::EditorSession;

/// Events that can be applied to an [`EditorSession`]. Decoding key presses into these
/// is up to the terminal layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    InsertChar(char),
    InsertString(String),
    InsertNewLine,
    Delete,
    Backspace,
    Home,
    End,
    MoveCaret(CaretDirection),
    CreateMarker,
    JumpToNextMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum CaretDirection {
    Up,
    Down,
    Left,
    Right,
}

impl EditorEvent {
    pub fn apply_editor_event(session: &mut EditorSession, event: EditorEvent) {
        match event {
            EditorEvent::InsertChar('\n') => session.insert_new_line_at_caret(),

            EditorEvent::InsertChar('\r') => {}

            EditorEvent::InsertChar(character) => {
                let mut buffer = [0; 4];
                for byte in character.encode_utf8(&mut buffer).bytes() {
                    session.insert_byte_at_caret(byte);
                }
            }

            EditorEvent::InsertString(string) => {
                for byte in string.bytes() {
                    match byte {
                        b'\n' => session.insert_new_line_at_caret(),
                        b'\r' => {}
                        _ => session.insert_byte_at_caret(byte),
                    }
                }
            }

            EditorEvent::InsertNewLine => session.insert_new_line_at_caret(),

            EditorEvent::Delete => session.delete_at_caret(),

            EditorEvent::Backspace => session.backspace_at_caret(),

            EditorEvent::Home => session.move_caret_home(),

            EditorEvent::End => session.move_caret_end(),

            EditorEvent::MoveCaret(direction) => session.move_caret(direction),

            EditorEvent::CreateMarker => session.create_marker_at_caret(),

            EditorEvent::JumpToNextMarker => session.jump_to_next_marker(),
        }
    }

    pub fn apply_editor_events(
        session: &mut EditorSession,
        events: impl IntoIterator<Item = EditorEvent>,
    ) {
        for event in events {
            EditorEvent::apply_editor_event(session, event);
        }
    }
}
