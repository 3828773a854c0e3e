// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] macro. Only meant to be used in tests,
/// since `pretty_assertions` is a dev dependency.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Early return from a session command when the caret is not on a real line, ie, when it
/// sits on the virtual row just past the end of the document.
macro_rules! caret_on_line_or_return {
    ($session:expr) => {
        if $session.caret.row.as_usize() >= $session.document.line_count() {
            return;
        }
    };
}
pub(crate) use caret_on_line_or_return;

/// Syntactic sugar to run a block only when a debug flag is set.
///
/// ```ignore
/// call_if_true!(DEBUG_LINE_EDITOR_MOD, {
///     tracing::debug!(message = "🖍️ rehighlight", start = ?start);
/// });
/// ```
#[macro_export]
macro_rules! call_if_true {
    ($cond:ident, $block: expr) => {{
        if $cond {
            $block
        }
    }};
}
