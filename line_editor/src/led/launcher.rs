// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `led` binary is the thinnest possible collaborator around [`EditorSession`]: it
//! does the file I/O the buffer core doesn't, and prints what the core computed.

use std::{fs, io::{ErrorKind, Write}, path::Path};

use miette::IntoDiagnostic;

use crate::{CLIArg, EditorSession, IncrementalSearch, LineEditorError, SearchKey,
            SessionConfig, metadata_filename, tags_to_string};

/// Split file content into newline stripped lines. A trailing newline does not start an
/// extra line, and a `\r` before a newline is dropped.
#[must_use]
pub fn split_into_lines(content: &[u8]) -> Vec<&[u8]> {
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    if content.is_empty() {
        return vec![];
    }
    content
        .split(|byte| *byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect()
}

/// Read a file, treating a missing file as [`None`].
///
/// # Errors
///
/// Returns [`LineEditorError::ReadFile`] for anything other than a missing file.
pub fn try_read_optional(path: &Path) -> Result<Option<Vec<u8>>, LineEditorError> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(LineEditorError::ReadFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the file named in `cli_arg` (and its marker metadata) into a new session.
///
/// # Errors
///
/// Returns an error if the file can't be read.
#[tracing::instrument(skip_all, fields(file_path = %cli_arg.file_path))]
pub fn try_load_session(cli_arg: &CLIArg) -> miette::Result<EditorSession> {
    let file_path = Path::new(&cli_arg.file_path);
    let content = fs::read(file_path).map_err(|source| LineEditorError::ReadFile {
        path: file_path.to_path_buf(),
        source,
    })?;

    let mut session = EditorSession::new(SessionConfig::default().with_tab_stop(cli_arg.tab_stop));
    session.set_filename(cli_arg.file_path.as_str());
    session.load_lines(split_into_lines(&content));

    let metadata_path = metadata_filename(&cli_arg.file_path);
    if let Some(metadata) = try_read_optional(Path::new(&metadata_path))? {
        session.import_markers(&String::from_utf8_lossy(&metadata));
    }

    tracing::info!(
        message = "📜 file loaded",
        stats = %session.stats(),
        markers = session.markers().len(),
    );

    Ok(session)
}

/// Write the document and its markers back to disk.
///
/// # Errors
///
/// Returns [`LineEditorError::WriteFile`] if either file can't be written.
pub fn try_save_session(session: &mut EditorSession, file_path: &str) -> miette::Result<usize> {
    let content = session.lines_to_flat_text();
    fs::write(file_path, &content).map_err(|source| LineEditorError::WriteFile {
        path: file_path.into(),
        source,
    })?;

    let metadata_path = metadata_filename(file_path);
    fs::write(&metadata_path, session.export_markers()).map_err(|source| {
        LineEditorError::WriteFile {
            path: metadata_path.clone().into(),
            source,
        }
    })?;

    session.mark_saved();
    tracing::info!(message = "💾 file saved", bytes = content.len());
    Ok(content.len())
}

/// Everything `led` does for one invocation, printing to `out`.
///
/// # Errors
///
/// Returns an error if the file can't be read or written, or if `out` fails.
pub fn run(cli_arg: &CLIArg, out: &mut impl Write) -> miette::Result<()> {
    let mut session = try_load_session(cli_arg)?;

    writeln!(
        out,
        "{} - {} | {} | {} markers",
        cli_arg.file_path,
        session.file_type(),
        session.stats(),
        session.markers().len()
    )
    .into_diagnostic()?;

    if let Some(query) = &cli_arg.find {
        let mut search = IncrementalSearch::start(&session);
        let written = match search.on_key(&mut session, query, SearchKey::Edited) {
            Some(search_match) => writeln!(
                out,
                "found {query:?} at row {}, col {} (rendered col {})",
                search_match.row, search_match.col, search_match.render_col
            ),
            None => writeln!(out, "{query:?} not found"),
        };
        written.into_diagnostic()?;
        // The dump below shows the match overlay while it is still painted.
        if cli_arg.dump_tags {
            write_tag_dump(&session, out)?;
        }
        search.on_key(&mut session, query, SearchKey::Accept);
    } else if cli_arg.dump_tags {
        write_tag_dump(&session, out)?;
    }

    if cli_arg.save {
        let bytes_written = try_save_session(&mut session, &cli_arg.file_path)?;
        writeln!(out, "saved {bytes_written} bytes").into_diagnostic()?;
    }

    Ok(())
}

fn write_tag_dump(session: &EditorSession, out: &mut impl Write) -> miette::Result<()> {
    for line in session.document().lines() {
        writeln!(
            out,
            "{:>4} | {}\n     | {}",
            line.index().as_usize(),
            String::from_utf8_lossy(line.rendered()),
            tags_to_string(line.tags())
        )
        .into_diagnostic()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::assert_eq2;

    /// A fresh folder under the system temp dir, unique to one test.
    fn temp_dir_for(test_name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("r3bl_line_editor_{}_{test_name}", std::process::id()));
        _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn run_to_string(args: &[&str]) -> miette::Result<String> {
        let cli_arg = CLIArg::parse_from(args);
        let mut out = Vec::new();
        run(&cli_arg, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_split_into_lines() {
        assert_eq2!(split_into_lines(b"a\r\nb\n"), vec![&b"a"[..], &b"b"[..]]);
        assert_eq2!(split_into_lines(b"a\n\n"), vec![&b"a"[..], &b""[..]]);
        assert_eq2!(split_into_lines(b"a"), vec![&b"a"[..]]);
        assert!(split_into_lines(b"").is_empty());
        assert!(split_into_lines(b"\n").is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = temp_dir_for("missing");
        let path = dir.join("nope.c");
        let result = run_to_string(&["led", path.to_str().unwrap()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dump_tags_with_markers_and_search() {
        let dir = temp_dir_for("dump");
        let path = dir.join("main.c");
        fs::write(&path, "if (x > 10) // done\nint y;\n").unwrap();
        fs::write(dir.join("main.c_metadata"), "0,1_").unwrap();
        let path_str = path.to_str().unwrap();

        let output = run_to_string(&["led", path_str, "--dump-tags", "--find", "y;"]).unwrap();
        let expected = format!(
            "{path_str} - c | 2 lines, 8 words, 25 chars | 1 markers\n\
             found \"y;\" at row 1, col 4 (rendered col 4)\n   \
             0 | if (x > 10) // done\n     \
             | kk......nn..ccccccc\n   \
             1 | int y;\n     \
             | @KK.??\n"
        );
        assert_eq2!(output, expected);
    }

    #[test]
    fn test_save_writes_file_and_metadata() {
        let dir = temp_dir_for("save");
        let path = dir.join("notes.txt");
        fs::write(&path, "a\tb\r\nc").unwrap();
        let path_str = path.to_str().unwrap();

        let output = run_to_string(&["led", path_str, "--save"]).unwrap();
        assert!(output.starts_with(&format!("{path_str} - no ft | 2 lines, 3 words, 4 chars")));
        assert!(output.ends_with("saved 6 bytes\n"));
        assert_eq2!(fs::read(&path).unwrap(), b"a\tb\nc\n".to_vec());
        assert_eq2!(fs::read(dir.join("notes.txt_metadata")).unwrap(), Vec::<u8>::new());
    }
}
