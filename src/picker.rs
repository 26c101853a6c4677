use crate::history::HistoryList;
use anyhow::{anyhow, bail, Context, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// Separates the position key from the entry text on each picker line.
pub const SEPARATOR: &str = " => ";

/// Shown in place of real newlines so multi-line entries stay on one line.
const END_OF_LINE_MARK: &str = "⏎";

/// The rendered block is one argument to `echo -e`, so lines are joined with
/// the literal two-character sequence `\n` and re-expanded by the emitter.
const LINE_JOIN: &str = "\\n";

const EMITTER_COMMAND: &str = "echo";

/// Flatten an entry to a single picker line.
pub fn clean_text(text: &str) -> String {
    text.replace('\n', END_OF_LINE_MARK).replace('\t', "    ")
}

/// Produce the block of labeled lines the picker will display, one per entry:
/// `"<position> => <cleaned text>"`.
pub fn render(list: &HistoryList) -> String {
    let lines: Vec<String> = list
        .entries
        .iter()
        .map(|entry| format!("{}{}{}", entry.position, SEPARATOR, clean_text(&entry.text)))
        .collect();

    lines.join(LINE_JOIN)
}

/// Run the two-stage emitter/picker pipeline and capture the chosen line.
///
/// The emitter and picker run concurrently, connected by a pipe; we wait for
/// the emitter first so the picker sees a closed input stream before its
/// output is final. No timeout: the picker is interactive. Empty output means
/// the user dismissed the picker, which is a no-selection, not an error.
pub fn invoke(rendered: &str, line_count: usize, picker_command: &str) -> Result<Option<String>> {
    let mut emitter = Command::new(EMITTER_COMMAND)
        .arg("-e")
        .arg(rendered)
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start '{EMITTER_COMMAND}'"))?;

    let emitter_stdout = emitter
        .stdout
        .take()
        .ok_or_else(|| anyhow!("Failed to capture '{EMITTER_COMMAND}' output"))?;

    let picker = Command::new(picker_command)
        .arg("-l")
        .arg(line_count.to_string())
        .stdin(Stdio::from(emitter_stdout))
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start '{picker_command}'"))?;

    let emitter_status = emitter
        .wait()
        .with_context(|| format!("Failed to wait for '{EMITTER_COMMAND}'"))?;
    if !emitter_status.success() {
        bail!(
            "'{}' failed with exit code {:?}",
            EMITTER_COMMAND,
            emitter_status.code()
        );
    }

    let output = picker
        .wait_with_output()
        .with_context(|| format!("Failed to wait for '{picker_command}'"))?;

    let selection = String::from_utf8(output.stdout)
        .with_context(|| format!("Invalid UTF-8 output from '{picker_command}'"))?;

    // dmenu exits non-zero on dismissal, so check for emptiness first.
    if selection.trim().is_empty() {
        debug!("picker dismissed without a selection");
        return Ok(None);
    }

    if !output.status.success() {
        bail!(
            "'{}' failed with exit code {:?}",
            picker_command,
            output.status.code()
        );
    }

    Ok(Some(selection))
}

/// Parse the picker's reply back into a position.
///
/// Only the token before the first separator occurrence is parsed, so a
/// separator appearing inside the entry text does not make the reply
/// ambiguous.
pub fn resolve(selected_line: &str) -> Result<usize> {
    let token = selected_line
        .splitn(2, SEPARATOR)
        .next()
        .unwrap_or("")
        .trim();

    if token.is_empty() {
        bail!("Picker returned an empty selection");
    }

    token
        .parse::<usize>()
        .with_context(|| format!("Unexpected picker reply: {selected_line:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::DEFAULT_MAX_ENTRIES;
    use pretty_assertions::assert_eq;

    fn list_with(texts: &[&str]) -> HistoryList {
        let mut list = HistoryList::new(DEFAULT_MAX_ENTRIES);
        for text in texts {
            list.add(text);
        }
        list
    }

    #[test]
    fn test_clean_text_replaces_newlines_and_tabs() {
        assert_eq!(clean_text("one\ntwo"), "one⏎two");
        assert_eq!(clean_text("a\tb"), "a    b");
    }

    #[test]
    fn test_render_labels_each_entry_with_its_position() {
        let list = list_with(&["older", "newest"]);
        assert_eq!(render(&list), "0 => newest\\n1 => older");
    }

    #[test]
    fn test_render_flattens_multiline_entries() {
        let list = list_with(&["line one\nline two"]);
        assert_eq!(render(&list), "0 => line one⏎line two");
    }

    #[test]
    fn test_render_empty_list_is_empty() {
        let list = HistoryList::new(DEFAULT_MAX_ENTRIES);
        assert_eq!(render(&list), "");
    }

    #[test]
    fn test_resolve_parses_leading_position() {
        assert_eq!(resolve("3 => some text").unwrap(), 3);
    }

    #[test]
    fn test_resolve_tolerates_trailing_newline() {
        assert_eq!(resolve("0 => text\n").unwrap(), 0);
    }

    #[test]
    fn test_resolve_with_separator_inside_text() {
        // Only the first separator occurrence delimits the position.
        assert_eq!(resolve("2 => a => b => c").unwrap(), 2);
    }

    #[test]
    fn test_invoke_with_silent_picker_is_no_selection() {
        // `true` exits 0 without emitting anything, like a dismissed picker.
        let list = list_with(&["a"]);
        let rendered = render(&list);

        let selection = invoke(&rendered, list.len(), "true").unwrap();
        assert_eq!(selection, None);
    }

    #[test]
    fn test_invoke_with_missing_picker_fails() {
        let list = list_with(&["a"]);
        let rendered = render(&list);

        assert!(invoke(&rendered, list.len(), "clipgo-no-such-picker").is_err());
    }

    #[test]
    fn test_resolve_empty_line_fails() {
        assert!(resolve("").is_err());
        assert!(resolve("   ").is_err());
    }

    #[test]
    fn test_resolve_non_numeric_token_fails() {
        assert!(resolve("abc => text").is_err());
    }
}
