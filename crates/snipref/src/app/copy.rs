//! Copy command handlers.

use anyhow::Result;

use crate::domain::model::SelectionSnapshot;
use crate::infra::clipboard::ClipboardSink;
use crate::infra::notify::{Level, Notifier};

/// Output shape of a copy command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStyle {
    /// `path:lineRange` only.
    PathOnly,
    /// `path:lineRange` plus a fenced code block of the selected text.
    WithCode,
}

/// Terminal outcome of a copy invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    /// Output written to the sink; carries the exact written text.
    Copied(String),
    /// No selection target was available; nothing was written.
    NoSelection,
    /// The selection carried no text; nothing was written.
    EmptySelection,
}

impl CopyStatus {
    pub fn succeeded(&self) -> bool {
        matches!(self, CopyStatus::Copied(_))
    }
}

/// Runs copy commands against host capabilities, independent of where the
/// selection came from or where output lands.
pub struct CopyHandler<'a, C: ClipboardSink, N: Notifier> {
    clipboard: &'a mut C,
    notifier: &'a mut N,
}

impl<'a, C: ClipboardSink, N: Notifier> CopyHandler<'a, C, N> {
    pub fn new(clipboard: &'a mut C, notifier: &'a mut N) -> Self {
        Self {
            clipboard,
            notifier,
        }
    }

    /// Render and copy the selection.
    ///
    /// Precondition failures warn exactly once and leave the sink untouched.
    /// Sink failures propagate unwrapped.
    pub fn run(
        &mut self,
        style: CopyStyle,
        selection: Option<&SelectionSnapshot>,
    ) -> Result<CopyStatus> {
        let Some(selection) = selection else {
            self.notifier.notify(Level::Warn, "no active selection");
            return Ok(CopyStatus::NoSelection);
        };

        if selection.is_empty() {
            self.notifier
                .notify(Level::Warn, "selection is empty, select some text first");
            return Ok(CopyStatus::EmptySelection);
        }

        let output = match style {
            CopyStyle::PathOnly => selection.reference(),
            CopyStyle::WithCode => selection.to_markdown(),
        };

        self.clipboard.write_text(&output)?;
        self.notifier
            .notify(Level::Info, &format!("copied {}", selection.reference()));

        Ok(CopyStatus::Copied(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::model::LineRange;

    #[derive(Default)]
    struct FakeClipboard {
        writes: Vec<String>,
    }

    impl ClipboardSink for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.writes.push(text.to_owned());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        messages: Vec<(Level, String)>,
    }

    impl Notifier for FakeNotifier {
        fn notify(&mut self, level: Level, message: &str) {
            self.messages.push((level, message.to_owned()));
        }
    }

    fn snapshot() -> SelectionSnapshot {
        SelectionSnapshot {
            relative_path: "src/app.ts".into(),
            range: LineRange::new(10, 12),
            text: "const x = 1;".into(),
            language: "typescript".into(),
        }
    }

    #[test]
    fn copy_path_writes_reference_and_notifies() {
        let mut clipboard = FakeClipboard::default();
        let mut notifier = FakeNotifier::default();

        let status = CopyHandler::new(&mut clipboard, &mut notifier)
            .run(CopyStyle::PathOnly, Some(&snapshot()))
            .unwrap();

        assert_eq!(status, CopyStatus::Copied("src/app.ts:10-12".into()));
        assert_eq!(clipboard.writes, vec!["src/app.ts:10-12".to_string()]);
        assert_eq!(
            notifier.messages,
            vec![(Level::Info, "copied src/app.ts:10-12".to_string())]
        );
    }

    #[test]
    fn copy_with_code_writes_fenced_block() {
        let mut clipboard = FakeClipboard::default();
        let mut notifier = FakeNotifier::default();

        let status = CopyHandler::new(&mut clipboard, &mut notifier)
            .run(CopyStyle::WithCode, Some(&snapshot()))
            .unwrap();

        let expected = "src/app.ts:10-12\n```typescript\nconst x = 1;\n```";
        assert_eq!(status, CopyStatus::Copied(expected.into()));
        assert_eq!(clipboard.writes, vec![expected.to_string()]);
        // The notification echoes the reference, not the code body.
        assert_eq!(
            notifier.messages,
            vec![(Level::Info, "copied src/app.ts:10-12".to_string())]
        );
    }

    #[test]
    fn no_selection_warns_once_without_writing() {
        let mut clipboard = FakeClipboard::default();
        let mut notifier = FakeNotifier::default();

        let status = CopyHandler::new(&mut clipboard, &mut notifier)
            .run(CopyStyle::PathOnly, None)
            .unwrap();

        assert_eq!(status, CopyStatus::NoSelection);
        assert!(clipboard.writes.is_empty());
        assert_eq!(notifier.messages.len(), 1);
        assert_eq!(notifier.messages[0].0, Level::Warn);
    }

    #[test]
    fn empty_selection_warns_once_without_writing() {
        let mut clipboard = FakeClipboard::default();
        let mut notifier = FakeNotifier::default();

        let mut empty = snapshot();
        empty.text.clear();

        let status = CopyHandler::new(&mut clipboard, &mut notifier)
            .run(CopyStyle::WithCode, Some(&empty))
            .unwrap();

        assert_eq!(status, CopyStatus::EmptySelection);
        assert!(clipboard.writes.is_empty());
        assert_eq!(notifier.messages.len(), 1);
        assert_eq!(notifier.messages[0].0, Level::Warn);
    }

    #[test]
    fn repeated_runs_on_unchanged_selection_are_identical() {
        let mut clipboard = FakeClipboard::default();
        let mut notifier = FakeNotifier::default();
        let selection = snapshot();

        let mut handler = CopyHandler::new(&mut clipboard, &mut notifier);
        let first = handler.run(CopyStyle::WithCode, Some(&selection)).unwrap();
        let second = handler.run(CopyStyle::WithCode, Some(&selection)).unwrap();

        assert_eq!(first, second);
        assert_eq!(clipboard.writes[0], clipboard.writes[1]);
    }
}
