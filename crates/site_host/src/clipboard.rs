//! Clipboard contract for the contact page's copy-to-clipboard affordance.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ClipboardService`].
pub type ClipboardFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Writes text to the host clipboard.
pub trait ClipboardService {
    /// Places `text` on the clipboard.
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>>;
}

/// No-op clipboard for targets without clipboard access.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClipboard;

impl ClipboardService for NoopClipboard {
    fn write_text<'a>(&'a self, _text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

/// Clipboard that records writes, for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl MemoryClipboard {
    /// Every text written so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl ClipboardService for MemoryClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_clipboard_records_writes_in_order() {
        let clipboard = MemoryClipboard::default();
        let clipboard_obj: &dyn ClipboardService = &clipboard;

        block_on(clipboard_obj.write_text("ada@example.com")).expect("write");
        block_on(clipboard_obj.write_text("second")).expect("write");

        assert_eq!(clipboard.writes(), vec!["ada@example.com", "second"]);
    }
}
