use anyhow::{Context, Result};
use arboard::Clipboard;

/// Anything an address can be copied into.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Whether this platform can block a write until another application replaces it.
pub const HOLD_SUPPORTED: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

/// The system clipboard.
///
/// One handle is opened on the first write and kept until this value is dropped.
/// On X11 and Wayland the copied text is only served while a handle is alive,
/// so a long-running caller keeps it for its whole lifetime.
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
    hold_until_replaced: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            clipboard: None,
            hold_until_replaced: false,
        }
    }

    /// For processes that exit right after copying.
    ///
    /// On X11/Wayland each write blocks until another application takes the
    /// clipboard over; elsewhere it behaves like [`SystemClipboard::new`].
    pub fn holding() -> Self {
        Self {
            clipboard: None,
            hold_until_replaced: true,
        }
    }

    pub fn holds_until_replaced(&self) -> bool {
        self.hold_until_replaced && HOLD_SUPPORTED
    }

    fn handle(&mut self) -> Result<&mut Clipboard> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().context("Failed to access system clipboard")?,
        };
        Ok(self.clipboard.insert(clipboard))
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let hold = self.hold_until_replaced;
        let clipboard = self.handle()?;
        let written = if hold {
            set_and_hold(clipboard, text)
        } else {
            clipboard.set_text(text)
        };
        written.context("Failed to copy text to clipboard")
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_and_hold(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    clipboard.set().wait().text(text)
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_and_hold(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}
