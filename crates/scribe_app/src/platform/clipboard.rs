use scribe_logging::scribe_debug;

/// Plain-text clipboard destination.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// Host clipboard via `arboard`.
///
/// The handle is opened on first use and kept for the session: on X11 the
/// copied text is only served while its owner is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        if self.inner.is_none() {
            scribe_debug!("opening system clipboard");
            self.inner = Some(arboard::Clipboard::new().map_err(|err| err.to_string())?);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err("clipboard unavailable".to_string());
        };
        clipboard
            .set_text(text.to_owned())
            .map_err(|err| err.to_string())
    }
}
