//! Clipboard collaborator.
//!
//! The core only promises that the committed password is available; writing
//! it somewhere is the job of a [`Clipboard`] implementation.

use std::fmt;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    Unavailable(String),
    Write(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(e) => write!(f, "Clipboard unavailable: {}", e),
            ClipboardError::Write(e) => write!(f, "Clipboard error: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via copypasta.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        ClipboardContext::new()
            .map(|ctx| Self { ctx })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        // Reading back makes X11 providers take ownership before we move on.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

/// Keeps the last copied text in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(old) = self.contents.as_mut() {
            old.zeroize();
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
impl Drop for MemoryClipboard {
    fn drop(&mut self) {
        if let Some(contents) = self.contents.as_mut() {
            contents.zeroize();
        }
    }
}
