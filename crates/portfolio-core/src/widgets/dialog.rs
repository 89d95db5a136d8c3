//! Modal dialog open/closed state.

/// How a dialog was closed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DismissReason {
    /// Click on the backdrop outside the content
    Overlay,
    /// The explicit close control
    CloseButton,
    /// Escape key while the dialog has focus
    Escape,
}

/// Two-state dialog: open or closed, nothing in between
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DialogState {
    open: bool,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the dialog. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        if changed {
            tracing::debug!("dialog opened");
        }
        changed
    }

    /// Close the dialog. Returns false if it was already closed.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        let changed = self.open;
        self.open = false;
        if changed {
            tracing::debug!(?reason, "dialog dismissed");
        }
        changed
    }
}
