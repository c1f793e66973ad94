use crate::constants::{COPY_ERROR_LABEL, COPY_IDLE_LABEL, COPY_SUCCESS_LABEL};

/// Which clipboard path to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMethod {
    /// `navigator.clipboard.writeText`
    AsyncClipboard,
    /// Offscreen textarea + `document.execCommand("copy")`
    ExecCommand,
}

impl CopyMethod {
    pub fn choose(has_clipboard_api: bool, secure_context: bool) -> Self {
        if has_clipboard_api && secure_context {
            CopyMethod::AsyncClipboard
        } else {
            CopyMethod::ExecCommand
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copying,
    Copied,
    Failed,
}

/// Copy button state machine.
///
/// `Idle -> Copying -> (Copied | Failed) -> Idle`. Every state but `Idle`
/// counts as busy, so clicks during the copy or its feedback are ignored.
#[derive(Debug)]
pub struct CopyButton {
    state: CopyState,
    original_label: Option<String>,
    copies: u32,
}

impl Default for CopyButton {
    fn default() -> Self {
        Self {
            state: CopyState::Idle,
            original_label: None,
            copies: 0,
        }
    }
}

impl CopyButton {
    #[inline]
    pub fn state(&self) -> CopyState {
        self.state
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.state != CopyState::Idle
    }

    /// Number of copy operations actually started.
    #[inline]
    pub fn copies(&self) -> u32 {
        self.copies
    }

    /// Returns `false` (and does nothing) while a previous copy is in flight.
    pub fn begin(&mut self, current_label: &str) -> bool {
        if self.is_busy() {
            return false;
        }
        self.state = CopyState::Copying;
        self.original_label = Some(current_label.to_string());
        self.copies += 1;
        true
    }

    pub fn succeed(&mut self) -> &'static str {
        self.state = CopyState::Copied;
        COPY_SUCCESS_LABEL
    }

    pub fn fail(&mut self) -> &'static str {
        self.state = CopyState::Failed;
        COPY_ERROR_LABEL
    }

    /// Feedback delay elapsed; returns the label to restore.
    pub fn finish(&mut self) -> String {
        let label = match self.state {
            CopyState::Copied => self.original_label.take(),
            _ => None,
        };
        self.original_label = None;
        self.state = CopyState::Idle;
        label.unwrap_or_else(|| COPY_IDLE_LABEL.to_string())
    }
}
