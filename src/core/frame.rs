/// Per-frame update categories. Each one has its own pending flag so that a
/// burst of triggers within one refresh period collapses into one update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    CursorParallax,
    Navbar,
    ScrollParallax,
    Timeline,
}

impl UpdateKind {
    pub const ALL: [UpdateKind; 4] = [
        UpdateKind::CursorParallax,
        UpdateKind::Navbar,
        UpdateKind::ScrollParallax,
        UpdateKind::Timeline,
    ];

    #[inline]
    fn slot(self) -> usize {
        match self {
            UpdateKind::CursorParallax => 0,
            UpdateKind::Navbar => 1,
            UpdateKind::ScrollParallax => 2,
            UpdateKind::Timeline => 3,
        }
    }
}

/// "Pending work" flags, one per [`UpdateKind`].
#[derive(Debug, Default, Clone)]
pub struct FrameGates {
    pending: [bool; 4],
}

impl FrameGates {
    /// Returns `true` when the caller must request a frame; `false` when one
    /// is already outstanding for `kind`.
    pub fn request(&mut self, kind: UpdateKind) -> bool {
        let slot = &mut self.pending[kind.slot()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    /// Called at the start of the frame callback so the update can re-arm.
    pub fn complete(&mut self, kind: UpdateKind) {
        self.pending[kind.slot()] = false;
    }

    #[inline]
    pub fn is_pending(&self, kind: UpdateKind) -> bool {
        self.pending[kind.slot()]
    }
}

/// A cancellable outstanding frame request (tilt). `H` is the platform handle.
#[derive(Debug)]
pub struct FrameSlot<H> {
    handle: Option<H>,
}

impl<H> Default for FrameSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> FrameSlot<H> {
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn arm(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    /// Frame ran; forget the handle.
    pub fn clear(&mut self) {
        self.handle = None;
    }

    /// Take the handle so the caller can cancel the request.
    pub fn cancel(&mut self) -> Option<H> {
        self.handle.take()
    }
}
