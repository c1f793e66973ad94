// Input-source abstraction.
//
// The page controller registers handlers per event kind on an
// `InputSource`. In the browser the source is backed by window listeners;
// tests drive a `ScriptedInput` instead.

/// Platform-neutral input event.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { client_x: f64, client_y: f64 },
    Scroll { offset: f64 },
    KeyDown { key_code: u32 },
    Resize { width: f64, height: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    PointerMove,
    Scroll,
    KeyDown,
    Resize,
}

impl InputEvent {
    pub fn kind(&self) -> InputKind {
        match self {
            InputEvent::PointerMove { .. } => InputKind::PointerMove,
            InputEvent::Scroll { .. } => InputKind::Scroll,
            InputEvent::KeyDown { .. } => InputKind::KeyDown,
            InputEvent::Resize { .. } => InputKind::Resize,
        }
    }
}

pub type InputHandler = Box<dyn FnMut(&InputEvent)>;

pub trait InputSource {
    /// Register `handler` for `kind`. Handlers of one kind run in
    /// registration order.
    fn subscribe(&mut self, kind: InputKind, handler: InputHandler);
}

/// In-memory source: events are pushed by hand with [`ScriptedInput::emit`].
#[derive(Default)]
pub struct ScriptedInput {
    handlers: Vec<(InputKind, InputHandler)>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch to matching handlers; returns how many ran.
    pub fn emit(&mut self, event: &InputEvent) -> usize {
        let kind = event.kind();
        let mut ran = 0;
        for (k, handler) in self.handlers.iter_mut() {
            if *k == kind {
                handler(event);
                ran += 1;
            }
        }
        ran
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl InputSource for ScriptedInput {
    fn subscribe(&mut self, kind: InputKind, handler: InputHandler) {
        self.handlers.push((kind, handler));
    }
}
