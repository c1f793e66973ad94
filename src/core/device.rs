use crate::constants::{LOW_MEMORY_GB, PLACEHOLDER_TEXT_MAX_CHARS};

/// What the browser reports about the device and its connection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceProfile {
    /// `navigator.deviceMemory`, in GB.
    pub memory_gb: Option<f64>,
    /// `navigator.connection.effectiveType`
    pub connection: Option<String>,
}

impl DeviceProfile {
    pub fn is_low_memory(&self) -> bool {
        matches!(self.memory_gb, Some(gb) if gb < LOW_MEMORY_GB)
    }

    pub fn is_low_bandwidth(&self) -> bool {
        matches!(self.connection.as_deref(), Some("slow-2g") | Some("2g"))
    }
}

/// Keyword heuristic for script errors that should drop the page into
/// reduced-motion fallback mode.
pub fn is_animation_error(message: &str) -> bool {
    message.contains("animation") || message.contains("transform")
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// SVG shown in place of an image that failed to load.
pub fn placeholder_svg(alt: &str) -> String {
    let label: String = alt.chars().take(PLACEHOLDER_TEXT_MAX_CHARS).collect();
    format!(
        r##"<svg width="120" height="120" viewBox="0 0 120 120" fill="none" xmlns="http://www.w3.org/2000/svg"><rect width="120" height="120" fill="#1a1a1a"/><circle cx="60" cy="60" r="25" fill="#8b0000" opacity="0.5"/><text x="60" y="65" fill="#ffffff" text-anchor="middle" font-family="Arial, sans-serif" font-size="8">{}</text></svg>"##,
        escape_xml(&label)
    )
}
