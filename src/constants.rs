/// Page-effect tuning constants.
///
/// These keep magic numbers out of the effect code. Durations are in
/// milliseconds unless the name says otherwise; distances are CSS pixels.

// Input throttling
pub const POINTER_THROTTLE_MS: u64 = 16; // ~60fps cursor sampling
pub const TRAIL_THROTTLE_MS: u64 = 50;
pub const POINTER_IDLE_MS: u64 = 150; // cursor counts as "moving" until this much quiet

// Cursor parallax (.hero-content, .floating-orbs)
pub const CURSOR_PARALLAX_X_PX: f64 = 30.0;
pub const CURSOR_PARALLAX_Y_PX: f64 = 20.0;
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

// Navbar
pub const NAVBAR_SOLID_AFTER_PX: f64 = 100.0;
pub const NAVBAR_HIDE_AFTER_PX: f64 = 200.0;
pub const NAVBAR_SCROLL_NOISE_PX: f64 = 5.0;

// Smooth scroll
pub const SMOOTH_SCROLL_MS: f64 = 1000.0;

// Tilt
pub const TILT_MAX_DEG: f64 = 8.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

// Reveal-on-scroll
pub const REVEAL_RATIO_THRESHOLD: f64 = 0.1;
pub const REVEAL_STAGGER_SEC: f64 = 0.1;
pub const REVEAL_STAGGER_MAX_SEC: f64 = 0.8;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLDS: [f64; 3] = [0.0, 0.1, 0.2];

// Mouse trail
pub const TRAIL_MAX_NODES: usize = 5;
pub const TRAIL_LIFETIME_MS: u32 = 800;

// Success burst
pub const BURST_PARTICLES: usize = 8;
pub const BURST_LIFETIME_MS: u32 = 800;
pub const BURST_VELOCITY_MIN: f64 = 80.0;
pub const BURST_VELOCITY_SPAN: f64 = 40.0;

// Ambient hero particles
pub const HERO_PARTICLES_MAX: usize = 30;
pub const HERO_PARTICLE_SPACING_PX: f64 = 40.0;

// Easter egg
pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65]; // ↑↑↓↓←→←→BA
pub const EASTER_EGG_MS: u32 = 8000;
pub const EASTER_EGG_PARTICLES_MAX: usize = 50;
pub const EASTER_EGG_PARTICLE_SPACING_PX: f64 = 30.0;
pub const EASTER_EGG_SPAWN_INTERVAL_MS: u32 = 100;
pub const EASTER_EGG_PARTICLE_LIFETIME_MS: u32 = 4000;
pub const EASTER_EGG_FILTER: &str = "hue-rotate(180deg) saturate(150%)";
pub const EASTER_EGG_COLORS: [&str; 6] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffd93d", "#ff9ff3",
];

// Clipboard
pub const COPY_FEEDBACK_MS: u32 = 1500;
pub const COPY_PRESS_MS: u32 = 100;
pub const COPY_SUCCESS_LABEL: &str = "Copié !";
pub const COPY_ERROR_LABEL: &str = "Erreur";
pub const COPY_IDLE_LABEL: &str = "Copier";

// Morphing cards
pub const MORPH_INTERVAL_MS: u32 = 3000;
pub const MORPH_BASE_RADIUS_PX: f64 = 15.0;
pub const MORPH_RADIUS_VARIATION_PX: f64 = 10.0;

// Floating orbs
pub const ORB_WANDER_MIN_SEC: f64 = 8.0;
pub const ORB_WANDER_SPAN_SEC: f64 = 4.0;
pub const ORB_START_STAGGER_MS: u32 = 2000;

// Timeline markers
pub const MARKER_PULSE_BASE_MS: u32 = 5000;
pub const MARKER_PULSE_STEP_MS: u32 = 1000;

// Device profile
pub const LOW_MEMORY_GB: f64 = 4.0;

// Progressive init
pub const INIT_STEP_MS: u32 = 200;
pub const SECTION_STAGGER_MS: u32 = 100;
pub const SECTION_STAGGER_MAX_MS: u32 = 500;
pub const FULLY_LOADED_DELAY_MS: u32 = 1000;

// Broken image placeholder
pub const PLACEHOLDER_TEXT_MAX_CHARS: usize = 15;
