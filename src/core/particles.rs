use crate::constants::*;
use rand::Rng;
use smallvec::SmallVec;
use std::f64::consts::TAU;

const ACCENT: &str = "var(--accent-color, #8b0000)";
const SUCCESS: &str = "var(--success-color, #28a745)";

/// Decorative node families. Each maps onto a keyframe animation in the
/// site stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Trail,
    SuccessBurst,
    EasterEgg,
    Ambient,
}

impl ParticleKind {
    pub fn animation(self) -> &'static str {
        match self {
            ParticleKind::Trail => "trailFade",
            ParticleKind::SuccessBurst => "successParticle",
            ParticleKind::EasterEgg => "specialParticleRise",
            ParticleKind::Ambient => "particleFloat",
        }
    }

    /// Time until the node removes itself; ambient particles live with the page.
    pub fn lifetime_ms(self) -> Option<u32> {
        match self {
            ParticleKind::Trail => Some(TRAIL_LIFETIME_MS),
            ParticleKind::SuccessBurst => Some(BURST_LIFETIME_MS),
            ParticleKind::EasterEgg => Some(EASTER_EGG_PARTICLE_LIFETIME_MS),
            ParticleKind::Ambient => None,
        }
    }

    pub fn class_name(self) -> Option<&'static str> {
        match self {
            ParticleKind::Ambient => Some("interactive-particle"),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Fixed to the viewport, in client pixels.
    Fixed { left: f64, top: f64 },
    /// Absolute inside a container, in percent.
    Percent { left: f64, top: f64 },
}

/// Randomised visual parameters of one decorative node.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub kind: ParticleKind,
    pub placement: Placement,
    pub size: f64,
    pub color: &'static str,
    pub opacity: f64,
    /// Travel distance exposed to the keyframes as `--dx` / `--dy`.
    pub drift: Option<(f64, f64)>,
    pub duration_sec: f64,
    pub delay_sec: f64,
}

impl ParticleSpec {
    pub fn css_text(&self) -> String {
        let (position, left, top, unit, z) = match self.placement {
            Placement::Fixed { left, top } => ("fixed", left, top, "px", "z-index: 10000;"),
            Placement::Percent { left, top } => ("absolute", left, top, "%", ""),
        };
        let z = match self.kind {
            ParticleKind::Trail => "z-index: 9999;",
            _ => z,
        };
        let iteration = match self.kind {
            ParticleKind::Ambient => "linear infinite",
            ParticleKind::EasterEgg => "linear forwards",
            _ => "ease-out forwards",
        };
        let centering = match self.kind {
            ParticleKind::Trail => "transform: translate(-50%, -50%);",
            _ => "",
        };
        let glow = match self.kind {
            ParticleKind::EasterEgg => format!("box-shadow: 0 0 10px {};", self.color),
            _ => String::new(),
        };
        let drift = self
            .drift
            .map(|(dx, dy)| format!("--dx: {}px; --dy: {}px;", dx, dy))
            .unwrap_or_default();
        format!(
            "position: {position}; left: {left}{unit}; top: {top}{unit}; \
             width: {size}px; height: {size}px; background: {color}; border-radius: 50%; \
             pointer-events: none; {z} opacity: {opacity}; {centering} {glow} {drift} \
             animation: {anim} {dur}s {iteration}; animation-delay: {delay}s; \
             will-change: transform, opacity;",
            size = self.size,
            color = self.color,
            opacity = self.opacity,
            anim = self.kind.animation(),
            dur = self.duration_sec,
            delay = self.delay_sec,
        )
    }
}

pub fn trail(client_x: f64, client_y: f64) -> ParticleSpec {
    ParticleSpec {
        kind: ParticleKind::Trail,
        placement: Placement::Fixed {
            left: client_x,
            top: client_y,
        },
        size: 3.0,
        color: ACCENT,
        opacity: 0.5,
        drift: None,
        duration_sec: TRAIL_LIFETIME_MS as f64 / 1000.0,
        delay_sec: 0.0,
    }
}

/// Radial burst around a center point, evenly spaced angles.
pub fn success_burst<R: Rng>(
    rng: &mut R,
    center_x: f64,
    center_y: f64,
) -> SmallVec<[ParticleSpec; BURST_PARTICLES]> {
    (0..BURST_PARTICLES)
        .map(|i| {
            let angle = i as f64 / BURST_PARTICLES as f64 * TAU;
            let velocity = BURST_VELOCITY_MIN + rng.gen::<f64>() * BURST_VELOCITY_SPAN;
            ParticleSpec {
                kind: ParticleKind::SuccessBurst,
                placement: Placement::Fixed {
                    left: center_x,
                    top: center_y,
                },
                size: 2.0 + rng.gen::<f64>() * 2.0,
                color: SUCCESS,
                opacity: 1.0,
                drift: Some((angle.cos() * velocity, angle.sin() * velocity)),
                duration_sec: BURST_LIFETIME_MS as f64 / 1000.0,
                delay_sec: 0.0,
            }
        })
        .collect()
}

/// Rising particle entering from below the viewport.
pub fn easter_egg<R: Rng>(rng: &mut R, viewport_w: f64, viewport_h: f64) -> ParticleSpec {
    let color = EASTER_EGG_COLORS[rng.gen_range(0..EASTER_EGG_COLORS.len())];
    ParticleSpec {
        kind: ParticleKind::EasterEgg,
        placement: Placement::Fixed {
            left: rng.gen::<f64>() * viewport_w.max(0.0),
            top: viewport_h + 10.0,
        },
        size: 6.0,
        color,
        opacity: 1.0,
        drift: Some((rng.gen::<f64>() * 200.0 - 100.0, -(viewport_h + 100.0))),
        duration_sec: EASTER_EGG_PARTICLE_LIFETIME_MS as f64 / 1000.0,
        delay_sec: 0.0,
    }
}

/// Long-lived floating particle for the hero backdrop.
pub fn ambient<R: Rng>(rng: &mut R) -> ParticleSpec {
    ParticleSpec {
        kind: ParticleKind::Ambient,
        placement: Placement::Percent {
            left: rng.gen::<f64>() * 100.0,
            top: rng.gen::<f64>() * 100.0,
        },
        size: 2.0,
        color: ACCENT,
        opacity: rng.gen::<f64>() * 0.4 + 0.1,
        drift: None,
        duration_sec: 8.0 + rng.gen::<f64>() * 12.0,
        delay_sec: rng.gen::<f64>() * -15.0,
    }
}

#[inline]
pub fn hero_particle_count(viewport_w: f64) -> usize {
    ((viewport_w.max(0.0) / HERO_PARTICLE_SPACING_PX).floor() as usize).min(HERO_PARTICLES_MAX)
}

#[inline]
pub fn easter_egg_particle_count(viewport_w: f64) -> usize {
    ((viewport_w.max(0.0) / EASTER_EGG_PARTICLE_SPACING_PX).floor() as usize)
        .min(EASTER_EGG_PARTICLES_MAX)
}

/// Four-corner border radius for hovered cards.
pub fn organic_radius<R: Rng>(rng: &mut R) -> String {
    let corners: [f64; 4] = std::array::from_fn(|_| {
        MORPH_BASE_RADIUS_PX + rng.gen::<f64>() * MORPH_RADIUS_VARIATION_PX
    });
    format!(
        "{}px {}px {}px {}px",
        corners[0], corners[1], corners[2], corners[3]
    )
}

/// Next wander target of a floating orb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbStep {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_sec: f64,
    pub opacity: f64,
}

pub fn orb_step<R: Rng>(rng: &mut R) -> OrbStep {
    OrbStep {
        left_pct: rng.gen::<f64>() * 100.0,
        top_pct: rng.gen::<f64>() * 100.0,
        duration_sec: ORB_WANDER_MIN_SEC + rng.gen::<f64>() * ORB_WANDER_SPAN_SEC,
        opacity: 0.2 + rng.gen::<f64>() * 0.3,
    }
}
