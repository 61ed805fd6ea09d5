//! Entry transition presets
//!
//! Presets describe where an element starts (offset and opacity) and how it
//! travels to its resting place. They are rendered as inline CSS custom
//! properties consumed by the shared `enter-from` keyframes in the page
//! stylesheet, so every preset plays exactly once when the element mounts.

use serde::{Deserialize, Serialize};

/// Fraction of the initial displacement still allowed when a spring is "settled"
const SETTLE_BAND: f64 = 0.02;
const MIN_DURATION_SECS: f64 = 0.2;
const MAX_DURATION_SECS: f64 = 2.0;

const EASE_OVERSHOOT: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";
const EASE_OUT: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// Damped spring parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 12.0,
            mass: 1.0,
        }
    }
}

impl Spring {
    pub fn with_stiffness(self, stiffness: f64) -> Self {
        Self { stiffness, ..self }
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0
    }

    /// Time for the motion envelope to decay into the settle band, clamped to a
    /// range CSS animations handle well.
    pub fn settle_time_secs(&self) -> f64 {
        if self.stiffness <= 0.0 || self.mass <= 0.0 || self.damping <= 0.0 {
            return MAX_DURATION_SECS;
        }

        let natural_frequency = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();
        let decay = -SETTLE_BAND.ln();

        let secs = if zeta < 1.0 {
            decay / (zeta * natural_frequency)
        } else if (zeta - 1.0).abs() < f64::EPSILON {
            // Critically damped: (1 + wt)e^(-wt) reaches 2% at wt ~= 5.83
            5.83 / natural_frequency
        } else {
            let slow_pole = natural_frequency * (zeta - (zeta * zeta - 1.0).sqrt());
            decay / slow_pole
        };

        secs.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS)
    }

    pub fn easing(&self) -> &'static str {
        if self.is_underdamped() {
            EASE_OVERSHOOT
        } else {
            EASE_OUT
        }
    }
}

/// Starting pose relative to the element's resting place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

impl Default for Offset {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    pub from: Offset,
    pub spring: Spring,
    /// Delay before this element starts, in seconds
    pub delay: f64,
    /// Delay before the first child starts, in seconds
    pub delay_children: f64,
    /// Extra delay added per child index, in seconds
    pub stagger_children: f64,
}

impl Transition {
    pub fn duration_secs(&self) -> f64 {
        self.spring.settle_time_secs()
    }

    /// Start delay for the child at `index` of an element using this transition
    pub fn child_delay(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }

    /// Inline style for an element using this transition
    pub fn style(&self) -> String {
        self.style_with_delay(self.delay)
    }

    /// Inline style for the `index`th staggered child of `parent`
    pub fn child_style(&self, parent: &Transition, index: usize) -> String {
        self.style_with_delay(self.delay + parent.child_delay(index))
    }

    fn style_with_delay(&self, delay: f64) -> String {
        format!(
            "--from-x: {}px; --from-y: {}px; --from-opacity: {}; animation: enter-from {:.3}s {} {:.3}s both;",
            self.from.x,
            self.from.y,
            self.from.opacity,
            self.duration_secs(),
            self.spring.easing(),
            delay,
        )
    }
}

/// Named presets used by the sign-up page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationPresets {
    /// Branding pane sliding in from the left
    pub pane_slide_in: Transition,
    /// Logo rising and fading in
    pub logo_rise: Transition,
    /// Form pane fading in and orchestrating its inputs
    pub form_fade_in: Transition,
    /// Each input dropping into place
    pub child_drop_in: Transition,
}

impl Default for AnimationPresets {
    fn default() -> Self {
        let spring = Spring::default();
        Self {
            pane_slide_in: Transition {
                from: Offset {
                    x: -500.0,
                    ..Offset::default()
                },
                spring: spring.with_stiffness(50.0),
                ..Transition::default()
            },
            logo_rise: Transition {
                from: Offset {
                    y: 200.0,
                    opacity: 0.0,
                    ..Offset::default()
                },
                spring: spring.with_stiffness(25.0),
                ..Transition::default()
            },
            form_fade_in: Transition {
                from: Offset {
                    opacity: 0.0,
                    ..Offset::default()
                },
                spring,
                delay: 0.35,
                delay_children: 0.5,
                stagger_children: 0.075,
            },
            child_drop_in: Transition {
                from: Offset {
                    y: -50.0,
                    opacity: 0.0,
                    ..Offset::default()
                },
                spring,
                ..Transition::default()
            },
        }
    }
}

impl AnimationPresets {
    pub fn all(&self) -> [(&'static str, &Transition); 4] {
        [
            ("pane_slide_in", &self.pane_slide_in),
            ("logo_rise", &self.logo_rise),
            ("form_fade_in", &self.form_fade_in),
            ("child_drop_in", &self.child_drop_in),
        ]
    }
}
