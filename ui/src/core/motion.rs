//! Declarative transition descriptions.
//!
//! Components never animate imperatively. They attach a [`Transition`] to an
//! element and the engine interprets it. Two renderings are provided:
//!
//! - [`Transition::style`]: CSS custom properties read by the `.motion*`
//!   rules in `assets/styling/navbar.css` (the engine used by every shell);
//! - [`Transition::to_json`]: the same description as JSON, emitted as a
//!   `data-motion` attribute for script-driven engines.
//!
//! Enter animations run `initial → animate` once. Looping transitions run
//! `initial → animate → initial` forever. Hover and tap poses only apply
//! `rotate` and `scale`, which compose with the enter transform.

use std::fmt::Write as _;

use serde::Serialize;

use super::nav::STAGGER_SECS;

/// A (partial) visual state. Unset fields keep the element's resting value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl Pose {
    pub const fn new() -> Self {
        Self {
            opacity: None,
            x: None,
            y: None,
            rotate: None,
            scale: None,
        }
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x(mut self, px: f64) -> Self {
        self.x = Some(px);
        self
    }

    pub fn y(mut self, px: f64) -> Self {
        self.y = Some(px);
        self
    }

    pub fn rotate(mut self, deg: f64) -> Self {
        self.rotate = Some(deg);
        self
    }

    pub fn scale(mut self, factor: f64) -> Self {
        self.scale = Some(factor);
        self
    }

    fn write_vars(&self, out: &mut String, prefix: &str) {
        let _ = write!(
            out,
            "--m-{prefix}-opacity: {}; --m-{prefix}-x: {}px; --m-{prefix}-y: {}px; \
             --m-{prefix}-rotate: {}deg; --m-{prefix}-scale: {}; ",
            self.opacity.unwrap_or(1.0),
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.rotate.unwrap_or(0.0),
            self.scale.unwrap_or(1.0),
        );
    }

    /// Hover and tap only drive `rotate` and `scale`.
    fn write_gesture_vars(&self, out: &mut String, prefix: &str) {
        let _ = write!(
            out,
            "--m-{prefix}-rotate: {}deg; --m-{prefix}-scale: {}; ",
            self.rotate.unwrap_or(0.0),
            self.scale.unwrap_or(1.0),
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Physical spring with unit mass.
    Spring { stiffness: f64 },
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
            // overshoot approximates the spring's first swing
            Easing::Spring { .. } => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Repeat {
    #[default]
    Once,
    Forever,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Timing {
    pub const fn tween(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing,
            repeat: Repeat::Once,
        }
    }

    pub const fn spring(stiffness: f64) -> Self {
        Self {
            duration: 0.0,
            delay: 0.0,
            easing: Easing::Spring { stiffness },
            repeat: Repeat::Once,
        }
    }

    /// Seconds the transition occupies. Springs use one natural period.
    pub fn effective_duration(&self) -> f64 {
        match self.easing {
            Easing::Spring { stiffness } if stiffness > 0.0 => {
                (2.0 * std::f64::consts::PI / stiffness.sqrt()).clamp(0.15, 1.0)
            }
            _ => self.duration,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::tween(0.3, Easing::EaseOut)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub initial: Pose,
    pub animate: Pose,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit: Option<Pose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<Pose>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tap: Option<Pose>,
    pub timing: Timing,
}

impl Transition {
    pub fn enter(initial: Pose, animate: Pose, timing: Timing) -> Self {
        Self {
            initial,
            animate,
            exit: None,
            hover: None,
            tap: None,
            timing,
        }
    }

    pub fn with_exit(mut self, pose: Pose) -> Self {
        self.exit = Some(pose);
        self
    }

    pub fn with_hover(mut self, pose: Pose) -> Self {
        self.hover = Some(pose);
        self
    }

    pub fn with_tap(mut self, pose: Pose) -> Self {
        self.tap = Some(pose);
        self
    }

    pub fn with_delay(mut self, secs: f64) -> Self {
        self.timing.delay = secs;
        self
    }

    /// Class list for the element; add `motion--exit` while leaving.
    pub fn class(&self, exiting: bool) -> String {
        let mut class = String::from("motion");
        if self.timing.repeat == Repeat::Forever {
            class.push_str(" motion--loop");
        }
        if self.hover.is_some() {
            class.push_str(" motion--hover");
        }
        if self.tap.is_some() {
            class.push_str(" motion--tap");
        }
        if exiting && self.exit.is_some() {
            class.push_str(" motion--exit");
        }
        class
    }

    /// Inline custom properties consumed by the stylesheet.
    pub fn style(&self) -> String {
        let mut out = String::new();
        self.initial.write_vars(&mut out, "from");
        self.animate.write_vars(&mut out, "to");
        if let Some(exit) = &self.exit {
            exit.write_vars(&mut out, "exit");
        }
        if let Some(hover) = &self.hover {
            hover.write_gesture_vars(&mut out, "hover");
        }
        if let Some(tap) = &self.tap {
            tap.write_gesture_vars(&mut out, "tap");
        }
        let _ = write!(
            out,
            "--m-duration: {}s; --m-delay: {}s; --m-ease: {};",
            self.timing.effective_duration(),
            self.timing.delay,
            self.timing.easing.css(),
        );
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Top bar sliding down into place.
pub fn navbar_enter() -> Transition {
    Transition::enter(
        Pose::new().y(-40.0).opacity(0.0),
        Pose::new().y(0.0).opacity(1.0),
        Timing::tween(0.7, Easing::EaseOut),
    )
}

/// Desktop bar link entering after `delay_secs`.
pub fn desktop_link(delay_secs: f64) -> Transition {
    Transition::enter(
        Pose::new().opacity(0.0).y(-10.0),
        Pose::new().opacity(1.0).y(0.0),
        Timing::default(),
    )
    .with_delay(delay_secs)
}

pub fn login_button() -> Transition {
    Transition::enter(Pose::new(), Pose::new(), Timing::tween(0.2, Easing::EaseOut))
        .with_hover(Pose::new().scale(1.07))
        .with_tap(Pose::new().scale(0.94))
}

/// Gradient tile of the desktop logo.
pub fn logo_mark() -> Transition {
    Transition::enter(Pose::new().rotate(0.0), Pose::new().rotate(0.0), Timing::spring(280.0))
        .with_hover(Pose::new().rotate(8.0).scale(1.12))
}

pub fn brand_word() -> Transition {
    Transition::enter(
        Pose::new().opacity(0.0),
        Pose::new().opacity(1.0),
        Timing::default(),
    )
    .with_delay(0.2)
}

pub fn menu_panel() -> Transition {
    Transition::enter(
        Pose::new().opacity(0.0).y(-15.0),
        Pose::new().opacity(1.0).y(0.0),
        Timing::tween(0.25, Easing::EaseOut),
    )
    .with_exit(Pose::new().opacity(0.0).y(-15.0))
}

/// Dropdown row `index`; links rise from 12px, the login row from 10px.
pub fn menu_item(index: usize, is_login: bool) -> Transition {
    let rise = if is_login { 10.0 } else { 12.0 };
    Transition::enter(
        Pose::new().opacity(0.0).y(rise),
        Pose::new().opacity(1.0).y(0.0),
        Timing::default(),
    )
    .with_delay(STAGGER_SECS * index as f64)
}

/// Soft glow under the bar, breathing forever.
pub fn glow_pulse() -> Transition {
    Transition::enter(
        Pose::new().opacity(0.4).scale(0.95),
        Pose::new().opacity(1.0).scale(1.05),
        Timing {
            repeat: Repeat::Forever,
            ..Timing::tween(3.0, Easing::EaseInOut)
        },
    )
}

/// Mobile tab bar rising from the bottom edge.
pub fn tab_bar_enter() -> Transition {
    Transition::enter(
        Pose::new().y(40.0).opacity(0.0),
        Pose::new().y(0.0).opacity(1.0),
        Timing::tween(0.5, Easing::EaseOut),
    )
}

pub fn tab_press() -> Transition {
    Transition::enter(Pose::new(), Pose::new(), Timing::tween(0.15, Easing::EaseOut))
        .with_tap(Pose::new().scale(0.9))
}
