//! Declarative enter animations.
//!
//! A [`Motion`] says where an element starts, where it ends up, how long the
//! move takes and what starts it. It does not animate anything itself: it
//! renders to a class list plus a handful of CSS custom properties that the
//! `motion-enter` keyframes in [`crate::styles::SITE_CSS`] read.
//!
//! ```rust
//! use portfolio::motion::Motion;
//!
//! let third_card = Motion::staggered(2);
//! assert_eq!(third_card.transition.delay_ms, 200);
//! assert!(third_card.style().contains("--motion-delay:200ms"));
//! ```

/// Delay added per list position.
pub const STAGGER_STEP_MS: u32 = 100;

/// Marks elements that wait until they scroll into view.
pub const IN_VIEW_CLASS: &str = "motion-in-view";

/// Added to an in-view element once it has been seen.
pub const VISIBLE_CLASS: &str = "visible";

/// Opacity and vertical offset of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Vertical offset in pixels, positive is down
    pub y_px: i32,
}

impl Pose {
    /// Fully visible, in place.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        y_px: 0,
    };

    pub const fn hidden(y_px: i32) -> Self {
        Pose {
            opacity: 0.0,
            y_px,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

/// What starts the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Plays once as soon as the element is mounted
    Mount,
    /// Plays once the first time the element enters the viewport
    InView,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub animate: Pose,
    pub transition: Transition,
    pub trigger: Trigger,
}

impl Motion {
    /// Opacity-only fade on mount.
    pub const fn fade_in() -> Self {
        Motion {
            initial: Pose::hidden(0),
            animate: Pose::REST,
            transition: Transition {
                duration_ms: 300,
                delay_ms: 0,
            },
            trigger: Trigger::Mount,
        }
    }

    /// Fade in while rising 20px into place.
    pub const fn rise(duration_ms: u32) -> Self {
        Motion {
            initial: Pose::hidden(20),
            animate: Pose::REST,
            transition: Transition {
                duration_ms,
                delay_ms: 0,
            },
            trigger: Trigger::Mount,
        }
    }

    /// Fade in while dropping 20px into place (the mobile menu panel).
    pub const fn drop_in() -> Self {
        Motion {
            initial: Pose::hidden(-20),
            ..Motion::fade_in()
        }
    }

    /// List item entrance: a 0.5s rise delayed by its position.
    pub fn staggered(index: usize) -> Self {
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        Motion::rise(500).with_delay(step.saturating_mul(STAGGER_STEP_MS))
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.transition.delay_ms = delay_ms;
        self
    }

    /// Wait for the element to scroll into view instead of playing on mount.
    pub const fn in_view(mut self) -> Self {
        self.trigger = Trigger::InView;
        self
    }

    /// Class list for the animated element.
    pub fn class(&self) -> &'static str {
        match self.trigger {
            Trigger::Mount => "motion motion-mount",
            Trigger::InView => "motion motion-in-view",
        }
    }

    /// Inline custom properties read by the keyframes.
    pub fn style(&self) -> String {
        format!(
            "--motion-from-opacity:{};--motion-from-y:{}px;--motion-to-opacity:{};--motion-to-y:{}px;--motion-duration:{}ms;--motion-delay:{}ms",
            self.initial.opacity,
            self.initial.y_px,
            self.animate.opacity,
            self.animate.y_px,
            self.transition.duration_ms,
            self.transition.delay_ms,
        )
    }

    /// Class list joined with extra classes of the host element.
    pub fn class_with(&self, extra: &str) -> String {
        if extra.is_empty() {
            self.class().to_string()
        } else {
            format!("{} {}", self.class(), extra)
        }
    }
}
