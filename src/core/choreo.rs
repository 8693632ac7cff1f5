//! Camera choreographer: timed, cancellable transitions of the camera eye
//! and the orbit target.
//!
//! Each animated property holds at most one active transition. A new request
//! for a property replaces whatever was running there; the replaced
//! transition is abandoned outright, so its remaining cues and completion
//! never fire. Replacement restarts from the live value, never from the old
//! target, so the camera path stays continuous.
//!
//! Side effects are reported as events rather than run from closures: the
//! caller drains the event list after each tick and applies them. That keeps
//! the state machine inspectable and makes "a superseded transition is
//! silent" fall out of ownership instead of flag bookkeeping.

use glam::Vec3;
use smallvec::SmallVec;

/// Independently transitionable camera properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraProperty {
    Eye,
    OrbitTarget,
}

/// Side effect requested at a progress threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueAction {
    RevealDetails,
}

/// Fires once, the first time cumulative progress reaches `at`.
#[derive(Clone, Copy, Debug)]
pub struct Cue {
    pub at: f32,
    pub action: CueAction,
}

#[derive(Clone, Debug)]
pub struct TransitionRequest {
    pub property: CameraProperty,
    pub to: Vec3,
    /// Seconds of eased motion once the delay has elapsed.
    pub duration: f32,
    /// Seconds during which the value is left untouched.
    pub delay: f32,
    pub cues: SmallVec<[Cue; 2]>,
    /// Caller-chosen label carried through into events.
    pub tag: Option<&'static str>,
}

impl TransitionRequest {
    pub fn new(property: CameraProperty, to: Vec3, duration: f32) -> Self {
        Self {
            property,
            to,
            duration,
            delay: 0.0,
            cues: SmallVec::new(),
            tag: None,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_cue(mut self, at: f32, action: CueAction) -> Self {
        self.cues.push(Cue { at, action });
        self
    }

    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChoreoEvent {
    CueFired {
        action: CueAction,
        tag: Option<&'static str>,
    },
    Completed {
        property: CameraProperty,
        tag: Option<&'static str>,
    },
}

#[derive(Clone, Debug)]
struct ActiveTransition {
    to: Vec3,
    duration: f32,
    delay_left: f32,
    elapsed: f32,
    /// Captured when motion actually begins, i.e. after the delay. A delayed
    /// transition therefore departs from wherever the camera is by then.
    from: Option<Vec3>,
    cues: SmallVec<[(Cue, bool); 2]>,
    tag: Option<&'static str>,
}

impl ActiveTransition {
    fn new(req: TransitionRequest) -> Self {
        Self {
            to: req.to,
            duration: req.duration,
            delay_left: req.delay.max(0.0),
            elapsed: 0.0,
            from: None,
            cues: req.cues.into_iter().map(|c| (c, false)).collect(),
            tag: req.tag,
        }
    }

    /// Advance by `dt` seconds, writing `value`. Returns `true` when the
    /// transition has finished (value pinned exactly to the target).
    fn advance(&mut self, mut dt: f32, value: &mut Vec3, events: &mut Vec<ChoreoEvent>) -> bool {
        if self.delay_left > 0.0 {
            if dt < self.delay_left {
                self.delay_left -= dt;
                return false;
            }
            dt -= self.delay_left;
            self.delay_left = 0.0;
        }
        let from = *self.from.get_or_insert(*value);
        self.elapsed += dt;

        let progress = if self.duration > 0.0 {
            (self.elapsed / self.duration).min(1.0)
        } else {
            1.0
        };
        for (cue, fired) in self.cues.iter_mut() {
            if !*fired && progress >= cue.at {
                *fired = true;
                events.push(ChoreoEvent::CueFired {
                    action: cue.action,
                    tag: self.tag,
                });
            }
        }
        if progress >= 1.0 {
            *value = self.to;
            true
        } else {
            *value = from.lerp(self.to, ease_in_out_cubic(progress));
            false
        }
    }
}

/// Accelerate-then-decelerate easing curve.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Owns the active transition per camera property.
#[derive(Debug, Default)]
pub struct Choreographer {
    eye: Option<ActiveTransition>,
    orbit_target: Option<ActiveTransition>,
}

impl Choreographer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition, superseding any active one on the same property.
    pub fn request(&mut self, req: TransitionRequest) {
        let slot = match req.property {
            CameraProperty::Eye => &mut self.eye,
            CameraProperty::OrbitTarget => &mut self.orbit_target,
        };
        // Dropping the old transition is the cancellation: its cues and
        // completion can no longer be emitted.
        *slot = Some(ActiveTransition::new(req));
    }

    /// True while any property has an in-flight transition. The frame driver
    /// diffs this into the global "camera is moving" indicator, which is how
    /// the indicator clears even across supersession.
    pub fn is_moving(&self) -> bool {
        self.eye.is_some() || self.orbit_target.is_some()
    }

    /// Advance both properties by `dt`, writing live values and appending
    /// events in firing order.
    pub fn tick(
        &mut self,
        dt: f32,
        eye: &mut Vec3,
        orbit_target: &mut Vec3,
        events: &mut Vec<ChoreoEvent>,
    ) {
        if let Some(active) = &mut self.eye {
            let tag = active.tag;
            if active.advance(dt, eye, events) {
                self.eye = None;
                events.push(ChoreoEvent::Completed {
                    property: CameraProperty::Eye,
                    tag,
                });
            }
        }
        if let Some(active) = &mut self.orbit_target {
            let tag = active.tag;
            if active.advance(dt, orbit_target, events) {
                self.orbit_target = None;
                events.push(ChoreoEvent::Completed {
                    property: CameraProperty::OrbitTarget,
                    tag,
                });
            }
        }
    }
}
