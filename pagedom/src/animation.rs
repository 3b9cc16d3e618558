use std::collections::{HashMap, HashSet};
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::time::{Duration, Instant};

use log::trace;
use tokio::sync::oneshot;

use crate::transitions::{SlideDirection, TransitionConfig};

/// How a slide ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOutcome {
    /// The slide ran to its end state.
    Finished,
    /// Another slide, an instant show/hide, or removal of the element cut it short.
    Interrupted,
}

/// Completion signal for a slide.
///
/// Callers may ignore it; slides progress whether or not anyone waits.
/// Await it, or poll it with [`SlideHandle::try_outcome`].
#[derive(Debug)]
pub struct SlideHandle {
    rx: Option<oneshot::Receiver<SlideOutcome>>,
    outcome: Option<SlideOutcome>,
}

impl SlideHandle {
    fn pending(rx: oneshot::Receiver<SlideOutcome>) -> Self {
        Self {
            rx: Some(rx),
            outcome: None,
        }
    }

    /// A handle that has already resolved.
    pub fn resolved(outcome: SlideOutcome) -> Self {
        Self {
            rx: None,
            outcome: Some(outcome),
        }
    }

    /// The outcome, if the slide has ended.
    pub fn try_outcome(&mut self) -> Option<SlideOutcome> {
        if self.outcome.is_none() {
            if let Some(rx) = &mut self.rx {
                self.outcome = match rx.try_recv() {
                    Ok(outcome) => Some(outcome),
                    Err(oneshot::error::TryRecvError::Empty) => None,
                    Err(oneshot::error::TryRecvError::Closed) => Some(SlideOutcome::Interrupted),
                };
            }
        }
        self.outcome
    }
}

impl IntoFuture for SlideHandle {
    type Output = SlideOutcome;
    type IntoFuture = Pin<Box<dyn Future<Output = SlideOutcome> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            if let Some(outcome) = self.outcome {
                return outcome;
            }
            match self.rx {
                // A dropped sender means the animation state went away mid-slide.
                Some(rx) => rx.await.unwrap_or(SlideOutcome::Interrupted),
                None => SlideOutcome::Interrupted,
            }
        })
    }
}

/// A single active slide.
#[derive(Debug)]
struct ActiveSlide {
    direction: SlideDirection,
    /// Visible fraction when the slide started.
    from: f32,
    start: Instant,
    config: TransitionConfig,
    done: oneshot::Sender<SlideOutcome>,
}

impl ActiveSlide {
    fn target(&self) -> f32 {
        match self.direction {
            SlideDirection::Down => 1.0,
            SlideDirection::Up => 0.0,
        }
    }

    fn fraction(&self, now: Instant) -> f32 {
        let progress = linear_progress(self.start, self.config.duration, now);
        let eased = self.config.easing.apply(progress);
        self.from + (self.target() - self.from) * eased
    }

    fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.config.duration
    }

    fn resolve(self, outcome: SlideOutcome) {
        // The receiver may have been dropped; nobody is waiting then.
        let _ = self.done.send(outcome);
    }
}

/// Manages slide animations across ticks.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Currently active slides, one per element.
    active: HashMap<String, ActiveSlide>,
    /// Reduced motion flag - when true, slides complete instantly.
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, every slide completes as soon as it starts.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns true if any slide is currently active.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn is_animating(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    /// Direction of the slide running on `id`, if any.
    pub fn direction(&self, id: &str) -> Option<SlideDirection> {
        self.active.get(id).map(|slide| slide.direction)
    }

    /// Start a slide on `id`.
    ///
    /// `visible` is the element's visible fraction when nothing is animating it.
    /// A slide already running on the element is interrupted and the new one
    /// continues from its current fraction. If there is nothing to animate the
    /// returned handle is already finished.
    pub fn start(
        &mut self,
        id: &str,
        direction: SlideDirection,
        visible: f32,
        config: TransitionConfig,
        now: Instant,
    ) -> SlideHandle {
        let from = match self.active.remove(id) {
            Some(existing) => {
                let fraction = existing.fraction(now);
                trace!("Interrupting {:?} slide on {id} at {fraction:.2}", existing.direction);
                existing.resolve(SlideOutcome::Interrupted);
                fraction
            }
            None => visible,
        };

        let target = match direction {
            SlideDirection::Down => 1.0,
            SlideDirection::Up => 0.0,
        };

        if self.reduced_motion || config.duration.is_zero() || (from - target).abs() < f32::EPSILON {
            trace!("{direction:?} slide on {id} completes immediately");
            return SlideHandle::resolved(SlideOutcome::Finished);
        }

        let (tx, rx) = oneshot::channel();
        self.active.insert(
            id.to_string(),
            ActiveSlide {
                direction,
                from,
                start: now,
                config,
                done: tx,
            },
        );
        SlideHandle::pending(rx)
    }

    /// Interrupt the slide running on `id`.
    /// Returns its direction if there was one.
    pub fn cancel(&mut self, id: &str) -> Option<SlideDirection> {
        let slide = self.active.remove(id)?;
        let direction = slide.direction;
        slide.resolve(SlideOutcome::Interrupted);
        Some(direction)
    }

    /// Finish every slide whose duration has elapsed.
    /// Returns the finished slides so the host can apply their end state.
    pub fn tick(&mut self, now: Instant) -> Vec<(String, SlideDirection)> {
        let finished: Vec<String> = self
            .active
            .iter()
            .filter(|(_, slide)| slide.is_complete(now))
            .map(|(id, _)| id.clone())
            .collect();

        let mut done = Vec::with_capacity(finished.len());
        for id in finished {
            if let Some(slide) = self.active.remove(&id) {
                trace!("{:?} slide on {id} finished", slide.direction);
                let direction = slide.direction;
                slide.resolve(SlideOutcome::Finished);
                done.push((id, direction));
            }
        }
        done.sort_by(|a, b| a.0.cmp(&b.0));
        done
    }

    /// Eased visible fraction (0.0 to 1.0) of an animating element.
    /// Returns None if no slide is running on it.
    pub fn progress(&self, id: &str, now: Instant) -> Option<f32> {
        self.active.get(id).map(|slide| slide.fraction(now))
    }

    /// Interpolated height of an animating element whose full height is `full`.
    pub fn visible_rows(&self, id: &str, full: u16, now: Instant) -> Option<u16> {
        self.progress(id, now).map(|fraction| lerp_u16(0, full, fraction))
    }

    /// Interrupt slides for elements no longer in the tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        let stale: Vec<String> = self
            .active
            .keys()
            .filter(|id| !current_ids.contains(*id))
            .cloned()
            .collect();
        for id in stale {
            self.cancel(&id);
        }
    }
}

fn linear_progress(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// Linear interpolation for u16 values.
fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}
