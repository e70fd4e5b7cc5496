//! Gesture-driven scene-mode state machine.
//!
//! The controller reacts to gesture *edges*: a gesture only acts when it
//! differs from the previously observed one, so holding a pose does nothing
//! after the first frame. The table lives in [`transition`] so the edge rule
//! and the mode mapping can be checked independently.

use rand::prelude::*;

use crate::gesture::{Gesture, HandReading};
use crate::particle::ParticleId;
use crate::state::{SceneMode, SceneState};

/// What a transition does to the focus selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusAction {
    /// Draw one photo uniformly at random; refuse the transition if none exist.
    PickPhoto,
    Clear,
}

/// One row of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub mode: SceneMode,
    pub focus: FocusAction,
}

/// Transition table over `(previous gesture, new gesture)`.
///
/// Returns `None` when nothing should happen: the gesture is unchanged, or it
/// is [`Gesture::None`].
pub fn transition(previous: Option<Gesture>, next: Gesture) -> Option<Transition> {
    if previous == Some(next) {
        return None;
    }
    match next {
        Gesture::Pinch => Some(Transition {
            mode: SceneMode::Focus,
            focus: FocusAction::PickPhoto,
        }),
        Gesture::Fist => Some(Transition {
            mode: SceneMode::Tree,
            focus: FocusAction::Clear,
        }),
        Gesture::Open => Some(Transition {
            mode: SceneMode::Scatter,
            focus: FocusAction::Clear,
        }),
        Gesture::None => None,
    }
}

/// A committed change, reported back to the caller for logging and UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeChange {
    pub gesture: Gesture,
    pub from: SceneMode,
    pub to: SceneMode,
    pub focus: Option<ParticleId>,
}

/// Sole writer of [`SceneState`].
pub struct ModeController {
    state: SceneState,
    previous: Option<Gesture>,
    rng: StdRng,
}

impl ModeController {
    /// Start in [`SceneMode::Tree`] with no focus and no hand.
    pub fn new(seed: u64) -> Self {
        Self {
            state: SceneState::default(),
            previous: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Last gesture that counted as an edge, if any.
    #[inline]
    pub fn previous_gesture(&self) -> Option<Gesture> {
        self.previous
    }

    /// Feed one inference result.
    ///
    /// `photos` lists every live photo particle; it is only consulted on a
    /// pinch edge. A missing hand updates presence and nothing else, so the
    /// scene stays in its last commanded mode.
    pub fn observe(&mut self, reading: HandReading, photos: &[ParticleId]) -> Option<ModeChange> {
        self.state.set_hand_detected(reading.is_detected());
        match reading {
            HandReading::NoHand => None,
            HandReading::Hand(gesture) => self.apply(gesture, photos),
        }
    }

    /// Apply a gesture directly, e.g. from a keyboard or on-screen trigger.
    pub fn apply(&mut self, gesture: Gesture, photos: &[ParticleId]) -> Option<ModeChange> {
        let row = transition(self.previous, gesture)?;
        log::debug!(
            "[mode] gesture edge {:?} -> {}",
            self.previous.map(|g| g.as_str()),
            gesture.as_str()
        );
        self.previous = Some(gesture);

        let focus = match row.focus {
            FocusAction::Clear => None,
            FocusAction::PickPhoto => match photos.choose(&mut self.rng) {
                Some(id) => Some(*id),
                None => {
                    log::debug!("[mode] pinch ignored: no photos loaded");
                    return None;
                }
            },
        };

        let from = self.state.mode();
        self.state.enter(row.mode, focus);
        log::info!(
            "[mode] {} -> {} focus={:?}",
            from.as_str(),
            row.mode.as_str(),
            focus
        );
        Some(ModeChange {
            gesture,
            from,
            to: row.mode,
            focus,
        })
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(0)
    }
}
