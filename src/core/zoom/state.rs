use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::zoom::settings::ZoomSettings;
use crate::core::zoom::step::step_toward;
use crate::core::zoom::target::{ZoomDirection, ZoomTarget};

/// Result of one controller tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoomTick {
    /// Nothing to do.
    Idle,
    /// The viewport to render next.
    Stepped(Viewport),
    /// The step would have produced an invalid viewport; the animation ended.
    Aborted(ViewportError),
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum ZoomState {
    #[default]
    Idle,
    Animating(ZoomTarget),
}

impl ZoomState {
    /// Starts (or restarts) an animation toward `target`. Any previous
    /// target is replaced.
    pub fn select(&mut self, target: Complex, direction: ZoomDirection, steps: u32) {
        *self = if steps == 0 {
            Self::Idle
        } else {
            Self::Animating(ZoomTarget {
                target,
                direction,
                remaining_steps: steps,
            })
        };
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating(_))
    }

    #[must_use]
    pub fn remaining_steps(&self) -> u32 {
        match self {
            Self::Idle => 0,
            Self::Animating(target) => target.remaining_steps,
        }
    }

    pub fn tick(&mut self, viewport: &Viewport, settings: &ZoomSettings) -> ZoomTick {
        let Self::Animating(zoom) = self else {
            return ZoomTick::Idle;
        };

        zoom.remaining_steps -= 1;
        let step = step_toward(viewport, zoom.target, zoom.direction, settings);
        let finished = zoom.remaining_steps == 0;

        match step {
            Ok(next) => {
                if finished {
                    *self = Self::Idle;
                }
                ZoomTick::Stepped(next)
            }
            Err(err) => {
                *self = Self::Idle;
                ZoomTick::Aborted(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: Complex = Complex::new(-0.1635, -1.0261);

    fn run_to_idle(state: &mut ZoomState, mut viewport: Viewport) -> (Viewport, u32) {
        let settings = ZoomSettings::default();
        let mut ticks = 0;
        loop {
            match state.tick(&viewport, &settings) {
                ZoomTick::Stepped(next) => {
                    viewport = next;
                    ticks += 1;
                }
                ZoomTick::Idle => return (viewport, ticks),
                ZoomTick::Aborted(err) => panic!("unexpected abort: {err}"),
            }
        }
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut state = ZoomState::default();

        assert_eq!(
            state.tick(&Viewport::default(), &ZoomSettings::default()),
            ZoomTick::Idle
        );
    }

    #[test]
    fn test_ten_step_zoom_in_from_default() {
        let mut state = ZoomState::default();
        state.select(TARGET, ZoomDirection::In, 10);

        let (viewport, ticks) = run_to_idle(&mut state, Viewport::default());

        assert_eq!(ticks, 10);
        assert_eq!(state, ZoomState::Idle);
        assert_eq!(state.remaining_steps(), 0);
        assert!((viewport.half_width() - 2.0 * 0.9_f64.powi(10)).abs() < 1e-12);
        assert!((viewport.half_width() - 0.6973).abs() < 1e-4);
        assert!((viewport.half_height() - 0.6973).abs() < 1e-4);
        assert_eq!(viewport.depth(), 380);

        // center closes 1 - 0.8^10 of the distance to the target
        let closed = 1.0 - 0.8_f64.powi(10);
        assert!((viewport.center().real - TARGET.real * closed).abs() < 1e-12);
        assert!((viewport.center().imag - TARGET.imag * closed).abs() < 1e-12);
    }

    #[test]
    fn test_remaining_steps_count_down() {
        let mut state = ZoomState::default();
        state.select(TARGET, ZoomDirection::Out, 3);

        let settings = ZoomSettings::default();
        let viewport = Viewport::default();

        assert_eq!(state.remaining_steps(), 3);
        state.tick(&viewport, &settings);
        assert_eq!(state.remaining_steps(), 2);
        assert!(state.is_animating());
    }

    #[test]
    fn test_new_selection_replaces_previous_target() {
        let mut state = ZoomState::default();
        state.select(TARGET, ZoomDirection::In, 10);
        state.tick(&Viewport::default(), &ZoomSettings::default());

        state.select(Complex::new(0.3, 0.0), ZoomDirection::Out, 10);

        assert_eq!(
            state,
            ZoomState::Animating(ZoomTarget {
                target: Complex::new(0.3, 0.0),
                direction: ZoomDirection::Out,
                remaining_steps: 10,
            })
        );
    }

    #[test]
    fn test_zero_step_selection_stays_idle() {
        let mut state = ZoomState::default();
        state.select(TARGET, ZoomDirection::In, 0);

        assert!(!state.is_animating());
    }

    #[test]
    fn test_invalid_step_aborts_animation() {
        let mut state = ZoomState::default();
        state.select(TARGET, ZoomDirection::In, 5);
        let settings = ZoomSettings {
            zoom_in_factor: f64::NAN,
            ..ZoomSettings::default()
        };

        let tick = state.tick(&Viewport::default(), &settings);

        assert!(matches!(tick, ZoomTick::Aborted(ViewportError::InvalidHalfWidth(_))));
        assert_eq!(state, ZoomState::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut state = ZoomState::default();
        state.select(TARGET, ZoomDirection::In, 5);

        state.cancel();

        assert_eq!(state, ZoomState::Idle);
    }
}
