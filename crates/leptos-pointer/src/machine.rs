//! Pointer State Machines
//!
//! DOM-free transition logic behind the Leptos bindings in the crate root.
//! Every machine takes plain numbers, so it can be driven from tests.

use serde::{Deserialize, Serialize};

/// A point in viewport (client) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Where the pointer is parked before the first move event
    pub const OFFSCREEN: Point = Point { x: -100.0, y: -100.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

// ========================
// Idle timer
// ========================

/// Idle timer phases
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdlePhase {
    #[default]
    Active,
    Idle,
}

/// Inputs to the idle timer, timestamps in milliseconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IdleEvent {
    /// Pointer moved at `at`
    Moved { at: f64 },
    /// A scheduled check fired at `at`
    TimerFired { at: f64 },
}

/// Debounced Active -> Idle machine.
///
/// A move always returns to `Active` and pushes the deadline out to
/// `at + quiet_ms`. A timer firing only flips to `Idle` when the full quiet
/// interval has passed since the *latest* move, so a stale timer that was not
/// cancelled in time can never produce a spurious transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleTimer {
    quiet_ms: f64,
    phase: IdlePhase,
    last_move_at: Option<f64>,
}

impl IdleTimer {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            phase: IdlePhase::Active,
            last_move_at: None,
        }
    }

    pub fn phase(&self) -> IdlePhase {
        self.phase
    }

    pub fn quiet_ms(&self) -> f64 {
        self.quiet_ms
    }

    /// When the pending timer should fire, if one is pending
    pub fn deadline(&self) -> Option<f64> {
        match self.phase {
            IdlePhase::Active => self.last_move_at.map(|t| t + self.quiet_ms),
            IdlePhase::Idle => None,
        }
    }

    pub fn on_event(&mut self, event: IdleEvent) -> IdlePhase {
        match event {
            IdleEvent::Moved { at } => {
                self.last_move_at = Some(at);
                self.phase = IdlePhase::Active;
            }
            IdleEvent::TimerFired { at } => {
                if let Some(deadline) = self.deadline() {
                    if at >= deadline {
                        self.phase = IdlePhase::Idle;
                    }
                }
            }
        }
        self.phase
    }
}

// ========================
// Scroll flag
// ========================

/// `true` once the vertical offset is strictly past the threshold
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFlag {
    threshold: f64,
    scrolled: bool,
}

impl ScrollFlag {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// No hysteresis: the flag is a pure function of the latest offset
    pub fn on_event(&mut self, scroll_y: f64) -> bool {
        self.scrolled = scroll_y > self.threshold;
        self.scrolled
    }
}

// ========================
// Proximity + distortion
// ========================

/// Pointer-near-element check
pub fn within_radius(pointer: Point, center: Point, radius: f64) -> bool {
    pointer.distance_to(center) < radius
}

/// Displacement applied to an element, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Pushes an element along the pointer direction while the pointer is close
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistortionField {
    pub radius: f64,
    pub max_offset: f64,
}

impl DistortionField {
    pub fn offset(&self, pointer: Point, center: Point) -> Offset {
        if self.radius <= 0.0 || !within_radius(pointer, center, self.radius) {
            return Offset::ZERO;
        }
        let scale = |d: f64| (d / self.radius * self.max_offset).clamp(-self.max_offset, self.max_offset);
        Offset {
            dx: scale(pointer.x - center.x),
            dy: scale(pointer.y - center.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays moves against a virtual clock, firing each scheduled check at
    /// its deadline, and returns the times at which the timer went Idle.
    fn idle_transitions(quiet_ms: f64, moves: &[f64], until: f64) -> Vec<f64> {
        let mut timer = IdleTimer::new(quiet_ms);
        let mut transitions = Vec::new();
        let mut moves = moves.iter().copied().peekable();
        loop {
            let next_move = moves.peek().copied();
            let next_fire = timer.deadline();
            match (next_move, next_fire) {
                (Some(m), Some(f)) if f < m => {
                    if timer.on_event(IdleEvent::TimerFired { at: f }) == IdlePhase::Idle {
                        transitions.push(f);
                    }
                }
                (Some(m), _) => {
                    timer.on_event(IdleEvent::Moved { at: m });
                    moves.next();
                }
                (None, Some(f)) if f <= until => {
                    if timer.on_event(IdleEvent::TimerFired { at: f }) == IdlePhase::Idle {
                        transitions.push(f);
                    }
                }
                _ => break,
            }
        }
        transitions
    }

    #[test]
    fn test_idle_starts_active_without_deadline() {
        let timer = IdleTimer::new(1000.0);
        assert_eq!(timer.phase(), IdlePhase::Active);
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_idle_fires_one_quiet_interval_after_last_move() {
        // 0 and 200 are close together; the gap before 2000 is longer than
        // the quiet interval, so the cursor idles at 1200 and again at 3000.
        let transitions = idle_transitions(1000.0, &[0.0, 200.0, 2000.0], 10_000.0);
        assert_eq!(transitions, vec![1200.0, 3000.0]);
    }

    #[test]
    fn test_idle_move_postpones_transition() {
        let transitions = idle_transitions(1000.0, &[0.0, 200.0, 2000.0, 2900.0], 10_000.0);
        assert_eq!(transitions, vec![1200.0, 3900.0]);
    }

    #[test]
    fn test_idle_rapid_moves_never_idle() {
        let moves: Vec<f64> = (0..50).map(|i| i as f64 * 100.0).collect();
        let transitions = idle_transitions(1000.0, &moves, 4900.0);
        assert!(transitions.is_empty());
    }

    #[test]
    fn test_idle_stale_timer_is_ignored() {
        let mut timer = IdleTimer::new(1000.0);
        timer.on_event(IdleEvent::Moved { at: 2000.0 });
        // A timer scheduled by an earlier move fires late but before the new deadline
        assert_eq!(timer.on_event(IdleEvent::TimerFired { at: 2999.0 }), IdlePhase::Active);
        assert_eq!(timer.on_event(IdleEvent::TimerFired { at: 3000.0 }), IdlePhase::Idle);
    }

    #[test]
    fn test_idle_move_wakes_immediately() {
        let mut timer = IdleTimer::new(1000.0);
        timer.on_event(IdleEvent::Moved { at: 0.0 });
        timer.on_event(IdleEvent::TimerFired { at: 1000.0 });
        assert_eq!(timer.phase(), IdlePhase::Idle);
        assert_eq!(timer.on_event(IdleEvent::Moved { at: 1001.0 }), IdlePhase::Active);
        assert_eq!(timer.deadline(), Some(2001.0));
    }

    #[test]
    fn test_scroll_flag_boundary() {
        let mut flag = ScrollFlag::new(50.0);
        assert!(!flag.on_event(49.0));
        assert!(!flag.on_event(50.0));
        assert!(flag.on_event(51.0));
        // No hysteresis on the way back
        assert!(!flag.on_event(50.0));
    }

    #[test]
    fn test_proximity() {
        let center = Point::new(100.0, 100.0);
        assert!(within_radius(Point::new(100.0, 299.0), center, 200.0));
        assert!(!within_radius(Point::new(100.0, 300.0), center, 200.0));
        assert!(!within_radius(Point::OFFSCREEN, Point::new(500.0, 500.0), 200.0));
    }

    #[test]
    fn test_distortion_inside_radius() {
        let field = DistortionField { radius: 150.0, max_offset: 8.0 };
        let offset = field.offset(Point::new(175.0, 100.0), Point::new(100.0, 100.0));
        assert_eq!(offset, Offset { dx: 4.0, dy: 0.0 });
    }

    #[test]
    fn test_distortion_resets_outside_radius() {
        let field = DistortionField { radius: 150.0, max_offset: 8.0 };
        let offset = field.offset(Point::new(250.0, 100.0), Point::new(100.0, 100.0));
        assert!(offset.is_zero());
    }

    #[test]
    fn test_distortion_is_clamped() {
        let field = DistortionField { radius: 150.0, max_offset: 8.0 };
        let offset = field.offset(Point::new(0.0, 249.0), Point::new(0.0, 100.0));
        assert!(offset.dy <= 8.0 && offset.dy > 7.9);
        assert_eq!(offset.dx, 0.0);
    }
}
