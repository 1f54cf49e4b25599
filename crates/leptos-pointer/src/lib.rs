//! Leptos Pointer Utilities
//!
//! Window-level pointer, scroll and idle tracking for Leptos components.
//! Each hook registers its listener on the calling component's owner and
//! removes it (and cancels any pending timer) when that owner is cleaned up.

mod machine;

pub use machine::{
    within_radius, DistortionField, IdleEvent, IdlePhase, IdleTimer, Offset, Point, ScrollFlag,
};

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;

/// Center of an element's bounding box in client coordinates
pub fn element_center(el: &web_sys::Element) -> Point {
    let rect = el.get_bounding_client_rect();
    Point::new(rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0)
}

fn client_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Latest pointer position, parked at [`Point::OFFSCREEN`] until the first move
pub fn use_pointer_position() -> ReadSignal<Point> {
    let (position, set_position) = signal(Point::OFFSCREEN);

    let handle = window_event_listener(ev::mousemove, move |ev| {
        set_position.set(client_point(&ev));
    });
    on_cleanup(move || handle.remove());

    position
}

/// `true` after `quiet_ms` without pointer movement, `false` again on the next move
pub fn use_idle(quiet_ms: u32) -> ReadSignal<bool> {
    let (idle, set_idle) = signal(false);
    let timer = StoredValue::new(IdleTimer::new(quiet_ms as f64));
    // Replacing the stored Timeout drops (and so cancels) the previous one
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle = window_event_listener(ev::mousemove, move |_| {
        let now = js_sys::Date::now();
        timer.update_value(|t| {
            t.on_event(IdleEvent::Moved { at: now });
        });
        if idle.get_untracked() {
            set_idle.set(false);
        }

        let check = Timeout::new(quiet_ms, move || {
            let now = js_sys::Date::now();
            let phase = timer.try_update_value(|t| t.on_event(IdleEvent::TimerFired { at: now }));
            if phase == Some(IdlePhase::Idle) {
                set_idle.set(true);
            }
        });
        pending.update_value(|p| *p = Some(check));
    });

    on_cleanup(move || {
        handle.remove();
        pending.try_update_value(|p| *p = None);
    });

    idle
}

/// `true` while the window is scrolled past `threshold` pixels
pub fn use_scroll_flag(threshold: f64) -> ReadSignal<bool> {
    let flag = StoredValue::new(ScrollFlag::new(threshold));
    let current_offset = || window().scroll_y().unwrap_or(0.0);

    // Start from the real offset so a remount never shows a stale value
    let initial = flag
        .try_update_value(|f| f.on_event(current_offset()))
        .unwrap_or(false);
    let (scrolled, set_scrolled) = signal(initial);

    let handle = window_event_listener(ev::scroll, move |_| {
        let next = flag.try_update_value(|f| f.on_event(current_offset()));
        if let Some(next) = next {
            if next != scrolled.get_untracked() {
                set_scrolled.set(next);
            }
        }
    });
    on_cleanup(move || handle.remove());

    scrolled
}

/// `true` while the pointer is within `radius` of the point returned by `center`.
///
/// `center` returns `None` while the tracked element is not mounted.
pub fn use_proximity<F>(center: F, radius: f64) -> ReadSignal<bool>
where
    F: Fn() -> Option<Point> + 'static,
{
    let (near, set_near) = signal(false);

    let handle = window_event_listener(ev::mousemove, move |ev| {
        let Some(center) = center() else { return };
        let next = within_radius(client_point(&ev), center, radius);
        if next != near.get_untracked() {
            set_near.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    near
}

/// Per-element displacement driven by a [`DistortionField`]
pub fn use_distortion<F>(center: F, field: DistortionField) -> ReadSignal<Offset>
where
    F: Fn() -> Option<Point> + 'static,
{
    let (offset, set_offset) = signal(Offset::ZERO);

    let handle = window_event_listener(ev::mousemove, move |ev| {
        let Some(center) = center() else { return };
        let next = field.offset(client_point(&ev), center);
        if next != offset.get_untracked() {
            set_offset.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    offset
}
