//! Reveal Component
//!
//! Wrapper that gains a `visible` class the first time it enters the viewport.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type ObserverSlot = Option<(web_sys::IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)>;

fn disconnect(slot: &mut ObserverSlot) {
    if let Some((observer, _callback)) = slot.take() {
        observer.disconnect();
    }
}

#[component]
pub fn Reveal(
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);
    let node_ref = NodeRef::<Div>::new();
    let empty: ObserverSlot = None;
    let observer = StoredValue::new_local(empty);

    // Observe once the element is mounted
    Effect::new(move |_| {
        let Some(el) = node_ref.get() else { return };
        if visible.get_untracked() || observer.with_value(|slot| slot.is_some()) {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let entered = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<web_sys::IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if entered {
                set_visible.set(true);
            }
        });

        match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(obs) => {
                obs.observe(&el);
                observer.update_value(|slot| *slot = Some((obs, callback)));
            }
            Err(_) => set_visible.set(true),
        }
    });

    // Only the first entry matters
    Effect::new(move |_| {
        if visible.get() {
            observer.update_value(disconnect);
        }
    });

    on_cleanup(move || {
        observer.try_update_value(disconnect);
    });

    let classes = move || {
        if visible.get() {
            format!("reveal visible {}", class)
        } else {
            format!("reveal {}", class)
        }
    };

    view! {
        <div node_ref=node_ref class=classes>
            {children()}
        </div>
    }
}
