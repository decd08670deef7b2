use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};
use yew::prelude::*;

use crate::config;
use crate::visibility::{Geometry, Rect, Section, VisibilityState};

/// Reads section geometry straight from the live document.
pub struct DomGeometry {
    window: Window,
    document: Document,
}

impl DomGeometry {
    pub fn new(window: Window) -> Option<Self> {
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl Geometry for DomGeometry {
    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn section_rect(&self, section: Section) -> Option<Rect> {
        let element = self.document.get_element_by_id(section.id())?;
        let rect = element.get_bounding_client_rect();
        Some(Rect {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

const EVENTS: [&str; 2] = ["scroll", "resize"];

/// Window listeners that refresh the tracker; dropping it detaches them.
struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
    _hero_reveal: Timeout,
}

impl ScrollSubscription {
    fn attach(
        tracker: Rc<RefCell<VisibilityState>>,
        publish: Callback<VisibilityState>,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let geometry = DomGeometry::new(window.clone())?;

        let refresh = {
            let tracker = tracker.clone();
            let publish = publish.clone();
            move || {
                let snapshot = {
                    let mut tracker = tracker.borrow_mut();
                    tracker.refresh(&geometry);
                    tracker.clone()
                };
                publish.emit(snapshot);
            }
        };
        let callback = Closure::wrap(Box::new(refresh) as Box<dyn FnMut()>);

        for event in EVENTS {
            if let Err(e) = window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!("could not listen for {}: {:?}", event, e);
            }
        }

        // Initial check
        let _ = callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&wasm_bindgen::JsValue::NULL);

        let hero_reveal = Timeout::new(config::HERO_REVEAL_MS, move || {
            let snapshot = {
                let mut tracker = tracker.borrow_mut();
                tracker.reveal(Section::Hero);
                tracker.clone()
            };
            publish.emit(snapshot);
        });

        Some(Self {
            window,
            callback,
            _hero_reveal: hero_reveal,
        })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        for event in EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Tracks which sections are in view and how far the page has scrolled.
#[hook]
pub fn use_scroll_visibility() -> VisibilityState {
    let state = use_state(VisibilityState::default);
    let tracker = use_mut_ref(VisibilityState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let publish = Callback::from(move |snapshot: VisibilityState| state.set(snapshot));
                let subscription = ScrollSubscription::attach(tracker, publish);
                if subscription.is_none() {
                    warn!("scroll tracking unavailable, sections stay hidden until reload");
                }
                move || drop(subscription)
            },
            (),
        );
    }

    (*state).clone()
}

/// Flips to `false` once `millis` have passed since mount.
#[hook]
pub fn use_loading(millis: u32) -> bool {
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(millis, move || loading.set(false));
                move || drop(timer)
            },
            (),
        );
    }

    *loading
}
