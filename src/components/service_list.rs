//! Services section with the sliding highlight indicator.
//!
//! The tracking logic lives in [`crate::state::highlight`]; this component
//! wires it to the DOM. It measures item geometry relative to the frame,
//! applies placements to the indicator element as one combined transform plus
//! explicit width/height, and feeds pointer and resize events into the
//! tracker. If the items never mount, the tracker is never built and the
//! whole section stays inert.

use leptos::html;
use leptos::prelude::*;

use crate::state::highlight::{HighlightTracker, Placement};

/// Service rows rendered in the list. Labels double as tracker labels.
const SERVICES: &[(&str, &str)] = &[
    ("Brand identity", "Logo systems, palettes, and guidelines that scale."),
    ("Pitch design", "Investor decks that carry a story from hook to ask."),
    ("Web design", "Marketing pages built to read well and load fast."),
    ("Print & packaging", "Collateral that survives the meeting room table."),
];

/// Label pattern selecting the item the indicator rests on by default.
const DEFAULT_PATTERN: &str = "pitch design";

/// Measure each mounted item's offset box relative to the frame.
#[cfg(feature = "hydrate")]
fn measure_items(refs: &[NodeRef<html::Li>]) -> Vec<crate::state::highlight::ItemBox> {
    refs.iter()
        .filter_map(|node_ref| node_ref.get_untracked())
        .map(|el| crate::state::highlight::ItemBox {
            left: f64::from(el.offset_left()),
            top: f64::from(el.offset_top()),
            width: f64::from(el.offset_width()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

/// Service list with the indicator element that tracks pointer focus.
#[component]
pub fn ServiceList() -> impl IntoView {
    let item_refs: Vec<NodeRef<html::Li>> = SERVICES.iter().map(|_| NodeRef::new()).collect();
    let tracker = RwSignal::new(None::<HighlightTracker>);
    let placement = RwSignal::new(None::<Placement>);

    // Build the tracker once the items have mounted and measured; position the
    // indicator on the default target immediately.
    #[cfg(feature = "hydrate")]
    {
        let item_refs = item_refs.clone();
        Effect::new(move || {
            if tracker.with_untracked(Option::is_some) {
                return;
            }
            let boxes = measure_items(&item_refs);
            if boxes.len() != SERVICES.len() {
                return;
            }
            let items = SERVICES
                .iter()
                .zip(boxes)
                .map(|(&(label, _), bounds)| crate::state::highlight::TrackedItem {
                    label: label.to_owned(),
                    bounds,
                })
                .collect();
            let Some(t) = HighlightTracker::new(items, DEFAULT_PATTERN) else {
                return;
            };
            placement.set(Some(t.initial_placement()));
            tracker.set(Some(t));
        });
    }

    // Window resize: re-measure, then reset the indicator to the default
    // target. This intentionally ignores whichever item was last hovered.
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let item_refs = item_refs.clone();
        let on_resize = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let boxes = measure_items(&item_refs);
            let reset = tracker
                .try_update(|t| {
                    let t = t.as_mut()?;
                    for (index, bounds) in boxes.iter().enumerate() {
                        t.update_bounds(index, *bounds);
                    }
                    Some(t.viewport_resized())
                })
                .flatten();
            if let Some(p) = reset {
                placement.set(Some(p));
            }
        });
        match web_sys::window() {
            Some(window) => {
                if window
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("service list: resize listener not attached");
                }
            }
            None => log::warn!("service list: no window for resize listener"),
        }
        // Page-lifetime listener.
        on_resize.forget();
    }

    let on_enter = move |index: usize| {
        let moved = tracker
            .try_update(|t| t.as_mut().and_then(|t| t.focus_enter(index)))
            .flatten();
        if let Some(p) = moved {
            placement.set(Some(p));
        }
    };

    let on_list_leave = move |_| {
        let token = tracker
            .try_update(|t| t.as_mut().map(HighlightTracker::collection_exit))
            .flatten();
        let Some(token) = token else {
            return;
        };
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(crate::state::highlight::RETURN_DELAY_MS, move || {
            let returned = tracker
                .try_update(|t| t.as_mut().and_then(|t| t.return_due(token)))
                .flatten();
            if let Some(p) = returned {
                placement.set(Some(p));
            }
        })
        .forget();
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    };

    let indicator_style = move || {
        placement.get().map_or_else(
            || "opacity:0".to_owned(),
            |p| {
                format!(
                    "width:{}px;height:{}px;transform:translate3d({}px,{}px,0)",
                    p.bounds.width, p.bounds.height, p.bounds.left, p.bounds.top
                )
            },
        )
    };

    let is_current =
        move |index: usize| tracker.with(|t| t.as_ref().is_some_and(|t| t.is_active(index)));

    view! {
        <section id="services" class="services">
            <h2 class="services__heading">"What I do"</h2>
            <div class="services__frame">
                <ul class="services__list" on:mouseleave=on_list_leave>
                    {item_refs
                        .iter()
                        .zip(SERVICES)
                        .enumerate()
                        .map(|(index, (&node_ref, &(label, blurb)))| {
                            view! {
                                <li
                                    class="services__item"
                                    class:services__item--current=move || is_current(index)
                                    node_ref=node_ref
                                    on:mouseenter=move |_| on_enter(index)
                                >
                                    <span class="services__item-label">{label}</span>
                                    <p class="services__item-blurb">{blurb}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <div class="services__indicator" style=indicator_style></div>
            </div>
        </section>
    }
}
