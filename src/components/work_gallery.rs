//! Portfolio work cards with preview triggers.

#[cfg(test)]
#[path = "work_gallery_test.rs"]
mod work_gallery_test;

use leptos::prelude::*;

use crate::state::modal::ModalState;

/// One portfolio card. `preview_src` is the full-resolution asset the modal
/// loads (the card's `data-src`); `thumb_src` is what the card renders.
#[derive(Clone, Copy)]
struct Work {
    title: &'static str,
    thumb_src: &'static str,
    preview_src: &'static str,
}

const WORKS: &[Work] = &[
    Work {
        title: "Seed round deck, Fathom Robotics",
        thumb_src: "/img/works/fathom-thumb.jpg",
        preview_src: "/img/works/fathom-full.jpg",
    },
    Work {
        title: "Brand system, Loam Coffee",
        thumb_src: "/img/works/loam-thumb.jpg",
        preview_src: "/img/works/loam-full.jpg",
    },
    Work {
        title: "Launch site, Driftwell",
        thumb_src: "/img/works/driftwell-thumb.jpg",
        preview_src: "",
    },
];

/// Prefer the high-resolution data attribute over the rendered thumbnail;
/// `None` when neither is usable, in which case the preview opens nothing.
fn preferred_preview_src<'a>(data_src: Option<&'a str>, rendered_src: &'a str) -> Option<&'a str> {
    match data_src {
        Some(src) if !src.is_empty() => Some(src),
        _ if !rendered_src.is_empty() => Some(rendered_src),
        _ => None,
    }
}

/// Grid of work cards; each card's view control opens the preview modal.
#[component]
pub fn WorkGallery() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    let on_view = move |work: Work| {
        let Some(src) = preferred_preview_src(Some(work.preview_src), work.thumb_src) else {
            return;
        };
        modal.update(|m| {
            m.open(src);
        });
    };

    view! {
        {WORKS
            .iter()
            .map(|&work| {
                view! {
                    <article class="work-card">
                        <img
                            class="work-card__image"
                            src=work.thumb_src
                            data-src=work.preview_src
                            alt=work.title
                        />
                        <div class="work-card__meta">
                            <h3 class="work-card__title">{work.title}</h3>
                            <button class="work-card__view" on:click=move |_| on_view(work)>
                                "View"
                            </button>
                        </div>
                    </article>
                }
            })
            .collect::<Vec<_>>()}
    }
}
