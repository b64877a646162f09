//! Breadcrumb trail for the current route.

#[cfg(test)]
#[path = "breadcrumbs_test.rs"]
mod breadcrumbs_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::app_model::DocumentMeta;

/// One link of the trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
    pub current: bool,
}

/// Build the trail for `pathname`: a root crumb plus one crumb per path
/// segment. The last crumb is current and shows the page title when known.
#[must_use]
pub fn breadcrumb_trail(pathname: &str, meta: &DocumentMeta) -> Vec<Crumb> {
    let mut trail = vec![Crumb { label: "Home".to_owned(), href: "/".to_owned(), current: false }];
    let mut href = String::new();
    for segment in pathname.split('/').filter(|s| !s.is_empty()) {
        href.push('/');
        href.push_str(segment);
        trail.push(Crumb { label: segment.to_owned(), href: href.clone(), current: false });
    }
    if let Some(last) = trail.last_mut() {
        last.current = true;
        if !meta.title.is_empty() {
            last.label.clone_from(&meta.title);
        }
    }
    trail
}

/// Breadcrumbs region. Following a crumb clears the 404 flag and reports
/// the crumb as the new page title.
#[component]
pub fn Breadcrumbs(
    #[prop(into)] meta: Signal<DocumentMeta>,
    on_update_404: Callback<bool>,
    on_update_document_meta: Callback<DocumentMeta>,
) -> impl IntoView {
    let location = use_location();
    let trail = Memo::new(move |_| meta.with(|m| breadcrumb_trail(&location.pathname.get(), m)));

    view! {
        <nav class="breadcrumbs" aria-label="breadcrumb">
            <ol class="breadcrumbs__list">
                {move || {
                    trail
                        .get()
                        .into_iter()
                        .map(|crumb| {
                            let Crumb { label, href, current } = crumb;
                            let title = label.clone();
                            let on_click = move |_| {
                                on_update_404.run(false);
                                let next = DocumentMeta { title: title.clone(), ..meta.get_untracked() };
                                on_update_document_meta.run(next);
                            };
                            view! {
                                <li class="breadcrumbs__item" class:breadcrumbs__item--current=current>
                                    <a href=href on:click=on_click aria-current=current.then_some("page")>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ol>
        </nav>
    }
}
