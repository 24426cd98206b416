//! Search page.
//!
//! Hosts the `/search` route. While anything under the route suspends, the
//! layout's `SuspenseBoundary` shows `LoadingIndicator` in its place and
//! swaps the real content back in once it resolves.

use dioxus::prelude::*;
use search_ui::components::LoadingIndicator;
use search_ui::styles::LoadingStyles;

/// DOM id of the element the app mounts into.
const ROOT_ELEMENT_ID: &str = "search-root";

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
enum Route {
    #[layout(SearchLayout)]
        #[redirect("/", || Route::Search { query: String::new() })]
        #[route("/search?:query")]
        Search { query: String },
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("mounting search page into #{}", ROOT_ELEMENT_ID);
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ELEMENT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        LoadingStyles {}
        Router::<Route> {}
    }
}

#[component]
fn SearchLayout() -> Element {
    rsx! {
        SearchSuspense { Outlet::<Route> {} }
    }
}

/// Loading slot for every page under the search route.
#[component]
fn SearchSuspense(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_| rsx! { LoadingIndicator {} },
            {children}
        }
    }
}

#[component]
fn Search(query: String) -> Element {
    log::debug!("search route: query={:?}", query);

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            if query.is_empty() {
                h2 { "Search" }
            } else {
                h2 { "Results for \"{query}\"" }
            }
        }
    }
}
