use dioxus::prelude::*;

use crate::components::button::Button;

/// Cursor pagination controls: Previous, the current page number, Next.
///
/// Each button is disabled unless the matching page exists.
#[component]
pub fn Pagination(
    page: u32,
    #[props(default)] has_previous_page: bool,
    #[props(default)] has_next_page: bool,
    #[props(default)] on_load_previous: Option<EventHandler<()>>,
    #[props(default)] on_load_next: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                primary: true,
                disabled: !has_previous_page,
                onclick: move |_| {
                    if let Some(handler) = &on_load_previous {
                        handler.call(());
                    }
                },
                "Previous"
            }
            span { class: "pagination-page", "{page}" }
            Button {
                primary: true,
                disabled: !has_next_page,
                onclick: move |_| {
                    if let Some(handler) = &on_load_next {
                        handler.call(());
                    }
                },
                "Next"
            }
        }
    }
}
