#![allow(dead_code)]

use dioxus::prelude::*;

/// Render a root component to an HTML string.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render `component` as the root with the given props.
pub fn render_with_props<P: Clone + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// The opening `<button ...>` tag of the button labelled `label`.
pub fn button_tag<'a>(html: &'a str, label: &str) -> &'a str {
    let label_at = html
        .find(label)
        .unwrap_or_else(|| panic!("no {label:?} in {html}"));
    let start = html[..label_at]
        .rfind("<button")
        .unwrap_or_else(|| panic!("no button before {label:?} in {html}"));
    &html[start..label_at]
}
