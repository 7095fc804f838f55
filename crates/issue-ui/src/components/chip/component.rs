use dioxus::prelude::*;
use issue_types::Label;

/// A small outlined chip showing an issue label in the label's colour.
#[component]
pub fn Chip(
    label: Label,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "chip", None, false),
        Attribute::new(
            "style",
            format!("--chip-color: {};", label.css_color()),
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            "{label.name}"
        }
    }
}
