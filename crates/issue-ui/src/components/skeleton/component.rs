use dioxus::prelude::*;

use crate::skeleton::use_loading;
use crate::theme::use_skeleton_theme;

/// A neutral block standing in for a leaf primitive while loading.
///
/// Sized in pixels to the footprint of the leaf it replaces. Hidden from
/// assistive tech and not interactive.
#[component]
pub fn SkeletonBlock(
    width: u32,
    height: u32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let theme = use_skeleton_theme();
    let base = vec![
        Attribute::new("class", "skeleton skeleton-block", None, false),
        Attribute::new("aria-hidden", "true", None, false),
        Attribute::new("data-animate", theme.animate_attr(), None, false),
        Attribute::new(
            "style",
            format!("width: {width}px; height: {height}px;"),
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
        }
    }
}

/// Wraps displayed text.
///
/// Inside a loading subtree the children are dropped and a bar of the
/// theme's fixed text width is drawn instead; its width never depends on
/// the children. Otherwise the children render as-is, without a wrapper.
#[component]
pub fn Span(children: Element) -> Element {
    let loading = use_loading();
    let theme = use_skeleton_theme();

    if !loading {
        return children;
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "skeleton skeleton-text",
            "aria-hidden": "true",
            "data-animate": theme.animate_attr(),
            style: theme.text_style(),
        }
    }
}
