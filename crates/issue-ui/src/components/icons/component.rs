use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaCircleExclamation, FaComment};
use dioxus_free_icons::Icon;
use issue_types::IssueState;

use crate::skeleton::{with_skeleton, Footprint, SkeletonFootprint};

// ─── Issue state ───────────────────────────────────────────────────────

#[derive(Props, Clone, PartialEq)]
pub struct IssueStateIconProps {
    /// Unknown state renders an empty box of the same size.
    #[props(default)]
    pub state: Option<IssueState>,
    #[props(default = 24)]
    pub size: u32,
}

impl SkeletonFootprint for IssueStateIconProps {
    fn footprint(&self) -> Footprint {
        Footprint::square(self.size)
    }
}

/// Open/closed glyph for an issue. A skeleton block while loading.
#[component]
pub fn IssueStateIcon(props: IssueStateIconProps) -> Element {
    with_skeleton(props, issue_state_glyph)
}

fn issue_state_glyph(props: IssueStateIconProps) -> Element {
    let size = props.size;
    let Some(state) = props.state else {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            span {
                class: "issue-state-icon",
                style: "width: {size}px; height: {size}px;",
            }
        };
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "issue-state-icon",
            "data-state": state.css_key(),
            title: state.label(),
            {match state {
                IssueState::Open => rsx! {
                    Icon::<FaCircleExclamation> { icon: FaCircleExclamation, width: size, height: size }
                },
                IssueState::Closed => rsx! {
                    Icon::<FaCircleCheck> { icon: FaCircleCheck, width: size, height: size }
                },
            }}
        }
    }
}

// ─── Comments ──────────────────────────────────────────────────────────

#[derive(Props, Clone, PartialEq)]
pub struct CommentIconProps {
    #[props(default = 18)]
    pub size: u32,
}

impl SkeletonFootprint for CommentIconProps {
    fn footprint(&self) -> Footprint {
        Footprint::square(self.size)
    }
}

/// Speech-bubble glyph next to a comment count. A skeleton block while loading.
#[component]
pub fn CommentIcon(props: CommentIconProps) -> Element {
    with_skeleton(props, comment_glyph)
}

fn comment_glyph(props: CommentIconProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "comment-icon", "aria-hidden": "true",
            Icon::<FaComment> { icon: FaComment, width: props.size, height: props.size }
        }
    }
}
