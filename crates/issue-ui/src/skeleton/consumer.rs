use dioxus::prelude::*;

use crate::components::skeleton::SkeletonBlock;

use super::context::use_loading;

/// Layout box of a leaf primitive, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(size: u32) -> Self {
        Self::new(size, size)
    }
}

/// Leaf props that know how much room their rendering takes, so a skeleton
/// block can hold the same space.
pub trait SkeletonFootprint {
    fn footprint(&self) -> Footprint;
}

/// Render `component`, or a neutral block of the same footprint when the
/// enclosing subtree is loading.
///
/// The block carries no handlers, so the leaf is not interactive while
/// loading. `component` is skipped entirely in that case and must not use
/// hooks.
pub fn with_skeleton<P: SkeletonFootprint>(
    props: P,
    component: impl FnOnce(P) -> Element,
) -> Element {
    if use_loading() {
        let Footprint { width, height } = props.footprint();
        rsx! {
            SkeletonBlock { width, height }
        }
    } else {
        component(props)
    }
}
