use dioxus::prelude::*;

/// Tree-scoped "is this subtree loading" flag.
///
/// Published by the nearest [`LoadingScope`] or skeleton provider above a
/// component. The flag lives in a signal so that consumers re-render when
/// their provider flips, even if their own props are unchanged.
#[derive(Clone, Copy)]
pub struct LoadingContext {
    loading: Signal<bool>,
}

impl LoadingContext {
    pub fn is_loading(&self) -> bool {
        (self.loading)()
    }
}

/// Publish `loading` to every descendant of the current component.
///
/// Call unconditionally on every render; the published value follows the
/// latest call. A provider further down shadows this one for its subtree.
pub fn use_loading_provider(loading: bool) -> LoadingContext {
    let mut ctx = use_hook(|| {
        provide_context(LoadingContext {
            loading: Signal::new(loading),
        })
    });

    if *ctx.loading.peek() != loading {
        tracing::debug!(loading, "loading scope changed");
        ctx.loading.set(loading);
    }

    ctx
}

/// Read the loading flag of the nearest enclosing provider.
///
/// Without any provider above, the subtree is assumed loaded.
pub fn use_loading() -> bool {
    let ctx = use_hook(try_consume_context::<LoadingContext>);
    ctx.map(|ctx| ctx.is_loading()).unwrap_or(false)
}

/// Renders `children` with the loading flag set to `loading`.
#[component]
pub fn LoadingScope(loading: bool, children: Element) -> Element {
    use_loading_provider(loading);

    rsx! {
        {children}
    }
}
