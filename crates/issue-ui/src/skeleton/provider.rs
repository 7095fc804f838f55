use std::any::type_name;
use std::rc::Rc;

use dioxus::prelude::*;

use super::context::use_loading_provider;
use super::fallback::{FallbackSpec, Resolved, SkeletonProps};

/// Render `component` as a skeleton until every data prop of `props` is set.
///
/// Call from the body of the wrapping component, unconditionally:
///
/// ```rust,ignore
/// #[component]
/// pub fn IssueListItem(props: IssueListItemProps) -> Element {
///     with_skeleton_provider(props, issue_list_item)
/// }
/// ```
///
/// Each render resolves `props` against `P::fallbacks()`, publishes the
/// loading decision to the subtree, hands the decision to the props via
/// [`SkeletonProps::set_loading`] and calls `component` with the effective
/// props. If `P::fallbacks()` fails, the error is logged and this subtree
/// renders nothing; siblings are unaffected.
pub fn with_skeleton_provider<P: SkeletonProps>(
    props: P,
    component: impl FnOnce(P) -> Element,
) -> Element {
    let spec = match use_hook(|| P::fallbacks().map(Rc::new)) {
        Ok(spec) => spec,
        Err(err) => {
            tracing::error!(
                component = type_name::<P>(),
                error = %err,
                "invalid fallback declaration, skipping subtree"
            );
            return rsx! {};
        }
    };
    let resolved = resolve_with(&spec, props);

    use_loading_provider(resolved.loading);

    let mut props = resolved.props;
    props.set_loading(resolved.loading);
    component(props)
}

fn resolve_with<P: SkeletonProps>(spec: &FallbackSpec<P>, props: P) -> Resolved<P> {
    let resolved = spec.resolve(props);
    tracing::trace!(
        component = type_name::<P>(),
        loading = resolved.loading,
        missing = ?resolved.missing,
        "resolved skeleton props"
    );
    resolved
}
