use std::fmt;

use crate::error::SkeletonError;

use super::placeholder::Placeholder;

/// How a data prop is filled in while its component is loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    /// A fixed value given at declaration.
    Constant,
    /// Synthetic text from a [`Placeholder`].
    Generated(Placeholder),
    /// The prop is cleared to `None`.
    Null,
}

struct FieldFallback<P> {
    name: &'static str,
    kind: FallbackKind,
    is_missing: Box<dyn Fn(&mut P) -> bool>,
    substitute: Box<dyn Fn(&mut P)>,
}

/// Which props of `P` carry data, and what each one falls back to.
///
/// Fields are addressed through accessors rather than by string lookup, so
/// a fallback for a prop the component does not have fails to compile.
/// Names are kept for logging and introspection only.
pub struct FallbackSpec<P> {
    fields: Vec<FieldFallback<P>>,
}

/// Props after the loading decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<P> {
    pub props: P,
    pub loading: bool,
    /// Covered fields that were `None` on the way in.
    pub missing: Vec<&'static str>,
}

impl<P: 'static> FallbackSpec<P> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Fall back to a clone of `value`.
    pub fn constant<T: Clone + 'static>(
        self,
        name: &'static str,
        field: fn(&mut P) -> &mut Option<T>,
        value: T,
    ) -> Self {
        self.push(name, FallbackKind::Constant, field, move || Some(value.clone()))
    }

    /// Fall back to freshly materialized placeholder text.
    pub fn generated<T: From<String> + 'static>(
        self,
        name: &'static str,
        field: fn(&mut P) -> &mut Option<T>,
        placeholder: Placeholder,
    ) -> Self {
        self.push(name, FallbackKind::Generated(placeholder), field, move || {
            Some(T::from(placeholder.text()))
        })
    }

    /// Fall back to `None`.
    pub fn null<T: 'static>(self, name: &'static str, field: fn(&mut P) -> &mut Option<T>) -> Self {
        self.push(name, FallbackKind::Null, field, || None)
    }

    fn push<T: 'static>(
        mut self,
        name: &'static str,
        kind: FallbackKind,
        field: fn(&mut P) -> &mut Option<T>,
        value: impl Fn() -> Option<T> + 'static,
    ) -> Self {
        if self.covers(name) {
            tracing::debug!(field = name, "fallback redeclared, keeping the last one");
            self.fields.retain(|f| f.name != name);
        }
        self.fields.push(FieldFallback {
            name,
            kind,
            is_missing: Box::new(move |props| field(props).is_none()),
            substitute: Box::new(move |props| *field(props) = value()),
        });
        self
    }

    /// Decide loading mode for `props` and compute the effective props.
    ///
    /// Loading is all-or-nothing: one missing field puts the component in
    /// loading mode and then every covered field takes its fallback, present
    /// or not. Fields without a declared fallback are never touched.
    pub fn resolve(&self, mut props: P) -> Resolved<P> {
        let missing: Vec<&'static str> = self
            .fields
            .iter()
            .filter(|f| (f.is_missing)(&mut props))
            .map(|f| f.name)
            .collect();
        let loading = !missing.is_empty();

        if loading {
            for field in &self.fields {
                (field.substitute)(&mut props);
            }
        }

        Resolved {
            props,
            loading,
            missing,
        }
    }

    pub fn covers(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn kind_of(&self, name: &str) -> Option<FallbackKind> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.kind)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<P: 'static> Default for FallbackSpec<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for FallbackSpec<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|field| (field.name, field.kind)))
            .finish()
    }
}

/// Props of a component that renders as a skeleton until its data arrives.
///
/// Implemented by the props struct of any component wrapped with
/// [`with_skeleton_provider`](super::with_skeleton_provider).
pub trait SkeletonProps: Clone + 'static {
    /// Declared once per component type; built once per mounted instance.
    fn fallbacks() -> Result<FallbackSpec<Self>, SkeletonError>;

    /// Receives the loading decision so the component's own root can react
    /// (e.g. disable pointer interaction) without reading context.
    fn set_loading(&mut self, loading: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::placeholder;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    enum State {
        Open,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        title: Option<String>,
        author: Option<String>,
        state: Option<State>,
        number: Option<u64>,
    }

    fn spec() -> FallbackSpec<Row> {
        FallbackSpec::new()
            .generated("title", |p: &mut Row| &mut p.title, placeholder(50).unwrap())
            .generated("author", |p: &mut Row| &mut p.author, placeholder(10).unwrap())
            .null("state", |p: &mut Row| &mut p.state)
    }

    fn full_row() -> Row {
        Row {
            title: Some("Fix bug".into()),
            author: Some("alice".into()),
            state: Some(State::Open),
            number: Some(42),
        }
    }

    #[test]
    fn one_missing_field_substitutes_every_covered_field() {
        let row = Row {
            author: None,
            ..full_row()
        };
        let resolved = spec().resolve(row);

        assert!(resolved.loading);
        assert_eq!(resolved.missing, vec!["author"]);
        assert_eq!(resolved.props.title.as_ref().map(|t| t.chars().count()), Some(50));
        assert_ne!(resolved.props.title.as_deref(), Some("Fix bug"));
        assert_eq!(resolved.props.author.as_ref().map(|a| a.chars().count()), Some(10));
        assert_eq!(resolved.props.state, None);
        assert_eq!(resolved.props.number, Some(42));
    }

    #[test]
    fn complete_props_pass_through_unchanged() {
        let resolved = spec().resolve(full_row());

        assert!(!resolved.loading);
        assert!(resolved.missing.is_empty());
        assert_eq!(resolved.props, full_row());
    }

    #[test]
    fn uncovered_fields_never_trigger_loading() {
        let row = Row {
            number: None,
            ..full_row()
        };
        let resolved = spec().resolve(row.clone());
        assert!(!resolved.loading);
        assert_eq!(resolved.props, row);
    }

    #[test]
    fn every_missing_field_is_reported() {
        let row = Row {
            title: None,
            author: None,
            state: None,
            number: None,
        };
        let resolved = spec().resolve(row);
        assert_eq!(resolved.missing, vec!["title", "author", "state"]);
    }

    #[test]
    fn constant_fallback_clones_declared_value() {
        let spec = FallbackSpec::new()
            .constant("author", |p: &mut Row| &mut p.author, "someone".to_string())
            .null("state", |p: &mut Row| &mut p.state);
        let resolved = spec.resolve(Row {
            state: None,
            ..full_row()
        });
        assert_eq!(resolved.props.author.as_deref(), Some("someone"));
        assert_eq!(spec.kind_of("author"), Some(FallbackKind::Constant));
    }

    #[test]
    fn redeclared_field_keeps_last_fallback() {
        let spec = FallbackSpec::new()
            .null("title", |p: &mut Row| &mut p.title)
            .generated("title", |p: &mut Row| &mut p.title, placeholder(3).unwrap());
        assert_eq!(spec.len(), 1);
        assert_eq!(
            spec.kind_of("title"),
            Some(FallbackKind::Generated(placeholder(3).unwrap()))
        );
    }

    #[test]
    fn introspection_lists_declared_names() {
        let spec = spec();
        assert_eq!(spec.names().collect::<Vec<_>>(), vec!["title", "author", "state"]);
        assert!(spec.covers("state"));
        assert!(!spec.covers("number"));
        assert_eq!(spec.kind_of("state"), Some(FallbackKind::Null));
        assert_eq!(format!("{:?}", FallbackSpec::<Row>::new()), "{}");
    }
}
