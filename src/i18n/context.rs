use crate::i18n::Locale;

/// Source of the locale active for the current request or render.
///
/// Any `Fn() -> Locale` closure is a context, which is the usual way to
/// bridge into an application's own request state.
pub trait LocaleContext: Send + Sync {
    fn current_locale(&self) -> Locale;
}

/// A context that always reports the same locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(pub Locale);

impl FixedLocale {
    pub fn new(locale: impl Into<Locale>) -> Self {
        FixedLocale(locale.into())
    }
}

impl LocaleContext for FixedLocale {
    fn current_locale(&self) -> Locale {
        self.0.clone()
    }
}

impl<F> LocaleContext for F
where
    F: Fn() -> Locale + Send + Sync,
{
    fn current_locale(&self) -> Locale {
        self()
    }
}
