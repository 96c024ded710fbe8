//! Flag descriptors and the registry that owns them.
//!
//! # Design
//!
//! The registry is an insertion-ordered `Vec` of descriptors. Lookup is a
//! linear scan with exact matching on either the canonical name or the short
//! form — no prefix or fuzzy matching. Registration order matters only for
//! duplicate resolution: the first registration wins and later ones are
//! shadowed (a warning is logged when that happens).

use std::fmt;

use tracing::warn;

// ── Flag ──────────────────────────────────────────────────────────────────────

/// A registered flag: canonical long name, short form, and the callback to
/// invoke when either token matches.
///
/// Names are stored without leading hyphens; the dispatcher strips them from
/// incoming tokens before lookup.
pub struct Flag<'a> {
    name: String,
    short_form: String,
    callback: Box<dyn FnMut(Option<&str>) + 'a>,
}

impl Flag<'_> {
    /// Canonical long form, e.g. `"template"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short form, e.g. `"t"`. Derived from the name unless supplied
    /// explicitly at registration.
    pub fn short_form(&self) -> &str {
        &self.short_form
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.name == token || self.short_form == token
    }

    pub(crate) fn invoke(&mut self, value: Option<&str>) {
        (self.callback)(value);
    }
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("short_form", &self.short_form)
            .finish_non_exhaustive()
    }
}

// ── FlagHandle ────────────────────────────────────────────────────────────────

/// Opaque handle to a registered flag, returned by the `add_flag` methods.
///
/// Callers that only care about the side effects of registration can ignore
/// it; it exists for introspection via [`FlagRegistry::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagHandle(pub(crate) usize);

// ── FlagRegistry ──────────────────────────────────────────────────────────────

/// Ordered collection of [`Flag`] descriptors.
///
/// Built once, used for exactly one
/// [`dispatch`](crate::dispatch) pass, and consumed by it.
#[derive(Debug, Default)]
pub struct FlagRegistry<'a> {
    pub(crate) flags: Vec<Flag<'a>>,
}

impl<'a> FlagRegistry<'a> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { flags: Vec::new() }
    }

    /// Register a flag whose short form is derived from `name` (see
    /// [`derive_short_form`]).
    ///
    /// `name` is the canonical long form without leading hyphens. The
    /// callback receives `Some(value)` when a non-flag token immediately
    /// follows the flag on the command line, `None` otherwise.
    pub fn add_flag<F>(&mut self, name: &str, callback: F) -> FlagHandle
    where
        F: FnMut(Option<&str>) + 'a,
    {
        let short_form = derive_short_form(name);
        self.insert(name.to_owned(), short_form, Box::new(callback))
    }

    /// Register a flag with an explicit short form instead of a derived one.
    pub fn add_flag_with_short<F>(&mut self, name: &str, short_form: &str, callback: F) -> FlagHandle
    where
        F: FnMut(Option<&str>) + 'a,
    {
        self.insert(name.to_owned(), short_form.to_owned(), Box::new(callback))
    }

    fn insert(
        &mut self,
        name: String,
        short_form: String,
        callback: Box<dyn FnMut(Option<&str>) + 'a>,
    ) -> FlagHandle {
        // Duplicates are accepted and the earlier registration keeps winning
        // on lookup; surface the shadowing instead of silently accepting it.
        if let Some(existing) = self.find(&name).or_else(|| self.find(&short_form)) {
            warn!(
                name = %name,
                short_form = %short_form,
                shadowed_by = %existing.name(),
                "duplicate flag registration; the earlier flag wins on lookup"
            );
        }

        self.flags.push(Flag {
            name,
            short_form,
            callback,
        });
        FlagHandle(self.flags.len() - 1)
    }

    /// Find the first flag whose name or short form equals `token` exactly.
    ///
    /// Case-sensitive, O(number of registered flags).
    pub fn find(&self, token: &str) -> Option<&Flag<'a>> {
        self.flags.iter().find(|flag| flag.matches(token))
    }

    /// Look up a flag by the handle returned at registration.
    pub fn get(&self, handle: FlagHandle) -> Option<&Flag<'a>> {
        self.flags.get(handle.0)
    }

    /// Number of registered flags, duplicates included.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

// ── Short-form derivation ─────────────────────────────────────────────────────

/// Derive the short form of a flag name: its first character followed by the
/// character after each internal hyphen.
///
/// | name        | short form |
/// |-------------|------------|
/// | `a`         | `a`        |
/// | `log-level` | `ll`       |
/// | `no-color`  | `nc`       |
/// | `a-b-c`     | `abc`      |
pub fn derive_short_form(name: &str) -> String {
    let mut short = String::new();
    let mut chars = name.chars().peekable();

    if let Some(&first) = chars.peek() {
        short.push(first);
    }
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&after) = chars.peek() {
                short.push(after);
            }
        }
    }

    short
}

// ── tests ─────────────────────────────────────────────────────────────────────
