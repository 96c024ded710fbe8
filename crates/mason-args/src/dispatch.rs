//! The single parsing pass that matches argument tokens to flags.
//!
//! # Scan contract
//!
//! `args` is the full process argument vector: index 0 is the program name
//! and is always skipped. The scan normally starts after the required
//! positional arguments, at `required_positionals + 1`. If the token in the
//! first positional slot already carries the flag marker, the caller supplied
//! flags instead of positionals (`prog --help`); every positional slot is
//! then treated as absent and the scan starts at index 1.
//!
//! For each token carrying the flag marker, all leading hyphens are stripped
//! and the bare name is looked up in the registry:
//!
//! | outcome   | behavior                                                    |
//! |-----------|-------------------------------------------------------------|
//! | miss      | a notice is written to the sink, the scan continues         |
//! | hit       | the next token is consumed as the value iff it exists and   |
//! |           | does not itself start with `-`; the callback fires inline   |
//!
//! Callbacks run in encounter order, left to right — not registration order.
//! The pass is single-shot: dispatch takes the registry by value and drops it
//! when the scan ends.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::registry::FlagRegistry;

impl FlagRegistry<'_> {
    /// Run one dispatch pass over `args`, writing "not found" notices to
    /// stdout.
    ///
    /// Consumes the registry; it cannot be used again afterwards. Write
    /// errors on stdout are ignored — the notice is advisory output, not a
    /// parse result.
    pub fn dispatch<S: AsRef<str>>(self, args: &[S], required_positionals: usize) {
        let _ = self.dispatch_to(args, required_positionals, &mut io::stdout());
    }

    /// Like [`dispatch`](Self::dispatch), but "not found" notices go to
    /// `sink` so embedders and tests can capture them.
    pub fn dispatch_to<S: AsRef<str>>(
        mut self,
        args: &[S],
        required_positionals: usize,
        sink: &mut dyn Write,
    ) -> io::Result<()> {
        let mut index = required_positionals + 1;

        // Flags-only invocation: a flag marker in the first positional slot
        // means no positionals were supplied; scan everything after argv[0].
        if args.get(1).is_some_and(|token| token.as_ref().starts_with('-')) {
            index = 1;
        }

        debug!(
            args = args.len(),
            required_positionals,
            start = index,
            "dispatch pass started"
        );

        while index < args.len() {
            let token = args[index].as_ref();
            index += 1;

            if !token.starts_with('-') {
                trace!(token, "skipping non-flag token");
                continue;
            }

            let name = token.trim_start_matches('-');
            let Some(position) = self.flags.iter().position(|flag| flag.matches(name)) else {
                debug!(token = name, "no registered flag matches token");
                writeln!(sink, "Couldn't find: {name}")?;
                continue;
            };

            // A value is only ever the strictly adjacent, non-flag token.
            let value = match args.get(index) {
                Some(next) if !next.as_ref().starts_with('-') => {
                    index += 1;
                    Some(next.as_ref())
                }
                _ => None,
            };

            trace!(flag = self.flags[position].name(), value, "invoking callback");
            self.flags[position].invoke(value);
        }

        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
