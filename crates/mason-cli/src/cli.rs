//! Argument definitions and the parse pass.
//!
//! This module is the *only* place that knows about flag names, short forms,
//! and help text. It wires the flag registry from `mason-args` to a shared
//! [`CliOptions`] record: every callback captures a clone of one
//! `Rc<RefCell<CliOptions>>`, and a single dispatch pass fills it in. No
//! business logic lives here.

use std::cell::RefCell;
use std::rc::Rc;

use mason_args::FlagRegistry;

/// Usage text, printed for `--help` and for malformed invocations.
pub const USAGE: &str = "Usage:\n\
    \tmason <project_name> [flags]\n\n\
    Flags:\n\
    \t-h, --help\t\t: Outputs this message.\n\
    \t-n, --name\t\t: Sets the project binary's name.\n\
    \t-d, --description\t: Sets the project's description.\n\
    \t-v, --version\t\t: Sets the project version.\n\
    \t-s, --shared\t\t: Makes the project a shared library.\n\
    \t-t, --template\t\t: Copies the template. Without a value it lists the available templates.\n";

/// The project name is the one required positional argument.
pub const REQUIRED_POSITIONALS: usize = 1;

/// Everything the flags can set, collected by one dispatch pass.
///
/// The project name itself is positional and therefore not part of this
/// record; see [`project_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub help: bool,
    pub binary_name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub shared: bool,
    /// `--template` appeared, with or without a value.
    pub template_requested: bool,
    pub template: Option<String>,
}

/// Build the flag registry over a shared options record and run one dispatch
/// pass over `args` (the full argument vector, program name included).
///
/// Unknown flags are reported on stdout by the dispatcher and do not abort
/// parsing.
pub fn parse<S: AsRef<str>>(args: &[S]) -> CliOptions {
    let options = Rc::new(RefCell::new(CliOptions::default()));
    let mut registry = FlagRegistry::new();

    let opts = Rc::clone(&options);
    registry.add_flag("help", move |_| opts.borrow_mut().help = true);

    let opts = Rc::clone(&options);
    registry.add_flag("name", move |value| {
        if let Some(v) = value {
            opts.borrow_mut().binary_name = Some(v.to_owned());
        }
    });

    let opts = Rc::clone(&options);
    registry.add_flag("description", move |value| {
        if let Some(v) = value {
            opts.borrow_mut().description = Some(v.to_owned());
        }
    });

    let opts = Rc::clone(&options);
    registry.add_flag("version", move |value| {
        if let Some(v) = value {
            opts.borrow_mut().version = Some(v.to_owned());
        }
    });

    let opts = Rc::clone(&options);
    registry.add_flag("shared", move |_| opts.borrow_mut().shared = true);

    let opts = Rc::clone(&options);
    registry.add_flag("template", move |value| {
        let mut opts = opts.borrow_mut();
        opts.template_requested = true;
        opts.template = value.map(str::to_owned);
    });

    registry.dispatch(args, REQUIRED_POSITIONALS);

    // Dispatch consumed the registry and with it every callback clone, so
    // this unwrap of the Rc cannot fail in practice.
    Rc::try_unwrap(options)
        .map(RefCell::into_inner)
        .unwrap_or_default()
}

/// The positional project name, if one was supplied.
pub fn project_name<S: AsRef<str>>(args: &[S]) -> Option<&str> {
    args.get(1)
        .map(AsRef::as_ref)
        .filter(|token| !token.starts_with('-'))
}

// ── tests ─────────────────────────────────────────────────────────────────────
