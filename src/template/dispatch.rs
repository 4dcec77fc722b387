//! Operation dispatch by name
//!
//! Template code often builds operation names as strings: `"makeJquery"`
//! means "clone the `Jquery` template with this source". [`Operation::resolve`]
//! turns such a name into an operation. Literal operation names always win,
//! so `"make"` is the plain constructor and never a clone of a template with
//! an empty name.

use thiserror::Error;

use super::TemplateRegistry;
use crate::highlighter::Highlight;

/// Prefix that turns an unknown operation name into a template clone
const MAKE_PREFIX: &str = "make";

/// Errors raised when calling an operation by name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("call to undefined operation {name}()")]
    NoSuchOperation { name: String },

    #[error("{operation}() takes at most {max} arguments, {given} given")]
    TooManyArguments {
        operation: String,
        max: usize,
        given: usize,
    },

    #[error("{operation}() is missing required argument `{argument}`")]
    MissingArgument {
        operation: String,
        argument: &'static str,
    },
}

/// An operation resolved from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    /// `make(source?, language?)`
    Make,
    /// `parse(source, language?)`
    Parse,
    /// `template(name, language?)`
    Template,
    /// `templates(name?)`
    Templates,
    /// `makeNamed(name, source?, language?)`, also spelled `makeFrom`
    MakeNamed,
    /// `make<Name>(source?, language?)`: clone of the named template
    MakeTemplate(&'a str),
}

impl<'a> Operation<'a> {
    /// Resolve an operation name.
    ///
    /// Literal names take precedence; any other name made of the `make`
    /// prefix and a non-empty suffix clones the template named by the
    /// suffix.
    pub fn resolve(name: &'a str) -> Result<Self, DispatchError> {
        let operation = match name {
            "make" => Operation::Make,
            "parse" => Operation::Parse,
            "template" => Operation::Template,
            "templates" => Operation::Templates,
            "makeNamed" | "makeFrom" => Operation::MakeNamed,
            _ => match name.strip_prefix(MAKE_PREFIX) {
                Some(template) if !template.is_empty() => Operation::MakeTemplate(template),
                _ => {
                    return Err(DispatchError::NoSuchOperation {
                        name: name.to_string(),
                    })
                }
            },
        };
        Ok(operation)
    }

    /// Parameter names, with the number that are required
    fn signature(self) -> (&'static [&'static str], usize) {
        match self {
            Operation::Make => (&["source", "language"], 0),
            Operation::Parse => (&["source", "language"], 1),
            Operation::Template => (&["name", "language"], 1),
            Operation::Templates => (&["name"], 0),
            Operation::MakeNamed => (&["name", "source", "language"], 1),
            Operation::MakeTemplate(_) => (&["source", "language"], 0),
        }
    }

    /// Check `args` against this operation's signature
    fn check_arity(self, name: &str, args: &[&str]) -> Result<(), DispatchError> {
        let (params, required) = self.signature();
        if args.len() > params.len() {
            return Err(DispatchError::TooManyArguments {
                operation: name.to_string(),
                max: params.len(),
                given: args.len(),
            });
        }
        if args.len() < required {
            return Err(DispatchError::MissingArgument {
                operation: name.to_string(),
                argument: params[args.len()],
            });
        }
        Ok(())
    }
}

/// Result of an operation called by name
#[derive(Debug)]
pub enum Outcome<'r, H> {
    /// A new highlighter owned by the caller
    Highlighter(H),
    /// Rendered output
    Output(String),
    /// The registry-owned template
    Template(&'r mut H),
    /// Registered template names
    Names(Vec<&'r str>),
    /// Whether a template exists
    Exists(bool),
}

impl<H: Highlight> TemplateRegistry<H> {
    /// Call an operation by name with positional string arguments
    pub fn call(&mut self, name: &str, args: &[&str]) -> Result<Outcome<'_, H>, DispatchError> {
        let operation = Operation::resolve(name)?;
        operation.check_arity(name, args)?;

        let arg = |index: usize| args.get(index).copied();
        let outcome = match operation {
            Operation::Make => Outcome::Highlighter(self.make(arg(0).unwrap_or(""), arg(1))),
            Operation::Parse => Outcome::Output(self.parse(args[0], arg(1))),
            Operation::Template => Outcome::Template(self.template(args[0], arg(1))),
            Operation::Templates => match arg(0) {
                Some(template) => Outcome::Exists(self.has_template(template)),
                None => Outcome::Names(self.templates()),
            },
            Operation::MakeNamed => {
                Outcome::Highlighter(self.make_named(args[0], arg(1), arg(2)))
            }
            Operation::MakeTemplate(template) => {
                Outcome::Highlighter(self.make_named(template, arg(0), arg(1)))
            }
        };
        Ok(outcome)
    }
}
