//! Named highlighter templates
//!
//! A template is a pre-configured highlighter stored under a name. Callers
//! configure it once and then take clones of it, each with its own source.
//!
//! # Example
//!
//! ```rust
//! use geshi_helper::{GeshiHelper, Highlight, LineNumbers};
//!
//! let mut helper = GeshiHelper::default();
//!
//! // Make a template named Jquery and configure it in place
//! helper.template("Jquery", Some("jquery"))
//!     .enable_line_numbers(LineNumbers::Fancy(2));
//! helper.template("Jquery", None)
//!     .set_footer_content("Jquery example");
//!
//! // Clone it with new source
//! let sample = helper.make_from("Jquery", "var main = $('#main');", None);
//! assert!(sample.parse_code().contains("Jquery example"));
//! ```

mod dispatch;
mod registry;

pub use dispatch::{DispatchError, Operation, Outcome};
pub use registry::TemplateRegistry;
