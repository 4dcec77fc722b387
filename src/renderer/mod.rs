//! HTML renderer for classified source
//!
//! This module takes classified fragments and produces GeSHi-style HTML:
//! a `<pre>` (or `<div>`) named after the language, optionally holding an
//! `<ol>` of numbered lines.

pub mod config;
pub mod html;

pub use config::{HeaderType, LineNumbers, RenderOptions};
pub use html::{escape_html, render_html, RenderContext};
