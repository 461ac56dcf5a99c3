//! Core library for md2html.
//!
//! This crate turns a markdown file into a styled HTML page whose heading ids
//! match the links of an editor generated table of contents.
//!
//! # Modules
//!
//! - [`anchor`] - Heading text to anchor id normalization
//! - [`rewrite`] - HTML post-processing that injects heading ids
//! - [`template`] - Minimal `{{ name }}` page template rendering
//! - [`assets`] - The bundled default page template
//! - [`remote`] - Client for the remote markdown conversion service
//! - [`pipeline`] - Read, convert, render, rewrite and write a single file

pub mod anchor;
pub mod assets;
mod error;
pub mod pipeline;
pub mod remote;
pub mod rewrite;
pub mod template;

// Re-export commonly used types at crate root
pub use anchor::anchor_id;
pub use error::{Error, Result};
pub use pipeline::{compile_markdown_file, output_path_for, CompileRequest, TemplateSource};
pub use remote::{ConversionClient, ConversionOptions, MarkdownConverter, DEFAULT_API_URL};
pub use rewrite::{link_toc, OMIT_IN_TOC};
pub use template::{render_template, TemplateError};
