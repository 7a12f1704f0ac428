#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod boilerplate;
pub mod cli;
pub mod config;
pub mod content;
pub mod convert;
pub mod error;
pub mod fetch;
pub mod filename;
pub mod links;
pub mod placeholder;
pub mod render;
pub mod table;

pub use config::{ConvertOptions, LinkOptions};
pub use convert::Converter;
pub use error::{Error, ErrorKind, Result};
pub use fetch::{FetchedPage, Fetcher};
pub use filename::derive_filename;
pub use links::{LinkExtractor, extract_links};
pub use render::{MarkdownRenderer, Render};
pub use table::table_to_markdown;
