//! Turns a markdown file into one self-contained html page.
//!
//! Links to other `.md` files are pointed at their `.html` counterparts, local images are
//! inlined as base64 `data:` uris, and the rendered markdown is wrapped in a styled page that
//! pulls a Google Font.

mod images;
mod links;
mod mime;
mod render;
mod target;
mod template;


use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use log::info;
use thiserror::Error;

pub use images::embed_images;
pub use links::rewrite_links;
pub use mime::image_mime_type;
pub use render::render_markdown;
pub use template::assemble_document;

/// Everything that can abort a conversion. Unreadable images are not in here, those are only warned about.
#[derive(Debug, Error)]
pub enum ConvertError {
	/// The input path does not end in `.md`
	#[error("Input file must have .md extension")]
	NotMarkdown(String),
	/// A std::io::ErrorKind::NotFound error with the offending path in the string parameter
	#[error("failed to read input file: File not found: {0}: {1}")]
	InvalidPath(String, #[source] std::io::Error),
	/// Any other file read error that is not NotFound
	#[error("failed to read input file {0}: {1}")]
	FileReadError(String, #[source] std::io::Error),
	/// The html could not be written
	#[error("failed to write output file {0}: {1}")]
	FileWriteError(String, #[source] std::io::Error),
	/// One of the built-in patterns failed to compile
	#[error("failed to prepare markdown rewriting: {0}")]
	Pattern(#[from] regex::Error),
}

impl ConvertError {
	fn from_elem(e: std::io::Error, elem: &str) -> Self {
		match e.kind() {
			IoErrorKind::NotFound => ConvertError::InvalidPath(elem.to_owned(), e),
			_ => ConvertError::FileReadError(elem.to_owned(), e),
		}
	}
}

/// Config struct that is passed to `convert_file()` and `convert_markdown_string()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Google Font family used for the body text, e.g. `Open Sans` or `Roboto Slab`.
	pub font_family: String,
	/// Content of the `<title>` element. May be empty.
	pub title: String,
}

impl Default for Config {
	/// `Open Sans` with an empty title
	fn default() -> Config {
		Config {
			font_family: "Open Sans".to_owned(),
			title: String::new(),
		}
	}
}

/// Returns where the html for `input` goes: the trailing `.md` replaced by `.html`.
pub fn output_path_for(input: &str) -> Result<String, ConvertError> {
	match input.strip_suffix(".md") {
		Some(stem) => Ok(format!("{}.html", stem)),
		None => Err(ConvertError::NotMarkdown(input.to_owned())),
	}
}

/// Returns a `Result<String, ConvertError>` with the full html page for the markdown string.
///
/// ## Arguments
/// * `markdown` - The markdown source.
/// * `base_dir` - The root all relative image paths are evaluated with, usually the folder the markdown file is in.
/// * `config` - Font and title of the page. Use `Default::default()` for `Open Sans` and no title.
pub fn convert_markdown_string<P: AsRef<Path>>(
	markdown: &str,
	base_dir: P,
	config: &Config,
) -> Result<String, ConvertError> {
	let linked = rewrite_links(markdown)?;
	let embedded = embed_images(&linked, base_dir)?;
	let body = render_markdown(&embedded)?;
	Ok(assemble_document(&body, config))
}

/// Converts the markdown file at `input` and writes the page next to it, returning the output path.
///
/// Nothing is read or written unless `input` ends in `.md`. The output is written once, after
/// everything else succeeded.
pub fn convert_file(input: &str, config: &Config) -> Result<String, ConvertError> {
	let output = output_path_for(input)?;

	let markdown = fs::read_to_string(input).map_err(|e| ConvertError::from_elem(e, input))?;
	let base_dir = Path::new(input).parent().unwrap_or_else(|| Path::new("."));
	info!("Converting {} (images relative to {:?})", input, base_dir);

	let html = convert_markdown_string(&markdown, base_dir, config)?;

	fs::write(&output, html).map_err(|e| ConvertError::FileWriteError(output.clone(), e))?;
	info!("Wrote {}", output);
	Ok(output)
}
