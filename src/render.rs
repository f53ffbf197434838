use comrak::{markdown_to_html, Options};
use regex::{Captures, Regex};

use crate::ConvertError;

/// Finds the opening tag of every anchor pointing at an absolute http(s) url
const EXTERNAL_ANCHOR_PATTERN: &str = r#"<a href="(https?://[^"]*)"([^>]*)>"#;

fn comrak_options() -> Options {
	let mut options = Options::default();

	options.extension.strikethrough = true;
	options.extension.table = true;
	options.extension.autolink = true;
	options.extension.tasklist = true;
	options.extension.footnotes = true;
	options.extension.description_lists = true;
	options.extension.header_ids = Some(String::new());

	// Raw html and every url scheme pass through, otherwise inlined svg images get stripped
	options.render.unsafe_ = true;

	options
}

/// Renders markdown into an html fragment (no doctype, head or body).
///
/// Headings get anchor ids and links to absolute http(s) urls open in a new tab.
pub fn render_markdown(markdown: &str) -> Result<String, ConvertError> {
	let html = markdown_to_html(markdown, &comrak_options());
	open_external_links_in_new_tab(&html)
}

fn open_external_links_in_new_tab(html: &str) -> Result<String, ConvertError> {
	let anchor_finder = Regex::new(EXTERNAL_ANCHOR_PATTERN)?;
	Ok(anchor_finder
		.replace_all(html, |caps: &Captures| {
			// Raw html anchors that already pick a target keep it
			if caps[2].contains("target=") {
				return caps[0].to_owned();
			}
			format!(r#"<a href="{}" target="_blank"{}>"#, &caps[1], &caps[2])
		})
		.into_owned())
}
