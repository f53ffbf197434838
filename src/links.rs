use regex::{Captures, Regex};

use crate::target::Target;
use crate::ConvertError;

/// Finds every `[text](target)`, images included. Images are told apart by the byte before `[`.
const LINK_PATTERN: &str = r"\[([^\]]*)\]\(([^)]+)\)";

/// Rewrites every local link pointing at a `.md` file so it points at the `.html` file instead.
///
/// Remote urls (`http://`, `https://`) and anchors (`#...`) are left as they are, as is
/// anything preceded by `!` since that is an image. Only the trailing `.md` of the target
/// is touched and the target file is never checked for existence.
///
/// Code spans and code blocks get no special treatment: a link inside one is rewritten
/// like any other.
pub fn rewrite_links(markdown: &str) -> Result<String, ConvertError> {
	let link_finder = Regex::new(LINK_PATTERN)?;

	let rewritten = link_finder.replace_all(markdown, |caps: &Captures| {
		let start = caps.get(0).map_or(0, |m| m.start());
		if markdown[..start].ends_with('!') {
			return caps[0].to_owned();
		}

		let url = &caps[2];
		match Target::classify(url) {
			Target::Remote | Target::Anchor => caps[0].to_owned(),
			Target::DataUri | Target::Local => match url.strip_suffix(".md") {
				Some(stem) => format!("[{}]({}.html)", &caps[1], stem),
				None => caps[0].to_owned(),
			},
		}
	});

	Ok(rewritten.into_owned())
}
