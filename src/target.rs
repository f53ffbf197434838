/// How a link or image target is interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Target {
	/// Absolute `http://` or `https://` url
	Remote,
	/// In-document anchor, e.g. `#install`
	Anchor,
	/// Already inlined `data:` uri
	DataUri,
	/// Anything else, resolved against the markdown file's folder
	Local,
}

impl Target {
	/// Classifies `target` by prefix alone.
	pub(crate) fn classify(target: &str) -> Target {
		if target.starts_with("http://") || target.starts_with("https://") {
			Target::Remote
		} else if target.starts_with('#') {
			Target::Anchor
		} else if target.starts_with("data:") {
			Target::DataUri
		} else {
			Target::Local
		}
	}
}
