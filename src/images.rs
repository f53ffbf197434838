use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{debug, warn};
use regex::{Captures, Regex};

use crate::mime::image_mime_type;
use crate::target::Target;
use crate::ConvertError;

/// Finds all `![alt](path)`
const IMAGE_PATTERN: &str = r"!\[([^\]]*)\]\(([^)]+)\)";

/// Returns `markdown` with every local image inlined as a base64 `data:` uri.
///
/// ## Arguments
/// * `markdown` - The markdown source.
/// * `base_dir` - The folder relative image paths are resolved against, usually the folder the markdown file is in.
///
/// Remote urls and existing `data:` uris are kept as is. An image that cannot be read keeps
/// its original path and a warning is logged; it never fails the conversion.
pub fn embed_images<P: AsRef<Path>>(markdown: &str, base_dir: P) -> Result<String, ConvertError> {
	let base_dir = base_dir.as_ref();
	let image_finder = Regex::new(IMAGE_PATTERN)?;

	let embedded = image_finder.replace_all(markdown, |caps: &Captures| {
		let img_path = &caps[2];
		match Target::classify(img_path) {
			Target::Remote | Target::DataUri => return caps[0].to_owned(),
			Target::Anchor | Target::Local => {}
		}

		let full_path = resolve_path(base_dir, img_path);
		match fs::read(&full_path) {
			Ok(data) => {
				debug!("Inlining {} ({} bytes)", full_path.display(), data.len());
				format!("![{}]({})", &caps[1], data_uri(img_path, &data))
			}
			Err(e) => {
				warn!("Could not read image {}: {}", img_path, e);
				caps[0].to_owned()
			}
		}
	});

	Ok(embedded.into_owned())
}

/// Builds `data:<mime>;base64,<data>`, the mime type taken from `file_name`'s extension.
pub(crate) fn data_uri(file_name: &str, data: &[u8]) -> String {
	format!(
		"data:{};base64,{}",
		image_mime_type(file_name),
		base64::encode(data)
	)
}

/// Joins `relative` onto `base_dir` and folds away `.` and `..` without touching the filesystem.
///
/// A leading `/` (or drive prefix) on `relative` is ignored, the result always starts at
/// `base_dir`. `..` that would climb above the start of a relative path is kept, so images
/// outside the markdown file's folder still resolve.
fn resolve_path(base_dir: &Path, relative: &str) -> PathBuf {
	let mut components: Vec<Component> = Vec::new();
	for component in base_dir.components() {
		push_component(&mut components, component);
	}
	for component in Path::new(relative).components() {
		match component {
			Component::RootDir | Component::Prefix(_) => {}
			c => push_component(&mut components, c),
		}
	}
	if components.is_empty() {
		return PathBuf::from(".");
	}
	components.iter().collect()
}

fn push_component<'a>(components: &mut Vec<Component<'a>>, component: Component<'a>) {
	match component {
		Component::CurDir => {}
		Component::ParentDir => match components.last() {
			Some(Component::Normal(_)) => {
				components.pop();
			}
			Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
			_ => components.push(component),
		},
		c => components.push(c),
	}
}
