use std::path::Path;

/// Mime type used when the extension is missing or not in the table.
pub(crate) const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Returns the image mime type for `path` based on its extension, compared case-insensitively.
///
/// Unknown or missing extensions fall back to `image/png`.
pub fn image_mime_type<P: AsRef<Path>>(path: P) -> &'static str {
	let ext = match path.as_ref().extension() {
		Some(ext) => ext.to_string_lossy().to_lowercase(),
		None => return DEFAULT_IMAGE_MIME,
	};
	match ext.as_str() {
		"jpg" | "jpeg" => "image/jpeg",
		"png" => "image/png",
		"gif" => "image/gif",
		"bmp" => "image/bmp",
		"webp" => "image/webp",
		"svg" => "image/svg+xml",
		"ico" => "image/x-icon",
		_ => DEFAULT_IMAGE_MIME,
	}
}
