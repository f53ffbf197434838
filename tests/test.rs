use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn md2html() -> Command {
	Command::cargo_bin("md2html").unwrap()
}

#[test]
fn no_arguments_prints_usage() {
	md2html()
		.assert()
		.code(1)
		.stdout(predicate::str::contains(
			"Usage: md2html [--font <font-name>] [--title <title>] <input.md>",
		))
		.stdout(predicate::str::contains("Example: md2html --font 'Roboto' file.md"));
}

#[test]
fn wrong_extension_fails_without_output() {
	let dir = TempDir::new().unwrap();
	let input = dir.path().join("readme.txt");
	fs::write(&input, "# Readme").unwrap();

	md2html()
		.arg(&input)
		.assert()
		.code(1)
		.stderr(predicate::str::contains(
			"Error: Input file must have .md extension",
		));
	assert!(!dir.path().join("readme.html").exists());
	assert!(!dir.path().join("readme.txt.html").exists());
}

#[test]
fn missing_input_file() {
	let dir = TempDir::new().unwrap();
	md2html()
		.arg(dir.path().join("nothing.md"))
		.assert()
		.code(1)
		.stderr(predicate::str::contains("Error: failed to read input file"));
	assert!(!dir.path().join("nothing.html").exists());
}

#[test]
fn converts_with_font_and_title() {
	let dir = TempDir::new().unwrap();
	fs::write(
		dir.path().join("guide.md"),
		"# Guide\n\nNext: [Setup](./setup.md)\n\n![Icon](icon.svg)\n",
	)
	.unwrap();
	fs::write(dir.path().join("icon.svg"), "<svg/>").unwrap();

	md2html()
		.current_dir(dir.path())
		.args(&["--font", "Roboto Mono", "--title", "My Guide", "guide.md"])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"Successfully converted guide.md to guide.html",
		));

	let html = fs::read_to_string(dir.path().join("guide.html")).unwrap();
	assert!(html.contains("<title>My Guide</title>"));
	assert!(html.contains("family=Roboto+Mono:wght@300;400;600;700&display=swap"));
	assert!(html.contains("font-family: 'Roboto Mono', sans-serif;"));
	assert!(html.contains(r#"<a href="./setup.html">Setup</a>"#));
	assert!(html.contains(r#"src="data:image/svg+xml;base64,PHN2Zy8+""#));
}

#[test]
fn missing_image_warns_and_still_succeeds() {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("doc.md"), "![Gone](img/gone.png)\n").unwrap();

	md2html()
		.current_dir(dir.path())
		.arg("doc.md")
		.assert()
		.success()
		.stderr(predicate::str::contains("Could not read image img/gone.png"));

	let html = fs::read_to_string(dir.path().join("doc.html")).unwrap();
	assert!(html.contains(r#"src="img/gone.png""#));
}

#[test]
fn images_resolve_against_the_input_folder() {
	let dir = TempDir::new().unwrap();
	fs::create_dir_all(dir.path().join("docs/assets")).unwrap();
	fs::write(dir.path().join("docs/page.md"), "![Pic](assets/pic.gif)\n").unwrap();
	fs::write(dir.path().join("docs/assets/pic.gif"), b"GIF89a").unwrap();

	md2html()
		.current_dir(dir.path())
		.arg("docs/page.md")
		.assert()
		.success();

	let html = fs::read_to_string(dir.path().join("docs/page.html")).unwrap();
	assert!(html.contains(r#"src="data:image/gif;base64,R0lGODlh""#));
}

#[test]
fn repeated_runs_are_identical() {
	let dir = TempDir::new().unwrap();
	fs::write(
		dir.path().join("same.md"),
		"# Same\n\n| a | b |\n|---|---|\n| [x](x.md) | `y` |\n",
	)
	.unwrap();

	md2html().current_dir(dir.path()).arg("same.md").assert().success();
	let first = fs::read(dir.path().join("same.html")).unwrap();
	md2html().current_dir(dir.path()).arg("same.md").assert().success();
	let second = fs::read(dir.path().join("same.html")).unwrap();
	assert_eq!(first, second);
}
