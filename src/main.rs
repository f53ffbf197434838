use std::process;

use clap::Parser;
use log::debug;
use md2html::{convert_file, Config};

const USAGE: &str = "\
Usage: md2html [--font <font-name>] [--title <title>] <input.md>
Example: md2html file.md
Example: md2html --font 'Roboto' file.md
Example: md2html --title 'My Document' file.md";

/// Convert a markdown file into a self-contained html page
#[derive(Parser, Debug)]
#[command(name = "md2html", version, about)]
struct Cli {
	/// Google Font family to use
	#[arg(long, value_name = "FONT", default_value = "Open Sans")]
	font: String,

	/// HTML document title (empty by default)
	#[arg(long, value_name = "TITLE", default_value = "")]
	title: String,

	/// Markdown file to convert, must end in .md
	input: Option<String>,
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let cli = Cli::parse();
	debug!("{:?}", cli);

	let input = match cli.input {
		Some(input) => input,
		None => {
			println!("{}", USAGE);
			process::exit(1);
		}
	};

	let config = Config {
		font_family: cli.font,
		title: cli.title,
	};

	match convert_file(&input, &config) {
		Ok(output) => println!("Successfully converted {} to {}", input, output),
		Err(e) => {
			eprintln!("Error: {}", e);
			process::exit(1);
		}
	}
}
