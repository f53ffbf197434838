use crate::Config;

/// Google Fonts stylesheet url for `font_family`, spaces turned into `+`.
pub(crate) fn google_fonts_url(font_family: &str) -> String {
	format!(
		"https://fonts.googleapis.com/css2?family={}:wght@300;400;600;700&display=swap",
		font_family.replace(' ', "+")
	)
}

/// Wraps an html fragment into a complete standalone page.
///
/// The title and font family are substituted as given, nothing is escaped.
pub fn assemble_document(body: &str, config: &Config) -> String {
	format!(
		r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="{font_url}" rel="stylesheet">
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        
        body {{
            font-family: '{font}', sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
            background-color: #f9f9f9;
        }}
        
        h1, h2, h3, h4, h5, h6 {{
            margin-top: 1.5rem;
            margin-bottom: 1rem;
            font-weight: 600;
            line-height: 1.3;
        }}
        
        h1 {{ font-size: 2.5rem; border-bottom: 2px solid #e0e0e0; padding-bottom: 0.5rem; }}
        h2 {{ font-size: 2rem; border-bottom: 1px solid #e0e0e0; padding-bottom: 0.3rem; }}
        h3 {{ font-size: 1.5rem; }}
        h4 {{ font-size: 1.25rem; }}
        h5 {{ font-size: 1.1rem; }}
        h6 {{ font-size: 1rem; }}
        
        p {{
            margin-bottom: 1rem;
        }}
        
        a {{
            color: #0066cc;
            text-decoration: none;
        }}
        
        a:hover {{
            text-decoration: underline;
        }}
        
        img {{
            max-width: 100%;
            height: auto;
            display: block;
            margin: 1.5rem auto;
            border-radius: 4px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }}
        
        code {{
            background-color: #f4f4f4;
            padding: 0.2rem 0.4rem;
            border-radius: 3px;
            font-family: 'Courier New', monospace;
            font-size: 0.9em;
        }}
        
        pre {{
            background-color: #f4f4f4;
            padding: 1rem;
            border-radius: 4px;
            overflow-x: auto;
            margin-bottom: 1rem;
        }}
        
        pre code {{
            background-color: transparent;
            padding: 0;
        }}
        
        blockquote {{
            border-left: 4px solid #0066cc;
            padding-left: 1rem;
            margin: 1rem 0;
            color: #666;
            font-style: italic;
        }}
        
        ul, ol {{
            margin-bottom: 1rem;
            padding-left: 2rem;
        }}
        
        li {{
            margin-bottom: 0.5rem;
        }}
        
        table {{
            border-collapse: collapse;
            width: 100%;
            margin-bottom: 1rem;
        }}
        
        th, td {{
            border: 1px solid #ddd;
            padding: 0.75rem;
            text-align: left;
        }}
        
        th {{
            background-color: #f4f4f4;
            font-weight: 600;
        }}
        
        hr {{
            border: none;
            border-top: 2px solid #e0e0e0;
            margin: 2rem 0;
        }}
    </style>
</head>
<body>
{body}
</body>
</html>"#,
		title = config.title,
		font_url = google_fonts_url(&config.font_family),
		font = config.font_family,
		body = body,
	)
}
