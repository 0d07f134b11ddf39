use crate::models::escape_html;

pub const PAGE_TITLE: &str = "Release History";

/// Wrap a rendered fragment in the standalone page shell.
pub fn render_page(title: &str, fragment: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - The Go Programming Language</title>
</head>
<body>
<main id="page">
<h1>{title}</h1>

<p>
This page summarizes the changes between official stable releases of Go.
The <a href="https://github.com/golang/go/commits/master">change log</a> has the full details.
</p>

<p>To update to a specific release, use:</p>

<pre>
git fetch --tags
git checkout <i>goX.Y.Z</i>
</pre>

{fragment}</main>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_fragment_and_escapes_title() {
        let page = render_page("Tom & Jerry", "<h2 id=\"go1\">go1</h2>\n");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Tom &amp; Jerry - The Go Programming Language</title>"));
        assert!(page.contains("<h2 id=\"go1\">go1</h2>\n</main>"));
    }
}
