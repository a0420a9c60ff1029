//! HTML content for the tutorialweb pages.
//!
//! Exports the canned hello body (`HELLO_PAGE`) and the `home_page`
//! renderer. Keep HTML blobs here to avoid runtime template
//! dependencies.
//!
/// Body served by the `hello` view
pub const HELLO_PAGE: &str = "<body><h1>Hello World!</h1></body>";

/// Render the home page for the given site title and view name
pub fn home_page(site: &str, name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{site}</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
    <h1>Hi {name}</h1>
    <p>Welcome to {site}. Try <a href="/hello">/hello</a>.</p>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_greets_the_view() {
        let body = home_page("tutorialweb", "Home View");
        assert!(body.contains("Hi Home View"));
        assert!(body.contains("/static/app.css"));
    }

    #[test]
    fn home_page_uses_site_title() {
        let body = home_page("mysite", "Home View");
        assert!(body.contains("<title>mysite</title>"));
    }
}
