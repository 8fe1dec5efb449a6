//! APIドキュメントページ

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};

const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>linkmon API</title>
<style>
body { font-family: sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; }
code, pre { background: #f4f4f4; padding: 2px 4px; }
table { border-collapse: collapse; width: 100%; }
td, th { border: 1px solid #ccc; padding: 6px; text-align: left; }
</style>
</head>
<body>
<h1>linkmon API</h1>
<p>Every response is <code>{"success": bool, "data": ...}</code>. Failures carry <code>"data": null</code>.</p>
<table>
<tr><th>Method</th><th>Path</th><th>Body</th><th>Description</th></tr>
<tr><td>ANY</td><td><code>/api/ping</code></td><td></td><td>Probe every link with GET and store the result</td></tr>
<tr><td>GET</td><td><code>/api/list</code></td><td></td><td>List links</td></tr>
<tr><td>GET</td><td><code>/api/get/{id}</code></td><td></td><td>Fetch one link</td></tr>
<tr><td>POST</td><td><code>/api/add</code></td><td><code>{"id", "url", "headers"?}</code></td><td>Create a link</td></tr>
<tr><td>PUT</td><td><code>/api/update/{id}</code></td><td><code>{"url"?, "headers"?}</code></td><td>Update url and/or headers</td></tr>
<tr><td>DELETE</td><td><code>/api/delete/{id}</code></td><td></td><td>Delete a link</td></tr>
</table>
<h2>Link</h2>
<pre>{
  "id": "a1",
  "url": "http://example.com",
  "status": false,
  "last_checked": "2024-01-02 03:04:05" | null,
  "headers": {"Authorization": "Bearer ..."}
}</pre>
<p><code>status</code> is true only when the last probe answered HTTP 200.</p>
</body>
</html>
"#;

/// GET / → 302 /docs
pub async fn redirect_to_docs() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/docs")])
}

/// GET /docs
pub async fn docs_page() -> Html<&'static str> {
    Html(DOCS_HTML)
}
