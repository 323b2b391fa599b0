//! HTML index of the registered API routes, served at `/`.

use utoipa::openapi::{path::PathItem, OpenApi};

/// Renders the sitemap page for every path in the OpenAPI document.
///
/// GET routes without path parameters are rendered as links, every other route is listed
/// with its method.
pub fn render(api: &OpenApi) -> String {
    let mut items = String::new();

    for (path, item) in api.paths.paths.iter() {
        for method in methods(item) {
            if method == "GET" && !path.contains('{') {
                items.push_str(&format!(
                    "<li><code>{method}</code> <a href=\"{path}\">{path}</a></li>"
                ));
            } else {
                items.push_str(&format!("<li><code>{method}</code> {path}</li>"));
            }
        }
    }

    format!(
        "<!DOCTYPE html>\
        <html><head><meta charset=\"utf-8\"><title>Multiverse API</title></head>\
        <body style=\"font-family: sans-serif; text-align: center;\">\
        <h1>Multiverse API</h1>\
        <p>API docs: <a href=\"/docs\">/docs</a></p>\
        <ul style=\"list-style: none; padding: 0;\">{items}</ul>\
        </body></html>"
    )
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}
