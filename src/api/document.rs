//! Minimal Atlassian Document Format support for worklog comments.
//!
//! API v3 sends and returns comments as ADF trees. Comments written by jlog
//! are a single paragraph; comments read back are flattened to plain text,
//! one line per block.

use serde_json::{json, Value};

pub fn paragraph(text: &str) -> Value {
    json!({
        "type": "doc",
        "version": 1,
        "content": [
            {
                "type": "paragraph",
                "content": [
                    {
                        "type": "text",
                        "text": text,
                    }
                ],
            }
        ],
    })
}

pub fn plain_text(document: &Value) -> String {
    let blocks = match document.get("content").and_then(Value::as_array) {
        Some(blocks) => blocks,
        None => return document.as_str().unwrap_or_default().to_string(),
    };

    blocks
        .iter()
        .map(|block| {
            let mut line = String::new();
            collect_text(block, &mut line);
            line
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(node: &Value, out: &mut String) {
    if let Some(text) = node.get("text").and_then(Value::as_str) {
        out.push_str(text);
    }
    if let Some(children) = node.get("content").and_then(Value::as_array) {
        for child in children {
            collect_text(child, out);
        }
    }
}
