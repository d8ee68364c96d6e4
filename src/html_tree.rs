/*!
 * HTML-tree-aware translation.
 *
 * Walks a parsed document tree and replaces only leaf text nodes with
 * translated text, leaving the markup untouched. The traversal is
 * parameterized by a skip predicate so non-content subtrees (script and
 * style by default) are left verbatim at any nesting depth.
 *
 * The walk is split into a synchronous collection pass that gathers text
 * node handles in document order, followed by one gateway call per node
 * with in-place replacement. A failing node aborts the request; siblings
 * translated before the failure keep their translated content.
 */

use html5ever::parse_document;
use html5ever::serialize::{SerializeOpts, serialize};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::errors::TranslateError;
use crate::gateway::TranslationGateway;

/// Default skip predicate: script and style subtrees are not content
pub fn default_skip(tag_name: &str) -> bool {
    matches!(tag_name, "script" | "style")
}

/// Parse raw bytes into a document tree.
///
/// Parsing is lenient the way browsers are; the only client failure at
/// this level is input that is not valid UTF-8.
pub fn parse_html(data: &[u8]) -> Result<RcDom, TranslateError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| TranslateError::MalformedMarkup(e.to_string()))?;

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut text.as_bytes())
        .map_err(|e| TranslateError::MalformedMarkup(e.to_string()))
}

/// Serialize a document tree back to HTML
pub fn serialize_html(dom: &RcDom) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let serializable: SerializableHandle = dom.document.clone().into();
    serialize(&mut buf, &serializable, SerializeOpts::default())
        .expect("Unable to serialize DOM into buffer");

    String::from_utf8_lossy(&buf).to_string()
}

/// Collect the leaf text nodes under `root` in document order.
///
/// Only children of elements are collected: a bare text node passed as
/// the root is not a child of anything and yields nothing. Subtrees whose
/// element tag satisfies `should_skip` are not descended into.
pub fn collect_text_nodes(root: &Handle, should_skip: &dyn Fn(&str) -> bool) -> Vec<Handle> {
    let mut nodes = Vec::new();
    collect_into(root, should_skip, &mut nodes);
    nodes
}

fn collect_into(node: &Handle, should_skip: &dyn Fn(&str) -> bool, out: &mut Vec<Handle>) {
    match node.data {
        NodeData::Text { .. } => return,
        NodeData::Element { ref name, .. } if should_skip(name.local.as_ref()) => return,
        _ => {}
    }

    for child in node.children.borrow().iter() {
        match child.data {
            NodeData::Text { .. } => out.push(child.clone()),
            _ => collect_into(child, should_skip, out),
        }
    }
}

/// Translate every content text node under `root` in place.
///
/// One gateway call per text node, in document order.
pub async fn translate_tree(
    root: &Handle,
    gateway: &TranslationGateway,
    model_id: &str,
    src: &str,
    tgt: &str,
    should_skip: &dyn Fn(&str) -> bool,
) -> Result<(), TranslateError> {
    for node in collect_text_nodes(root, should_skip) {
        let NodeData::Text { ref contents } = node.data else {
            continue;
        };

        let current = contents.borrow().to_string();
        let translated = gateway.translate(model_id, &current, src, tgt).await?;

        let mut content_ref = contents.borrow_mut();
        content_ref.clear();
        content_ref.push_slice(&translated);
    }

    Ok(())
}
