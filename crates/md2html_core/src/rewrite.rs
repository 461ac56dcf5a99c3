//! Heading post-processing for TOC links.
//!
//! Markdown editors can maintain a table of contents whose links point at
//! anchors derived from the heading text. The conversion service does not emit
//! those anchors, so every `h1`..`h6` of the rendered page gets an `id` computed
//! by [`anchor_id`], unless the heading is marked with [`OMIT_IN_TOC`].

use crate::anchor::anchor_id;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, parse_document, Attribute, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::RefCell;
use std::rc::Rc;

/// Headings whose markup contains this comment are left untouched.
pub const OMIT_IN_TOC: &str = "<!-- omit in toc -->";

/// Result of rewriting the headings of a document.
#[derive(Debug, Clone)]
pub struct RewriteResult {
    /// The serialized document.
    pub html: String,
    /// Number of headings that received an id.
    pub anchored: usize,
    /// Number of headings skipped because of [`OMIT_IN_TOC`].
    pub skipped: usize,
}

/// Adds TOC anchors to the headings of `html`, see [`rewrite_headings`].
///
/// # Example
///
/// ```
/// use md2html_core::rewrite::link_toc;
///
/// let html = link_toc("<html><body><h1>Hello World</h1></body></html>");
/// assert!(html.contains(r#"<h1 id="hello-world">Hello World</h1>"#));
/// ```
pub fn link_toc(html: &str) -> String {
    rewrite_headings(html).html
}

/// Parses `html` and rewrites every heading element in document order.
///
/// For each heading not carrying [`OMIT_IN_TOC`] anywhere in its serialized
/// markup, the `id` attribute is set to the anchor of its trimmed text and its
/// content is replaced by that plain text, dropping any inline markup. The
/// parser recovers from malformed input, so this never fails.
pub fn rewrite_headings(html: &str) -> RewriteResult {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    let mut headings = Vec::new();
    collect_headings(&dom.document, &mut headings);

    let mut anchored = 0;
    let mut skipped = 0;

    for heading in &headings {
        if serialize_node(heading, TraversalScope::IncludeNode).contains(OMIT_IN_TOC) {
            skipped += 1;
            continue;
        }

        let mut text = String::new();
        collect_text(heading, &mut text);
        let text = text.trim();

        let id = anchor_id(text);
        tracing::trace!(heading = %text, id = %id, "Adding anchor to heading");

        set_id(heading, &id);
        replace_children_with_text(heading, text);
        anchored += 1;
    }

    RewriteResult {
        html: serialize_node(&dom.document, TraversalScope::ChildrenOnly(None)),
        anchored,
        skipped,
    }
}

fn is_heading(node: &Handle) -> bool {
    match node.data {
        NodeData::Element { ref name, .. } => {
            matches!(&*name.local, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
        }
        _ => false,
    }
}

fn collect_headings(node: &Handle, headings: &mut Vec<Handle>) {
    if is_heading(node) {
        headings.push(node.clone());
    }
    for child in node.children.borrow().iter() {
        collect_headings(child, headings);
    }
}

/// Visible text of `node`, comments excluded.
fn collect_text(node: &Handle, text: &mut String) {
    for child in node.children.borrow().iter() {
        match child.data {
            NodeData::Text { ref contents } => text.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, text),
            _ => {}
        }
    }
}

fn set_id(node: &Handle, id: &str) {
    if let NodeData::Element { ref attrs, .. } = node.data {
        let mut attrs = attrs.borrow_mut();
        match attrs
            .iter_mut()
            .find(|attr| attr.name.local == local_name!("id"))
        {
            Some(attr) => attr.value = id.into(),
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), local_name!("id")),
                value: id.into(),
            }),
        }
    }
}

fn replace_children_with_text(node: &Handle, text: &str) {
    let text_node = Node::new(NodeData::Text {
        contents: RefCell::new(text.into()),
    });
    text_node.parent.set(Some(Rc::downgrade(node)));

    let old_children = std::mem::replace(&mut *node.children.borrow_mut(), vec![text_node]);
    for child in old_children {
        child.parent.set(None);
    }
}

fn serialize_node(node: &Handle, traversal_scope: TraversalScope) -> String {
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };

    let mut bytes = Vec::new();
    serialize(&mut bytes, &SerializableHandle::from(node.clone()), opts)
        .expect("Writing to a Vec never fails");

    String::from_utf8(bytes).expect("html5ever always serializes to UTF-8")
}
