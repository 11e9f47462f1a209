// File: crates/linechart-core/src/dom.rs
// Summary: Minimal arena-backed element tree standing in for the host document.
// Notes:
// - Containers carry a measured client size, used when options omit width/height.
// - Removed subtrees return their slots to a free list; later appends reuse them, so a
//   `NodeId` of a removed element must not be used again.

use std::fmt::Write as _;

/// Handle to an element inside a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    client_width: u32,
    client_height: u32,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self { tag: tag.to_string(), ..Self::default() }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> Option<&str> { self.text.as_deref() }
    pub fn children(&self) -> &[NodeId] { &self.children }
    pub fn parent(&self) -> Option<NodeId> { self.parent }

    /// Measured size as a browser would report it; zero when unknown.
    pub fn client_size(&self) -> (u32, u32) { (self.client_width, self.client_height) }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|t| t == class))
            .unwrap_or(false)
    }
}

#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Element>,
    free: Vec<NodeId>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self { Self::new() }
}

impl Document {
    pub fn new() -> Self {
        Self { nodes: vec![Element::new("body")], free: Vec::new(), body: NodeId(0) }
    }

    /// Elements currently in the tree (removed slots excluded).
    pub fn node_count(&self) -> usize { self.nodes.len() - self.free.len() }

    /// Slots allocated so far, live or free.
    pub fn arena_len(&self) -> usize { self.nodes.len() }

    pub fn body(&self) -> NodeId { self.body }

    /// Append a `<div id=...>` under `<body>` reporting the given client size.
    pub fn create_container(&mut self, id: &str, client_width: u32, client_height: u32) -> NodeId {
        let node = self.append_child(self.body, "div");
        self.set_attr(node, "id", id);
        let el = &mut self.nodes[node.0];
        el.client_width = client_width;
        el.client_height = client_height;
        node
    }

    pub fn element(&self, node: NodeId) -> &Element { &self.nodes[node.0] }

    /// First attached element whose `id` attribute equals `id`, in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|n| self.nodes[n.0].attr("id") == Some(id))
    }

    pub fn append_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let mut el = Element::new(tag);
        el.parent = Some(parent);
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = el;
                id
            }
            None => {
                self.nodes.push(el);
                NodeId(self.nodes.len() - 1)
            }
        };
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl ToString) {
        set_pair(&mut self.nodes[node.0].attrs, name, value.to_string());
    }

    pub fn set_style(&mut self, node: NodeId, name: &str, value: impl ToString) {
        set_pair(&mut self.nodes[node.0].styles, name, value.to_string());
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.nodes[node.0].text = Some(text.into());
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attr(name)
    }

    /// Remove every child of `node` together with its subtree.
    pub fn clear_children(&mut self, node: NodeId) {
        let mut stack = std::mem::take(&mut self.nodes[node.0].children);
        while let Some(n) = stack.pop() {
            let el = std::mem::take(&mut self.nodes[n.0]);
            stack.extend(el.children);
            self.free.push(n);
        }
    }

    /// `node` and everything below it, pre-order.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.nodes[n.0].children.iter().rev().copied());
        }
        out
    }

    /// Descendants of `node` (excluding itself) carrying every class in `classes`.
    pub fn select_all(&self, node: NodeId, tag: Option<&str>, classes: &[&str]) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .skip(1)
            .filter(|n| {
                let el = &self.nodes[n.0];
                tag.map_or(true, |t| el.tag == t) && classes.iter().all(|c| el.has_class(c))
            })
            .collect()
    }

    /// Serialize `node` and its subtree as XML markup.
    pub fn to_markup(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, node);
        out
    }

    fn write_node(&self, out: &mut String, node: NodeId) {
        let el = &self.nodes[node.0];
        let _ = write!(out, "<{}", el.tag);
        if el.tag == "svg" && el.attr("xmlns").is_none() {
            out.push_str(" xmlns=\"http://www.w3.org/2000/svg\"");
        }
        for (k, v) in &el.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape_xml(v));
        }
        if !el.styles.is_empty() {
            let style = el
                .styles
                .iter()
                .map(|(k, v)| format!("{k}: {v};"))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(out, " style=\"{}\"", escape_xml(&style));
        }
        if el.children.is_empty() && el.text.is_none() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(t) = &el.text {
            out.push_str(&escape_xml(t));
        }
        for &c in &el.children {
            self.write_node(out, c);
        }
        let _ = write!(out, "</{}>", el.tag);
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, name: &str, value: String) {
    match pairs.iter_mut().find(|(k, _)| k == name) {
        Some(slot) => slot.1 = value,
        None => pairs.push((name.to_string(), value)),
    }
}

pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
