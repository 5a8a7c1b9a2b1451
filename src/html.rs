//! A small declarative builder for HTML document trees. A document is
//! assembled by value with the chaining methods on [`Element`]; the
//! builder exclusively owns the tree until [`Element::render`] serializes
//! it. Text and attribute values are escaped with the same escaping
//! routines the markdown renderer uses.

use pulldown_cmark::escape::{escape_href, escape_html, StrWrite};
use std::io;

/// Elements that serialize without children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "link", "meta"];

/// A single node in a document tree: a nested element, a run of text
/// (escaped on render), or a pre-rendered HTML fragment (emitted as-is).
pub enum Node {
    Element(Element),
    Text(String),
    Raw(String),
}

/// An owned HTML element: a tag name, ordered attributes, and ordered
/// children.
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Element {
        Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute. Attributes render in insertion order. `href`
    /// and `src` values are href-escaped on render; everything else is
    /// HTML-escaped.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Element {
        self.attrs.push((name, value.into()));
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Element {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends a text child. The text is HTML-escaped when rendered.
    pub fn text(mut self, text: impl Into<String>) -> Element {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Appends a pre-rendered HTML fragment. The fragment is emitted
    /// verbatim; the caller is responsible for its escaping.
    pub fn raw(mut self, html: impl Into<String>) -> Element {
        self.children.push(Node::Raw(html.into()));
        self
    }

    /// Serializes the element tree into `w`.
    pub fn render_into<W: StrWrite>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(w, r#" {}=""#, name)?;
            match *name {
                "href" | "src" => escape_href(&mut *w, value)?,
                _ => escape_html(&mut *w, value)?,
            }
            w.write_str("\"")?;
        }
        if VOID_ELEMENTS.contains(&self.tag) {
            return w.write_str("/>");
        }
        w.write_str(">")?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.render_into(w)?,
                Node::Text(text) => escape_html(&mut *w, text)?,
                Node::Raw(html) => w.write_str(html)?,
            }
        }
        write!(w, "</{}>", self.tag)
    }

    /// Serializes the element tree to a string.
    pub fn render(&self) -> io::Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_nested() -> io::Result<()> {
        let element = Element::new("div")
            .attr("class", "header")
            .child(Element::new("h1").text("Title"))
            .child(Element::new("h3").text("Subtitle"));
        assert_eq!(
            element.render()?,
            r#"<div class="header"><h1>Title</h1><h3>Subtitle</h3></div>"#,
        );
        Ok(())
    }

    #[test]
    fn test_render_escapes_text() -> io::Result<()> {
        assert_eq!(
            Element::new("td").text("a < b & c").render()?,
            "<td>a &lt; b &amp; c</td>",
        );
        Ok(())
    }

    #[test]
    fn test_render_escapes_attribute_value() -> io::Result<()> {
        assert_eq!(
            Element::new("td").attr("title", r#"say "hi""#).render()?,
            r#"<td title="say &quot;hi&quot;"></td>"#,
        );
        Ok(())
    }

    #[test]
    fn test_render_void_element() -> io::Result<()> {
        assert_eq!(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", "../stylesheet/style.css")
                .render()?,
            r#"<link rel="stylesheet" href="../stylesheet/style.css"/>"#,
        );
        Ok(())
    }

    #[test]
    fn test_render_raw_fragment_verbatim() -> io::Result<()> {
        assert_eq!(
            Element::new("div")
                .attr("class", "content")
                .raw("<p>already html</p>")
                .render()?,
            r#"<div class="content"><p>already html</p></div>"#,
        );
        Ok(())
    }

    #[test]
    fn test_render_mixed_children_in_order() -> io::Result<()> {
        let element = Element::new("p")
            .text("see ")
            .child(Element::new("a").attr("href", "0.html").text("here"))
            .text(" for more");
        assert_eq!(
            element.render()?,
            r#"<p>see <a href="0.html">here</a> for more</p>"#,
        );
        Ok(())
    }
}
