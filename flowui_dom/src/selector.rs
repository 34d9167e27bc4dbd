// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS selector parsing and matching.
//!
//! ## Grammar
//!
//! A pragmatic subset, enough to address elements in a document:
//!
//! - type (`button`) and universal (`*`) selectors
//! - `#id`, `.class`, `[attr]`, `[attr=value]` (value as identifier or quoted string)
//! - compound selectors (`button.primary[data-x]`)
//! - descendant (whitespace) and child (`>`) combinators
//! - selector lists (`a, b`)
//!
//! Pseudo-classes and sibling combinators are rejected with
//! [`DomError::InvalidSelector`].
//!
//! Matching runs right to left: the rightmost compound is tested against the
//! candidate, then combinators walk parents or ancestors with backtracking.

use std::fmt;

use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::document::{Document, Node};
use crate::error::{DomError, Result};
use crate::types::ElementId;

/// How two compounds relate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace: any ancestor.
    Descendant,
    /// `>`: direct parent.
    Child,
}

/// Attribute constraint inside `[...]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeSelector {
    /// Attribute name.
    pub name: String,
    /// Required value, if any.
    pub value: Option<String>,
}

/// A single compound selector (e.g. `button.primary[data-x]`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    /// Type selector; `None` matches any tag. `*` parses to `None`.
    pub tag: Option<String>,
    /// ID selector.
    pub id: Option<String>,
    /// Class selectors; all must match.
    pub classes: Vec<String>,
    /// Attribute selectors; all must match.
    pub attributes: Vec<AttributeSelector>,
    universal: bool,
}

impl Compound {
    fn is_empty(&self) -> bool {
        !self.universal
            && self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
    }

    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag
            && !node.tag.eq_ignore_ascii_case(tag)
        {
            return false;
        }
        if let Some(id) = &self.id
            && node.attribute("id") != Some(id.as_str())
        {
            return false;
        }
        if !self.classes.iter().all(|c| node.has_class(c)) {
            return false;
        }
        self.attributes
            .iter()
            .all(|a| match (node.attribute(&a.name), &a.value) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected,
                (None, _) => false,
            })
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(t) => write!(f, "{t}")?,
            None if self.universal => write!(f, "*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attr in &self.attributes {
            match &attr.value {
                Some(v) => write!(f, "[{}=\"{v}\"]", attr.name)?,
                None => write!(f, "[{}]", attr.name)?,
            }
        }
        Ok(())
    }
}

/// A complex selector: compounds joined by combinators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    /// Compounds, left to right.
    pub compounds: Vec<Compound>,
    /// Combinators between compounds (length = `compounds.len() - 1`).
    pub combinators: Vec<Combinator>,
}

impl Selector {
    fn matches(&self, doc: &Document, id: ElementId) -> bool {
        let Some(last) = self.compounds.len().checked_sub(1) else {
            return false;
        };
        let Some(node) = doc.node_opt(id) else {
            return false;
        };
        self.compounds[last].matches(node) && self.match_from(doc, node, last)
    }

    /// `node` matches `compounds[i]`; check the compounds to its left.
    fn match_from(&self, doc: &Document, node: &Node, i: usize) -> bool {
        if i == 0 {
            return true;
        }
        let wanted = &self.compounds[i - 1];
        match self.combinators[i - 1] {
            Combinator::Child => node
                .parent
                .and_then(|p| doc.node_opt(p))
                .is_some_and(|parent| wanted.matches(parent) && self.match_from(doc, parent, i - 1)),
            Combinator::Descendant => {
                let mut cur = node.parent;
                while let Some(anc) = cur.and_then(|p| doc.node_opt(p)) {
                    if wanted.matches(anc) && self.match_from(doc, anc, i - 1) {
                        return true;
                    }
                    cur = anc.parent;
                }
                false
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.compounds.iter().enumerate() {
            if i > 0 {
                match self.combinators[i - 1] {
                    Combinator::Descendant => write!(f, " ")?,
                    Combinator::Child => write!(f, " > ")?,
                }
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// A comma-separated list of selectors; matches if any member matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorList(pub Vec<Selector>);

impl SelectorList {
    /// Parse selector text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let mut list = Vec::new();
        let mut builder = SelectorBuilder::default();

        loop {
            let token = match parser.next_including_whitespace() {
                Ok(t) => t.clone(),
                Err(_) => break,
            };
            match token {
                Token::WhiteSpace(_) => builder.whitespace(),
                Token::Comma => list.push(builder.finish(text)?),
                Token::Delim('>') => builder.child(text)?,
                Token::Delim('*') => {
                    builder.begin_compound(text)?.universal = true;
                }
                Token::Ident(name) => {
                    let part = builder.begin_compound(text)?;
                    if !part.is_empty() {
                        return Err(DomError::invalid_selector(
                            text,
                            format!("unexpected type selector '{}'", &*name),
                        ));
                    }
                    part.tag = Some(name.to_ascii_lowercase());
                }
                Token::IDHash(id) | Token::Hash(id) => {
                    let part = builder.begin_compound(text)?;
                    if part.id.is_some() {
                        return Err(DomError::invalid_selector(text, "duplicate id selector"));
                    }
                    part.id = Some(id.to_string());
                }
                Token::Delim('.') => {
                    let class = match parser.next_including_whitespace() {
                        Ok(Token::Ident(class)) => class.to_string(),
                        _ => {
                            return Err(DomError::invalid_selector(
                                text,
                                "expected class name after '.'",
                            ));
                        }
                    };
                    builder.begin_compound(text)?.classes.push(class);
                }
                Token::SquareBracketBlock => {
                    let attr = parser
                        .parse_nested_block(parse_attribute)
                        .map_err(|e| DomError::invalid_selector(text, describe(&e)))?;
                    builder.begin_compound(text)?.attributes.push(attr);
                }
                other => {
                    return Err(DomError::invalid_selector(
                        text,
                        format!("unsupported token {other:?}"),
                    ));
                }
            }
        }
        list.push(builder.finish(text)?);
        Ok(Self(list))
    }

    /// Returns true if any selector in the list matches the element.
    pub fn matches(&self, doc: &Document, id: ElementId) -> bool {
        self.0.iter().any(|s| s.matches(doc, id))
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sel) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{sel}")?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct SelectorBuilder {
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
    current: Compound,
    pending: Option<Combinator>,
}

impl SelectorBuilder {
    fn whitespace(&mut self) {
        if !self.current.is_empty() && self.pending.is_none() {
            self.pending = Some(Combinator::Descendant);
        }
    }

    fn child(&mut self, text: &str) -> Result<()> {
        if self.current.is_empty() || self.pending == Some(Combinator::Child) {
            return Err(DomError::invalid_selector(text, "misplaced '>'"));
        }
        self.pending = Some(Combinator::Child);
        Ok(())
    }

    /// Return the compound that the next simple selector belongs to.
    fn begin_compound(&mut self, text: &str) -> Result<&mut Compound> {
        if let Some(combinator) = self.pending.take() {
            if self.current.is_empty() {
                return Err(DomError::invalid_selector(text, "combinator without left side"));
            }
            self.compounds.push(core::mem::take(&mut self.current));
            self.combinators.push(combinator);
        }
        Ok(&mut self.current)
    }

    fn finish(&mut self, text: &str) -> Result<Selector> {
        if self.current.is_empty() || self.pending == Some(Combinator::Child) {
            return Err(DomError::invalid_selector(text, "empty selector"));
        }
        let mut compounds = core::mem::take(&mut self.compounds);
        compounds.push(core::mem::take(&mut self.current));
        let combinators = core::mem::take(&mut self.combinators);
        self.pending = None;
        Ok(Selector {
            compounds,
            combinators,
        })
    }
}

fn parse_attribute<'i>(
    parser: &mut Parser<'i, '_>,
) -> core::result::Result<AttributeSelector, ParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_string();
    if parser.is_exhausted() {
        return Ok(AttributeSelector { name, value: None });
    }
    parser.expect_delim('=')?;
    let value = parser.expect_ident_or_string()?.to_string();
    parser.expect_exhausted()?;
    Ok(AttributeSelector {
        name,
        value: Some(value),
    })
}

fn describe(err: &ParseError<'_, ()>) -> String {
    format!(
        "malformed attribute selector at line {}, column {}",
        err.location.line + 1,
        err.location.column
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    fn page() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new(Size::new(800.0, 600.0));
        let section = doc.create_element("section");
        doc.set_attribute(section, "id", "main");
        doc.add_class(section, "area");
        let card = doc.create_element("div");
        doc.add_class(card, "card");
        doc.set_attribute(card, "data-kind", "note");
        let nested = doc.create_element("div");
        doc.add_class(nested, "card");
        doc.append_child(card, nested);
        doc.append_child(section, card);
        doc.append_child(doc.body(), section);
        (doc, section, card, nested)
    }

    #[test]
    fn parses_compounds_and_combinators() {
        let list = SelectorList::parse("section#main.area > div.card[data-kind=note] span").unwrap();
        assert_eq!(list.0.len(), 1);
        let sel = &list.0[0];
        assert_eq!(sel.compounds.len(), 3);
        assert_eq!(
            sel.combinators,
            [Combinator::Child, Combinator::Descendant]
        );
        assert_eq!(
            list.to_string(),
            "section#main.area > div.card[data-kind=\"note\"] span"
        );
    }

    #[test]
    fn parses_lists_and_trims_whitespace() {
        let list = SelectorList::parse("  .a ,  #b  ").unwrap();
        assert_eq!(list.to_string(), ".a, #b");
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "  ", "> a", "a >", "a > > b", "a,", ".", "a:hover", "[=x]", "a + b"] {
            assert!(
                SelectorList::parse(bad).is_err(),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn matches_classes_ids_and_attributes() {
        let (doc, section, card, nested) = page();
        assert_eq!(doc.query_selector_all(".card").unwrap(), [card, nested]);
        assert_eq!(doc.query_selector_all("#main").unwrap(), [section]);
        assert_eq!(doc.query_selector_all("[data-kind]").unwrap(), [card]);
        assert_eq!(
            doc.query_selector_all("[data-kind='note']").unwrap(),
            [card]
        );
        assert!(doc.query_selector_all("[data-kind=memo]").unwrap().is_empty());
        assert_eq!(doc.query_selector_all("SECTION").unwrap(), [section]);
    }

    #[test]
    fn child_and_descendant_combinators() {
        let (doc, _section, card, nested) = page();
        assert_eq!(doc.query_selector_all("#main > .card").unwrap(), [card]);
        assert_eq!(doc.query_selector_all("#main .card").unwrap(), [card, nested]);
        assert_eq!(doc.query_selector_all(".card > .card").unwrap(), [nested]);
        assert_eq!(doc.query_selector_all("body section div div").unwrap(), [nested]);
    }

    #[test]
    fn selector_lists_keep_document_order() {
        let (doc, section, card, nested) = page();
        assert_eq!(
            doc.query_selector_all(".card, #main").unwrap(),
            [section, card, nested]
        );
    }

    #[test]
    fn detached_elements_are_not_queried() {
        let (mut doc, _, _, _) = page();
        let loose = doc.create_element("div");
        doc.add_class(loose, "card");
        assert_eq!(doc.query_selector_all(".card").unwrap().len(), 2);
        assert!(doc.matches(loose, ".card").unwrap(), "matches ignores connection");
    }

    #[test]
    fn universal_matches_every_connected_element() {
        let (doc, _, _, _) = page();
        // html, head, body, section, two divs
        assert_eq!(doc.query_selector_all("*").unwrap().len(), 6);
        assert_eq!(doc.query_selector("*").unwrap(), Some(doc.root()));
    }
}
