//! Converts the nested simplified model back into a flat pandoc block stream.
//!
//! # The High-Level Concept
//!
//! A pre-order walk over the section forest emits blocks in a fixed order:
//! each section opens with a level-1 header, followed by its own content
//! items, followed by each subsection as a level-2 header and its content.
//! Reading the emitted stream back with `flat_to_nested` reconstructs the
//! original tree, which is what the reversibility verifier relies on.
//!
//! # The Algorithm
//!
//! 1. For each section, emit `Header(1)` with the split title and an empty
//!    attr (identifiers were lost at read time and are never
//!    reconstructed).
//! 2. Emit the section's content items in order: `Text` becomes a `Para`,
//!    `List` becomes a `BulletList` whose items each wrap their text in a
//!    single `Plain` block.
//! 3. For each subsection, emit `Header(2)` and then its content items by
//!    the same rules.
//!
//! Never fails for a structurally valid simplified document.

use crate::ast::{Ast, Attr, Block};
use crate::common::text::split_inline_text;
use crate::simplified::{ContentItem, SimplifiedDocument};

/// Expand a simplified document into a pandoc AST.
pub fn expand(doc: &SimplifiedDocument) -> Ast {
    let mut blocks = Vec::new();

    for section in &doc.sections {
        blocks.push(Block::Header(1, Attr::empty(), split_inline_text(&section.title)));
        emit_content(&section.content, &mut blocks);

        for subsection in &section.subsections {
            blocks.push(Block::Header(
                2,
                Attr::empty(),
                split_inline_text(&subsection.title),
            ));
            emit_content(&subsection.content, &mut blocks);
        }
    }

    Ast::from_blocks(blocks)
}

fn emit_content(content: &[ContentItem], blocks: &mut Vec<Block>) {
    for item in content {
        match item {
            ContentItem::Text(text) => blocks.push(Block::Para(split_inline_text(text))),
            ContentItem::List(items) => {
                let list = items
                    .iter()
                    .map(|text| vec![Block::Plain(split_inline_text(text))])
                    .collect();
                blocks.push(Block::BulletList(list));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Inline, PANDOC_API_VERSION};
    use crate::common::flat_to_nested::simplify;
    use crate::simplified::{Section, Subsection};

    fn sample_doc() -> SimplifiedDocument {
        SimplifiedDocument {
            sections: vec![Section {
                title: "Guide".to_string(),
                content: vec![
                    ContentItem::Text("Opening words".to_string()),
                    ContentItem::List(vec!["one".to_string(), "two".to_string()]),
                ],
                subsections: vec![Subsection {
                    title: "Setup".to_string(),
                    content: vec![ContentItem::Text("Install it".to_string())],
                }],
            }],
        }
    }

    #[test]
    fn emits_blocks_in_fixed_order() {
        let ast = expand(&sample_doc());

        let kinds: Vec<&str> = ast
            .blocks
            .iter()
            .map(|b| match b {
                Block::Header(1, ..) => "h1",
                Block::Header(2, ..) => "h2",
                Block::Header(..) => "h?",
                Block::Para(_) => "para",
                Block::Plain(_) => "plain",
                Block::BulletList(_) => "list",
                Block::Unsupported => "unsupported",
            })
            .collect();
        assert_eq!(kinds, vec!["h1", "para", "list", "h2", "para"]);
    }

    #[test]
    fn headers_carry_empty_attrs() {
        let ast = expand(&sample_doc());
        for block in &ast.blocks {
            if let Block::Header(_, attr, _) = block {
                assert_eq!(*attr, Attr::empty());
            }
        }
    }

    #[test]
    fn list_items_wrap_in_single_plain_blocks() {
        let ast = expand(&sample_doc());
        let list = ast
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::BulletList(items) => Some(items),
                _ => None,
            })
            .expect("expanded doc should contain a bullet list");
        assert_eq!(list.len(), 2);
        assert_eq!(
            list[0],
            vec![Block::Plain(vec![Inline::Str("one".to_string())])]
        );
    }

    #[test]
    fn output_is_stamped_with_the_fixed_version() {
        let ast = expand(&SimplifiedDocument::default());
        assert_eq!(ast.api_version, PANDOC_API_VERSION.to_vec());
        assert!(ast.meta.is_empty());
        assert!(ast.blocks.is_empty());
    }

    #[test]
    fn round_trips_with_flat_to_nested() {
        let original = sample_doc();
        let rebuilt = simplify(&expand(&original));
        assert_eq!(rebuilt, original);
    }
}
