//! Converts a flat pandoc block stream into the nested simplified model.
//!
//! # The High-Level Concept
//!
//! Pandoc documents are a flat sequence of blocks; headings mark structure
//! but do not contain their content. Reconstructing the two-level
//! section/subsection tree therefore means walking the blocks in order
//! while remembering where content currently attaches. A single cursor
//! (indices into the sections being built) acts as that memory; it is
//! discarded once the walk completes, so the finished tree is a plain
//! forest of values with no shared references.
//!
//! # The Algorithm
//!
//! 1. **Level-1 heading:** open a new section, make it both the attachment
//!    target and the current root section.
//! 2. **Level-2 heading:** if a root section exists, open a subsection
//!    under it and make that the attachment target; otherwise drop the
//!    heading. Deeper headings are dropped entirely.
//! 3. **Paragraph / bullet list:** attach to the current target as a text
//!    or list content item; with no target yet, drop.
//! 4. **Anything else:** drop.
//!
//! Dropping is deliberate, not an error: the simplified model narrows the
//! document to headings (two levels), paragraphs and bullet lists, and
//! every narrowing case degrades to silent omission. The reader never
//! fails.

use crate::ast::{Ast, Block};
use crate::common::text::join_inline_text;
use crate::simplified::{ContentItem, Section, SimplifiedDocument, Subsection};

/// Where content currently attaches during the walk.
#[derive(Clone, Copy)]
enum Cursor {
    /// No heading seen yet; content is dropped.
    Unset,
    /// Attaching to `sections[idx]`.
    Section(usize),
    /// Attaching to `sections[section].subsections[subsection]`.
    Subsection { section: usize, subsection: usize },
}

impl Cursor {
    /// The index of the current root section, if one is open.
    fn root_section(self) -> Option<usize> {
        match self {
            Cursor::Unset => None,
            Cursor::Section(idx) => Some(idx),
            Cursor::Subsection { section, .. } => Some(section),
        }
    }
}

/// Reduce a pandoc AST to the simplified section/subsection model.
///
/// Deterministic and infallible; unsupported content is omitted per the
/// module rules above.
pub fn simplify(ast: &Ast) -> SimplifiedDocument {
    let mut sections: Vec<Section> = Vec::new();
    let mut cursor = Cursor::Unset;

    for block in &ast.blocks {
        match block {
            Block::Header(1, _, inlines) => {
                sections.push(Section::titled(join_inline_text(inlines)));
                cursor = Cursor::Section(sections.len() - 1);
            }
            Block::Header(2, _, inlines) => {
                if let Some(section) = cursor.root_section() {
                    sections[section]
                        .subsections
                        .push(Subsection::titled(join_inline_text(inlines)));
                    cursor = Cursor::Subsection {
                        section,
                        subsection: sections[section].subsections.len() - 1,
                    };
                }
            }
            Block::Header(..) => {}
            Block::Para(inlines) => {
                attach(&mut sections, cursor, ContentItem::Text(join_inline_text(inlines)));
            }
            Block::BulletList(items) => {
                let texts = items.iter().map(|item| item_text(item)).collect();
                attach(&mut sections, cursor, ContentItem::List(texts));
            }
            Block::Plain(_) | Block::Unsupported => {}
        }
    }

    SimplifiedDocument { sections }
}

fn attach(sections: &mut [Section], cursor: Cursor, item: ContentItem) {
    match cursor {
        Cursor::Unset => {}
        Cursor::Section(idx) => sections[idx].content.push(item),
        Cursor::Subsection {
            section,
            subsection,
        } => sections[section].subsections[subsection].content.push(item),
    }
}

/// The joined inline content of a list item's first block.
///
/// Deeper structure per item is not modeled; an empty item, or one whose
/// first block carries no inline content, contributes an empty string.
fn item_text(item: &[Block]) -> String {
    item.first()
        .and_then(Block::inline_content)
        .map(join_inline_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Attr;
    use crate::common::text::split_inline_text;

    fn header(level: u32, title: &str) -> Block {
        Block::Header(level, Attr::empty(), split_inline_text(title))
    }

    fn para(text: &str) -> Block {
        Block::Para(split_inline_text(text))
    }

    #[test]
    fn level_two_before_level_one_is_dropped() {
        let ast = Ast::from_blocks(vec![header(2, "Orphan"), header(1, "Root")]);
        let doc = simplify(&ast);
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Root");
        assert!(doc.sections[0].subsections.is_empty());
    }

    #[test]
    fn subsection_attaches_to_most_recent_section() {
        let ast = Ast::from_blocks(vec![
            header(1, "First"),
            header(1, "Second"),
            header(2, "Child"),
        ]);
        let doc = simplify(&ast);
        assert!(doc.sections[0].subsections.is_empty());
        assert_eq!(doc.sections[1].subsections[0].title, "Child");
    }

    #[test]
    fn sibling_subsections_share_the_root_section() {
        let ast = Ast::from_blocks(vec![
            header(1, "Root"),
            header(2, "A"),
            para("under a"),
            header(2, "B"),
            para("under b"),
        ]);
        let doc = simplify(&ast);
        let subs = &doc.sections[0].subsections;
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].content, vec![ContentItem::Text("under a".to_string())]);
        assert_eq!(subs[1].content, vec![ContentItem::Text("under b".to_string())]);
    }

    #[test]
    fn bullet_list_takes_first_block_of_each_item() {
        let items = vec![
            vec![Block::Plain(split_inline_text("first")), para("ignored")],
            vec![para("second")],
            vec![],
        ];
        let ast = Ast::from_blocks(vec![header(1, "S"), Block::BulletList(items)]);
        let doc = simplify(&ast);
        assert_eq!(
            doc.sections[0].content,
            vec![ContentItem::List(vec![
                "first".to_string(),
                "second".to_string(),
                String::new(),
            ])]
        );
    }

    #[test]
    fn nested_list_item_contributes_empty_text() {
        // First block of the item is itself a list: no inline content.
        let items = vec![vec![Block::BulletList(vec![vec![para("inner")]])]];
        let ast = Ast::from_blocks(vec![header(1, "S"), Block::BulletList(items)]);
        let doc = simplify(&ast);
        assert_eq!(
            doc.sections[0].content,
            vec![ContentItem::List(vec![String::new()])]
        );
    }

    #[test]
    fn unsupported_blocks_do_not_disturb_the_cursor() {
        let ast = Ast::from_blocks(vec![
            header(1, "S"),
            Block::Unsupported,
            para("still attached"),
        ]);
        let doc = simplify(&ast);
        assert_eq!(
            doc.sections[0].content,
            vec![ContentItem::Text("still attached".to_string())]
        );
    }
}
