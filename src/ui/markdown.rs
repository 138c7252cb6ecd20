//! Markdown subset used by the job analysis tabs.
//!
//! Supports `**bold**`, `#`/`##`/`###` headings, `*` bullet items and
//! blank-line separated paragraphs. Anything else is plain text.

use ratatui::text::{Line, Span};

use crate::ui::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading(HeadingLevel, Vec<Inline>),
    List(Vec<Vec<Inline>>),
    /// Separates two lists that only had blank lines between them.
    Break,
}

enum LineKind<'a> {
    Blank,
    Heading(HeadingLevel, &'a str),
    Bullet(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if trimmed.starts_with('#') {
        let hashes = trimmed.chars().take_while(|c| *c == '#').count();
        let level = match hashes {
            1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        };
        return LineKind::Heading(level, trimmed[hashes..].trim());
    }

    if trimmed.starts_with('*') && !trimmed.starts_with("**") {
        return LineKind::Bullet(trimmed[1..].trim());
    }

    LineKind::Text(trimmed)
}

/// Splits `**bold**` spans out of a line. An unmatched `**` stays literal.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            spans.push(Inline::Text(rest[..start].to_string()));
        }
        spans.push(Inline::Bold(after[..end].to_string()));
        rest = &after[end + 2..];
    }

    if !rest.is_empty() {
        spans.push(Inline::Text(rest.to_string()));
    }
    spans
}

#[derive(Default)]
struct Builder {
    blocks: Vec<Block>,
    paragraph: Vec<String>,
    list: Vec<Vec<Inline>>,
    /// A list was closed by a blank line and nothing else has followed yet.
    list_just_closed: bool,
}

impl Builder {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();
        self.blocks.push(Block::Paragraph(parse_inline(&text)));
        self.list_just_closed = false;
    }

    fn flush_list(&mut self) {
        if self.list.is_empty() {
            return;
        }
        self.blocks.push(Block::List(std::mem::take(&mut self.list)));
        self.list_just_closed = true;
    }

    fn push_block(&mut self, block: Block) {
        self.list_just_closed = false;
        self.blocks.push(block);
    }
}

/// Single pass, line by line. Never fails; empty input gives no blocks.
pub fn render_markdown(text: &str) -> Vec<Block> {
    let mut b = Builder::default();

    for line in text.lines() {
        match classify(line) {
            LineKind::Blank => {
                b.flush_paragraph();
                b.flush_list();
            }
            LineKind::Heading(level, content) => {
                b.flush_paragraph();
                b.flush_list();
                b.push_block(Block::Heading(level, parse_inline(content)));
            }
            LineKind::Bullet(content) => {
                b.flush_paragraph();
                if b.list.is_empty() && b.list_just_closed {
                    b.push_block(Block::Break);
                }
                b.list.push(parse_inline(content));
            }
            LineKind::Text(content) => {
                b.flush_list();
                b.list_just_closed = false;
                b.paragraph.push(content.to_string());
            }
        }
    }

    b.flush_paragraph();
    b.flush_list();
    b.blocks
}

fn inline_spans(inlines: &[Inline], base: ratatui::style::Style) -> Vec<Span<'static>> {
    inlines
        .iter()
        .map(|i| match i {
            Inline::Text(t) => Span::styled(t.clone(), base),
            Inline::Bold(t) => Span::styled(t.clone(), base.patch(theme::BOLD)),
        })
        .collect()
}

/// Lays blocks out as terminal lines, one blank line between blocks.
pub fn to_lines(blocks: &[Block]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 && !matches!(block, Block::Break) && !matches!(blocks[i - 1], Block::Break) {
            lines.push(Line::from(""));
        }
        match block {
            Block::Paragraph(inlines) => {
                lines.push(Line::from(inline_spans(inlines, theme::BODY)));
            }
            Block::Heading(level, inlines) => {
                let style = match level {
                    HeadingLevel::H1 => theme::HEADING_1,
                    HeadingLevel::H2 => theme::HEADING_2,
                    HeadingLevel::H3 => theme::HEADING_3,
                };
                lines.push(Line::from(inline_spans(inlines, style)));
            }
            Block::List(items) => {
                for item in items {
                    let mut spans = vec![Span::styled("  • ", theme::BULLET)];
                    spans.extend(inline_spans(item, theme::BODY));
                    lines.push(Line::from(spans));
                }
            }
            Block::Break => lines.push(Line::from("")),
        }
    }

    lines
}
