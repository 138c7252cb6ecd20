use careercoach::ui::markdown::{Block, HeadingLevel, Inline, parse_inline, render_markdown, to_lines};

fn text(s: &str) -> Inline {
    Inline::Text(s.into())
}

fn bold(s: &str) -> Inline {
    Inline::Bold(s.into())
}

#[test]
fn test_empty_input_renders_nothing() {
    assert!(render_markdown("").is_empty());
    assert!(render_markdown("\n\n   \n").is_empty());
}

#[test]
fn test_paragraph_heading_and_merged_list() {
    let blocks = render_markdown("**Bold** text\n\n## Heading\n* item1\n* item2");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph(vec![bold("Bold"), text(" text")]),
            Block::Heading(HeadingLevel::H2, vec![text("Heading")]),
            Block::List(vec![vec![text("item1")], vec![text("item2")]]),
        ]
    );
}

#[test]
fn test_three_heading_levels() {
    let blocks = render_markdown("# One\n## Two\n### Three");
    assert_eq!(
        blocks,
        vec![
            Block::Heading(HeadingLevel::H1, vec![text("One")]),
            Block::Heading(HeadingLevel::H2, vec![text("Two")]),
            Block::Heading(HeadingLevel::H3, vec![text("Three")]),
        ]
    );
}

#[test]
fn test_deeper_headings_clamp_to_level_three() {
    let blocks = render_markdown("#### Deep");
    assert_eq!(
        blocks,
        vec![Block::Heading(HeadingLevel::H3, vec![text("Deep")])]
    );
}

#[test]
fn test_lists_separated_by_blank_line_get_a_break() {
    let blocks = render_markdown("* a\n* b\n\n* c");
    assert_eq!(
        blocks,
        vec![
            Block::List(vec![vec![text("a")], vec![text("b")]]),
            Block::Break,
            Block::List(vec![vec![text("c")]]),
        ]
    );
}

#[test]
fn test_paragraph_between_lists_means_no_break() {
    let blocks = render_markdown("* a\n\nMiddle\n\n* b");
    assert_eq!(
        blocks,
        vec![
            Block::List(vec![vec![text("a")]]),
            Block::Paragraph(vec![text("Middle")]),
            Block::List(vec![vec![text("b")]]),
        ]
    );
}

#[test]
fn test_paragraph_lines_are_joined() {
    let blocks = render_markdown("first line\nsecond line\n\nnext");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph(vec![text("first line second line")]),
            Block::Paragraph(vec![text("next")]),
        ]
    );
}

#[test]
fn test_bold_inside_list_item() {
    let blocks = render_markdown("* **SQL**: joins and windows");
    assert_eq!(
        blocks,
        vec![Block::List(vec![vec![
            bold("SQL"),
            text(": joins and windows")
        ]])]
    );
}

#[test]
fn test_line_starting_with_bold_is_not_a_bullet() {
    let blocks = render_markdown("**Note** this");
    assert_eq!(
        blocks,
        vec![Block::Paragraph(vec![bold("Note"), text(" this")])]
    );
}

#[test]
fn test_unclosed_bold_stays_literal() {
    assert_eq!(parse_inline("a **b"), vec![text("a **b")]);
}

#[test]
fn test_multiple_bold_spans() {
    assert_eq!(
        parse_inline("**a** and **b**"),
        vec![bold("a"), text(" and "), bold("b")]
    );
}

#[test]
fn test_no_links_or_code() {
    let blocks = render_markdown("[x](http://y) `code`");
    assert_eq!(
        blocks,
        vec![Block::Paragraph(vec![text("[x](http://y) `code`")])]
    );
}

#[test]
fn test_to_lines_layout() {
    let blocks = render_markdown("## Title\n* a\n* b");
    let lines = to_lines(&blocks);
    // heading, blank, two items
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].to_string(), "Title");
    assert_eq!(lines[2].to_string(), "  • a");
}
