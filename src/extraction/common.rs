use crate::parsers::Language;
use crate::parsers::heuristic::HeaderScanner;
use crate::parsers::treesitter::TreeSitterParser;
use crate::report::{Diagnostic, Extraction, FunctionRecord};
use log::warn;
use tree_sitter::{Node, Point, Query, QueryCursor, StreamingIterator, Tree};

// Helper functions shared by the language extractors

pub fn get_node_text(node: Node, source: &str) -> String {
    let start_byte = node.start_byte();
    let end_byte = node.end_byte();

    source
        .get(start_byte..end_byte)
        .map(str::to_string)
        .unwrap_or_default()
}

pub fn parse_with_tree_sitter(language: Language, content: &str) -> Option<Tree> {
    let mut parser = TreeSitterParser::new();
    parser.parse(language, content)
}

pub fn execute_query<'a>(
    query_str: &str,
    tree: &'a Tree,
    source: &'a [u8],
    capture_name: &str,
) -> Vec<Node<'a>> {
    let mut result = Vec::new();

    match Query::new(&tree.language(), query_str) {
        Ok(query) => {
            let mut query_cursor = QueryCursor::new();
            let Some(capture_idx) = query.capture_index_for_name(capture_name) else {
                warn!("Query has no capture named {}: {}", capture_name, query_str);
                return result;
            };

            let mut matches = query_cursor.matches(&query, tree.root_node(), source);
            while let Some(match_result) = matches.next() {
                for capture in match_result.captures {
                    if capture.index == capture_idx {
                        result.push(capture.node);
                    }
                }
            }
        }
        Err(e) => warn!("Failed to create query {}: {}", query_str, e),
    }

    result.sort_by_key(|node| node.start_byte());
    result
}

/// Position of the first `ERROR` or `MISSING` node in document order.
pub fn first_syntax_error(tree: &Tree) -> Option<Point> {
    let root = tree.root_node();
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node.start_position());
        }

        if node.has_error() && cursor.goto_first_child() {
            continue;
        }

        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return Some(root.start_position());
            }
        }
    }
}

pub fn syntax_error(position: Point) -> Diagnostic {
    Diagnostic::error(format!(
        "Syntax error parsing code: line {}, column {}",
        position.row + 1,
        position.column + 1
    ))
}

/// Turns header/brace scanner hits into records.
pub fn heuristic_extraction(content: &str, scanner: &HeaderScanner, language: Language) -> Extraction {
    let mut extraction = Extraction::default();

    for found in scanner.scan(content) {
        if !found.terminated {
            warn!(
                "Unbalanced braces in {} function {}; taking the rest of the input",
                language, found.name
            );
            extraction.diagnostics.push(Diagnostic::warning(format!(
                "Could not find the end of `{}`; its snippet runs to the end of the input",
                found.name
            )));
        }

        extraction.functions.push(FunctionRecord::from_span(
            found.name,
            content,
            found.start,
            found.end,
        ));
    }

    extraction
}
