use crate::extraction::{LanguageExtractor, common};
use crate::parsers::Language;
use crate::parsers::treesitter::queries::python as queries;
use crate::report::{Diagnostic, Extraction, FunctionRecord};
use log::{trace, warn};
use tree_sitter::{Node, Point};

pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Self {
        PythonExtractor
    }

    fn find_node_name(&self, node: Node, source: &str) -> Option<String> {
        let name = node.child_by_field_name("name")?;
        let text = common::get_node_text(name, source);
        if text.is_empty() { None } else { Some(text) }
    }

    /// tree-sitter accepts `def f():` followed by an unindented line and
    /// gives the definition an empty body. Python rejects it, so the error
    /// is placed on the line that should have been indented.
    fn missing_body(&self, node: Node) -> Option<Point> {
        if let Some(body) = node.child_by_field_name("body") {
            let mut cursor = body.walk();
            let has_statement = body.start_byte() < body.end_byte()
                && body
                    .named_children(&mut cursor)
                    .any(|child| child.kind() != "comment");
            if has_statement {
                return None;
            }
        }

        Some(node.next_sibling().map_or(
            Point::new(node.end_position().row + 1, 0),
            |next| next.start_position(),
        ))
    }
}

impl LanguageExtractor for PythonExtractor {
    fn extract_functions(&self, content: &str) -> Extraction {
        let Some(tree) = common::parse_with_tree_sitter(Language::Python, content) else {
            warn!("Python parser produced no tree");
            return Extraction::failed(Diagnostic::error(
                "Syntax error parsing code: the Python parser could not process the input",
            ));
        };

        if let Some(position) = common::first_syntax_error(&tree) {
            warn!(
                "Python syntax error at {}:{}",
                position.row + 1,
                position.column + 1
            );
            return Extraction::failed(common::syntax_error(position));
        }

        let function_nodes =
            common::execute_query(queries::FUNCTION_QUERY, &tree, content.as_bytes(), "node");

        if let Some(position) = function_nodes.iter().find_map(|node| self.missing_body(*node)) {
            warn!("Python function without a body, expected an indented block at line {}", position.row + 1);
            return Extraction::failed(common::syntax_error(position));
        }

        let mut functions = Vec::with_capacity(function_nodes.len());
        for node in function_nodes {
            match self.find_node_name(node, content) {
                Some(name) => {
                    trace!("Found Python function {} at line {}", name, node.start_position().row + 1);
                    functions.push(FunctionRecord::from_span(
                        name,
                        content,
                        node.start_byte(),
                        node.end_byte(),
                    ));
                }
                None => warn!(
                    "Skipping unnamed function definition at line {}",
                    node.start_position().row + 1
                ),
            }
        }

        Extraction::new(functions)
    }
}
