use code_requirements::extract_functions;

const INVENTORY_PY: &str = include_str!("fixtures/inventory.py");
const THERMOSTAT_CPP: &str = include_str!("fixtures/thermostat.cpp");
const CART_JS: &str = include_str!("fixtures/cart.js");

/// Every snippet must be a verbatim slice of the input.
fn assert_snippets_are_verbatim(source: &str, snippets: &[&str]) {
    let mut cursor = 0;
    for snippet in snippets {
        let offset = source[cursor..]
            .find(snippet)
            .unwrap_or_else(|| panic!("snippet not found in order:\n{}", snippet));
        cursor += offset + snippet.len();
    }
}

#[test]
fn python_fixture_finds_every_function_in_order() {
    let extraction = extract_functions(INVENTORY_PY, "python");

    assert!(extraction.diagnostics.is_empty());
    assert_eq!(
        extraction.names(),
        vec!["load_items", "__init__", "restock", "low_stock", "main"]
    );

    let snippets: Vec<&str> = extraction.functions.iter().map(|f| f.snippet.as_str()).collect();
    assert_snippets_are_verbatim(INVENTORY_PY, &snippets);

    let restock = &extraction.functions[2];
    assert!(restock.snippet.starts_with("def restock(self, sku, amount):"));
    assert!(restock.snippet.contains("# negative amounts are ignored"));
    assert!(restock.snippet.ends_with("self.items[sku].quantity += amount"));

    let load_items = &extraction.functions[0];
    assert!(load_items.snippet.contains("\"\"\"Read items from a CSV file.\"\"\""));
}

#[test]
fn python_add_example() {
    let extraction = extract_functions("def add(a,b):\n    return a+b\n", "python");
    assert_eq!(extraction.functions.len(), 1);
    assert_eq!(extraction.functions[0].name, "add");
    assert_eq!(extraction.functions[0].snippet, "def add(a,b):\n    return a+b");
}

#[test]
fn python_syntax_error_is_a_diagnostic() {
    let extraction = extract_functions("def ok():\n    return 1\n\ndef broken(\n", "python");
    assert!(extraction.functions.is_empty());
    assert_eq!(extraction.diagnostics.len(), 1);
    assert!(extraction.diagnostics[0].message.starts_with("Syntax error parsing code"));
}

#[test]
fn cpp_fixture_finds_constructor_methods_and_main() {
    let extraction = extract_functions(THERMOSTAT_CPP, "cpp");

    assert!(extraction.diagnostics.is_empty());
    assert_eq!(
        extraction.names(),
        vec!["Thermostat", "setTarget", "update", "modeName", "main"]
    );

    let snippets: Vec<&str> = extraction.functions.iter().map(|f| f.snippet.as_str()).collect();
    assert_snippets_are_verbatim(THERMOSTAT_CPP, &snippets);

    // Nested if/else blocks stay inside the body, which ends at the brace
    // that brings the depth back to zero.
    let update = &extraction.functions[2];
    assert!(update.snippet.starts_with("void update(double reading) {"));
    assert!(update.snippet.ends_with("            mode = Mode::OFF;\n        }\n    }"));

    let main = &extraction.functions[4];
    assert!(main.snippet.ends_with("    return 0;\n}"));
}

#[test]
fn c_tag_uses_the_same_scanner() {
    let cpp = extract_functions(THERMOSTAT_CPP, "cpp");
    let c = extract_functions(THERMOSTAT_CPP, "c");
    assert_eq!(cpp.functions, c.functions);
}

#[test]
fn javascript_fixture_finds_declarations_arrows_and_methods() {
    let extraction = extract_functions(CART_JS, "javascript");

    assert_eq!(
        extraction.names(),
        vec!["subtotal", "withTax", "constructor", "add", "total", "checkout"]
    );

    let snippets: Vec<&str> = extraction.functions.iter().map(|f| f.snippet.as_str()).collect();
    assert_snippets_are_verbatim(CART_JS, &snippets);

    let subtotal = &extraction.functions[0];
    assert_eq!(
        subtotal.snippet,
        "function subtotal(items) {\n  return items.reduce((sum, item) => {\n    return sum + item.price * item.qty;\n  }, 0);\n}"
    );

    let checkout = &extraction.functions[5];
    assert!(checkout.snippet.starts_with("async function checkout(cart, api) {"));
}

#[test]
fn unsupported_language_is_empty_with_warning() {
    let extraction = extract_functions(INVENTORY_PY, "fortran");
    assert!(extraction.functions.is_empty());
    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(extraction.diagnostics[0].message, "Unsupported language: fortran");
}
