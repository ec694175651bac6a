use super::HeaderScanner;
use std::sync::LazyLock;

/// Return-type tokens on the header line, a possibly qualified name
/// (`Foo::bar`, `Foo::~Foo`, `Foo::operator==`), a parameter list, then
/// anything except `;` up to the opening brace. The tail covers `const`,
/// `override` and constructor initializer lists, including brace-initialized
/// members such as `a{x}`. The body brace must follow a non-word character
/// so that an initializer brace is never taken for it.
pub const FUNCTION_HEADER: &str = r"(?m)^[ \t]*(?P<decl>(?:[A-Za-z_][\w:<>,*&~]*[ \t*&]+)*(?P<name>(?:[A-Za-z_]\w*::)*operator[ \t]*[^\s(]+|~?[A-Za-z_]\w*(?:::~?[A-Za-z_]\w*)*))[ \t]*\([^;{}]*?\)(?:[^;{}]*?\w\{[^;{}]*\})*(?:[^;{}]*?[^\w;{}])?\{";

pub const RESERVED: &[&str] = &[
    "if", "for", "while", "switch", "catch", "return", "else", "do", "sizeof",
];

static SCANNER: LazyLock<HeaderScanner> =
    LazyLock::new(|| HeaderScanner::new(&[FUNCTION_HEADER], RESERVED));

pub fn scanner() -> &'static HeaderScanner {
    &SCANNER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(source: &str) -> Vec<String> {
        scanner().scan(source).into_iter().map(|f| f.name).collect()
    }

    #[test]
    fn finds_plain_c_functions() {
        let source = "static int add(int a, int b) {\n    return a + b;\n}\n\nvoid noop(void) {}\n";
        assert_eq!(names(source), vec!["add", "noop"]);
    }

    #[test]
    fn ignores_prototypes_and_control_blocks() {
        let source = "int add(int a, int b);\nint main(void) {\n    if (add(1, 2)) {\n        return 1;\n    }\n    return 0;\n}\n";
        assert_eq!(names(source), vec!["main"]);
    }

    #[test]
    fn finds_qualified_methods_and_constructors() {
        let source = "Foo::Foo(int x) : value_(x) {\n}\n\nFoo::~Foo() {\n}\n\nconst std::string& Foo::name() const {\n    return name_;\n}\n";
        assert_eq!(names(source), vec!["Foo::Foo", "Foo::~Foo", "Foo::name"]);
    }

    #[test]
    fn finds_methods_inside_class_bodies() {
        let source = "class Counter {\npublic:\n    Counter() : n(0) {}\n    void bump() {\n        n++;\n    }\nprivate:\n    int n;\n};\n";
        assert_eq!(names(source), vec!["Counter", "bump"]);
    }

    #[test]
    fn pointer_return_types() {
        let source = "char *copy(const char *s) {\n    return strdup(s);\n}\n";
        let found = scanner().scan(source);
        assert_eq!(found[0].name, "copy");
        assert_eq!(&source[found[0].start..found[0].end], source.trim_end());
    }

    #[test]
    fn header_may_span_lines() {
        let source = "int sum(int a,\n        int b)\n{\n    return a + b;\n}\n";
        let found = scanner().scan(source);
        assert_eq!(found.len(), 1);
        assert_eq!(&source[found[0].start..found[0].end], source.trim_end());
    }

    #[test]
    fn brace_initialized_members_stay_in_the_header() {
        let source = "A::A(int x) : a{x}, b(2) {\n    run();\n}\n";
        let found = scanner().scan(source);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A::A");
        assert_eq!(&source[found[0].start..found[0].end], source.trim_end());
    }

    #[test]
    fn operator_overloads() {
        let source = "bool operator==(const A& o) const {\n    return x == o.x;\n}\nint foo() {\n    return 1;\n}\n\nVec Vec::operator+(const Vec& o) const {\n    return Vec{x + o.x};\n}\n";
        assert_eq!(names(source), vec!["operator==", "foo", "Vec::operator+"]);
    }
}
