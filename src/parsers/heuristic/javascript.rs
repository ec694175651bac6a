use super::HeaderScanner;
use std::sync::LazyLock;

/// `function name(...) {`, optionally `async` or a generator.
pub const FUNCTION_DECLARATION: &str = r"(?m)(?P<decl>\b(?:async[ \t]+)?function\b[ \t]*\*?[ \t]*(?P<name>[A-Za-z_$][\w$]*))[ \t]*\([^;{}]*?\)\s*\{";

/// `const name = function (...) {` and arrow functions with a block body.
pub const ASSIGNED_FUNCTION: &str = r"(?m)(?P<decl>\b(?:const|let|var)[ \t]+(?P<name>[A-Za-z_$][\w$]*)[ \t]*=[ \t]*(?:async\b[ \t]*)?(?:function\b[ \t]*\*?[ \t]*[\w$]*[ \t]*\([^;{}]*?\)|\([^;{}]*?\)[ \t]*=>|[A-Za-z_$][\w$]*[ \t]*=>))\s*\{";

/// Assignments to a member, such as `module.exports.run = function (...) {`.
pub const MEMBER_ASSIGNMENT: &str = r"(?m)(?P<decl>\b(?P<name>[A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)+)[ \t]*=[ \t]*(?:async\b[ \t]*)?(?:function\b[ \t]*\*?[ \t]*[\w$]*[ \t]*\([^;{}]*?\)|\([^;{}]*?\)[ \t]*=>|[A-Za-z_$][\w$]*[ \t]*=>))\s*\{";

/// Class-style methods at the start of a line, `#private` ones included.
/// Parameters may not contain parentheses so that calls taking a callback
/// are not mistaken for methods.
pub const METHOD: &str = r"(?m)^[ \t]*(?P<decl>(?:(?:static|async|get|set)[ \t]+)*\*?(?P<name>#?[A-Za-z_$][\w$]*))[ \t]*\([^;{}()]*\)[ \t]*\{";

pub const RESERVED: &[&str] = &[
    "if", "for", "while", "switch", "catch", "function", "return", "with", "else", "do",
];

static SCANNER: LazyLock<HeaderScanner> = LazyLock::new(|| {
    HeaderScanner::new(&[FUNCTION_DECLARATION, ASSIGNED_FUNCTION, MEMBER_ASSIGNMENT, METHOD], RESERVED)
});

pub fn scanner() -> &'static HeaderScanner {
    &SCANNER
}
