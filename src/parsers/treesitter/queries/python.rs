// `async def` parses as a function_definition with an `async` keyword child,
// and decorators live on the enclosing decorated_definition.
pub const FUNCTION_QUERY: &str = "(function_definition) @node";
