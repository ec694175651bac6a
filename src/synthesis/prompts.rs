use crate::parsers::Language;

pub fn system_requirements(language: Language, source: &str) -> String {
    format!(
        r#"
You are a systems engineering and coding expert.

Analyze this {language} application as a whole and extract its system-level functional requirements.

Focus on:
• What the system enables the user to do
• How data flows through the application
• What core capabilities the system provides
• Avoid low-level implementation details

Return 5–10 lines, each beginning with "Text: The system shall..."

Code:
{source}
"#
    )
}

pub fn function_requirement(name: &str, snippet: &str) -> String {
    format!(
        r#"
You are a requirements engineer.

Write one formal requirement statement for this function starting with "The system shall..."

Function name: {name}
Code:
{snippet}

Return only the requirement statement without any ID or numbering.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_embeds_language_and_source() {
        let prompt = system_requirements(Language::Cpp, "int main() { return 0; }");
        assert!(prompt.contains("Analyze this C++ application"));
        assert!(prompt.contains("Code:\nint main() { return 0; }\n"));
        assert!(prompt.contains(r#"each beginning with "Text: The system shall...""#));
    }

    #[test]
    fn function_prompt_embeds_name_and_snippet() {
        let prompt = function_requirement("add", "def add(a,b):\n    return a+b");
        assert!(prompt.contains("Function name: add\nCode:\ndef add(a,b):\n    return a+b\n"));
    }
}
