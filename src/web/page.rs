use crate::parsers::{Language, detect_language};
use crate::report::{AnalysisReport, Requirement, Severity};
use std::fmt::Write;

/// What the single page shows.
#[derive(Debug, Default)]
pub struct PageModel<'a> {
    pub language_tag: &'a str,
    pub code: &'a str,
    pub error: Option<&'a str>,
    pub report: Option<&'a AnalysisReport>,
}

impl<'a> PageModel<'a> {
    /// The form pre-filled from the last report, if any.
    pub fn for_report(report: Option<&'a AnalysisReport>) -> Self {
        match report {
            Some(report) => PageModel {
                language_tag: &report.document.language_tag,
                code: &report.document.text,
                error: None,
                report: Some(report),
            },
            None => PageModel::default(),
        }
    }
}

pub fn render(model: &PageModel<'_>) -> String {
    let selected = detect_language(model.language_tag).unwrap_or_default();

    let mut options = String::new();
    for language in Language::ALL {
        let _ = write!(
            options,
            r#"<option value="{}"{}>{}</option>"#,
            language.tag(),
            if language == selected { " selected" } else { "" },
            language.display_name()
        );
    }

    let error = model
        .error
        .map(|message| format!(r#"<div class="alert error">⚠️ {}</div>"#, html_escape(message)))
        .unwrap_or_default();

    let results = model.report.map(render_report).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Code → Intelligent Requirements</title>
    <meta charset="utf-8">
    <style>
        body {{ font-family: sans-serif; margin: 0 auto; max-width: 60rem; padding: 1rem; }}
        header {{ text-align: center; margin-bottom: 30px; }}
        textarea {{ width: 100%; height: 300px; font-family: monospace; }}
        .alert {{ padding: 0.75rem; border-radius: 6px; margin: 0.5rem 0; }}
        .error {{ background: #fde2e2; }}
        .warning {{ background: #fff4d6; }}
        .success {{ background: #e3f6e8; }}
        .failed {{ background: #fde2e2; }}
        details {{ border: 1px solid #ddd; border-radius: 6px; margin: 0.5rem 0; padding: 0.5rem; }}
        pre {{ background: #f6f8fa; padding: 0.75rem; overflow-x: auto; }}
    </style>
</head>
<body>
    <header>
        <h1>🕵️ Legacy Code → Intelligent Requirements</h1>
        <h3>📘 Instructions</h3>
        <p>Paste your full source code below. The app will extract both system-level insights and function-specific requirements.</p>
    </header>
    <main>
        <h2>🔍 Code Input</h2>
        {error}
        <form method="post" action="/analyze">
            <label for="language">Language</label>
            <select id="language" name="language">{options}</select>
            <textarea id="code" name="code">{code}</textarea>
            <button type="submit">Analyze</button>
        </form>
        {results}
    </main>
</body>
</html>
"#,
        error = error,
        options = options,
        code = html_escape(model.code),
        results = results,
    )
}

fn render_report(report: &AnalysisReport) -> String {
    let mut html = String::new();

    for diagnostic in &report.diagnostics {
        let class = match diagnostic.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        let _ = write!(
            html,
            r#"<div class="alert {}">{}</div>"#,
            class,
            html_escape(&diagnostic.message)
        );
    }

    html.push_str("<h2>📋 High-Level System Requirements</h2>");
    for (position, requirement) in report.system_requirements().enumerate() {
        let _ = write!(
            html,
            r#"<div class="alert {}">{}. {}</div>"#,
            requirement_class(requirement),
            position + 1,
            html_escape(&requirement.text)
        );
    }

    let code_class = detect_language(&report.document.language_tag)
        .map(|language| language.tag())
        .unwrap_or("plaintext");

    html.push_str("<h2>🧩 Function-Level Requirements</h2>");
    for (position, requirement) in report.functional_requirements().enumerate() {
        let _ = write!(
            html,
            r#"<details class="{}"><summary>{}. {}</summary><pre><code class="language-{}">{}</code></pre></details>"#,
            requirement_class(requirement),
            position + 1,
            html_escape(&requirement.text),
            code_class,
            html_escape(requirement.source_snippet.as_deref().unwrap_or_default())
        );
    }

    let _ = write!(
        html,
        r#"<h2>📤 Export Requirements</h2><a class="download" href="/reports/{}/requirements.csv" download="{}">📥 Download Requirements CSV</a>"#,
        report.id,
        report.csv_file_name()
    );

    html
}

fn requirement_class(requirement: &Requirement) -> &'static str {
    if requirement.failed { "failed" } else { "success" }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
