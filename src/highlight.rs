//! Best-effort keyword highlighting for HTML output.
//!
//! Highlighting only ever wraps tokens in `<span>` elements; the
//! character content of a listing is never altered beyond HTML escaping,
//! so stripping tags and unescaping entities reproduces the body exactly.
//! Languages without a keyword table degrade to plain escaped text.

/// Returns the keyword table for a canonical language name, if one exists.
pub fn keywords_for(language: &str) -> Option<&'static [&'static str]> {
    match language {
        "kotlin" => Some(&[
            "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
            "interface", "is", "null", "object", "package", "return", "super", "this", "throw",
            "true", "try", "typealias", "val", "var", "when", "while", "by", "catch", "constructor",
            "delegate", "dynamic", "field", "file", "finally", "get", "import", "init", "param",
            "property", "receiver", "set", "setparam", "where", "also", "let", "with", "context",
            "sealed", "data", "override", "open", "companion",
        ]),
        "java" => Some(&[
            "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
            "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
            "finally", "float", "for", "if", "implements", "import", "instanceof", "int",
            "interface", "long", "native", "new", "package", "permits", "private", "protected",
            "public", "record", "return", "sealed", "short", "static", "super", "switch",
            "synchronized", "this", "throw", "throws", "transient", "try", "var", "void",
            "volatile", "while", "true", "false", "null",
        ]),
        "scala" => Some(&[
            "abstract", "case", "catch", "class", "def", "do", "else", "enum", "extends",
            "extension", "false", "final", "finally", "for", "given", "if", "implicit", "import",
            "lazy", "match", "new", "null", "object", "override", "package", "private",
            "protected", "return", "sealed", "super", "then", "this", "throw", "trait", "true",
            "try", "type", "using", "val", "var", "while", "with", "yield",
        ]),
        "lisp" => Some(&[
            "defun", "defmacro", "defvar", "defparameter", "lambda", "let", "let*", "if", "cond",
            "when", "unless", "loop", "dolist", "dotimes", "progn", "setq", "setf", "quote",
            "car", "cdr", "cons", "list", "nil", "t",
        ]),
        _ => None,
    }
}

/// Escapes text for literal inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        escape_char(ch, out);
    }
}

fn escape_char(ch: char, out: &mut String) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(ch),
    }
}

/// Renders one body line as escaped HTML with keywords wrapped in
/// `<span class="kw">` elements.
///
/// The line is scanned once; identifier-shaped runs are looked up in the
/// keyword table and everything else passes through escaped. Lisp symbols
/// may contain `*`, so it is part of the identifier shape.
pub fn highlight_line(line: &str, keywords: &[&str], out: &mut String) {
    let mut token = String::new();

    for ch in line.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '*' {
            token.push(ch);
            continue;
        }
        flush_token(&token, keywords, out);
        token.clear();
        escape_char(ch, out);
    }
    flush_token(&token, keywords, out);
}

fn flush_token(token: &str, keywords: &[&str], out: &mut String) {
    if token.is_empty() {
        return;
    }
    if keywords.contains(&token) {
        out.push_str("<span class=\"kw\">");
        escape_into(token, out);
        out.push_str("</span>");
    } else {
        escape_into(token, out);
    }
}
