/// Code skeleton generation and line counting.
use std::fmt;
use std::str::FromStr;

use super::errors::PowerError;
use crate::types::LineCount;

/// Target syntax for generated skeletons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    TypeScript,
}

impl Language {
    /// Every supported language, in the order shown to users.
    pub const ALL: [Self; 3] = [Self::Python, Self::JavaScript, Self::TypeScript];

    /// The lowercase name used on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = PowerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| {
                let names = Self::ALL.map(Self::as_str);
                PowerError::invalid_choice("language", s, &names)
            })
    }
}

/// Generate a class skeleton with a constructor and method stubs.
#[must_use]
pub fn generate_class(
    name: &str,
    attributes: &[String],
    methods: &[String],
    language: Language,
) -> String {
    let lines = match language {
        Language::Python => python_class(name, attributes, methods),
        Language::JavaScript => js_class(name, attributes, methods, false),
        Language::TypeScript => js_class(name, attributes, methods, true),
    };
    lines.join("\n")
}

fn python_class(name: &str, attributes: &[String], methods: &[String]) -> Vec<String> {
    let mut lines = vec![
        format!("class {name}:"),
        r#"    """A generated class.""""#.to_owned(),
        String::new(),
    ];

    let params = attributes.join(", ");
    lines.push(format!("    def __init__(self, {params}):"));
    for attr in attributes {
        lines.push(format!("        self.{attr} = {attr}"));
    }
    if attributes.is_empty() {
        lines.push("        pass".to_owned());
    }
    lines.push(String::new());

    for method in methods {
        lines.push(format!("    def {method}(self):"));
        lines.push(format!(r#"        """TODO: Implement {method}.""""#));
        lines.push("        raise NotImplementedError".to_owned());
        lines.push(String::new());
    }

    lines
}

/// JavaScript and TypeScript share one layout; TypeScript adds type annotations.
fn js_class(name: &str, attributes: &[String], methods: &[String], typed: bool) -> Vec<String> {
    let mut lines = vec![format!("class {name} {{")];

    let params = if typed {
        for attr in attributes {
            lines.push(format!("    private {attr}: any;"));
        }
        lines.push(String::new());
        attributes
            .iter()
            .map(|a| format!("{a}: any"))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        attributes.join(", ")
    };

    lines.push(format!("    constructor({params}) {{"));
    for attr in attributes {
        lines.push(format!("        this.{attr} = {attr};"));
    }
    lines.push("    }".to_owned());

    for method in methods {
        lines.push(String::new());
        if typed {
            lines.push(format!("    public {method}(): void {{"));
        } else {
            lines.push(format!("    {method}() {{"));
        }
        lines.push(format!("        // TODO: Implement {method}"));
        lines.push("        throw new Error('Not implemented');".to_owned());
        lines.push("    }".to_owned());
    }

    lines.push("}".to_owned());
    lines
}

/// Generate a function skeleton. `return_type` is only used for Python.
#[must_use]
pub fn generate_function(
    name: &str,
    params: &[String],
    return_type: &str,
    language: Language,
) -> String {
    let params = params.join(", ");
    match language {
        Language::Python => format!(
            "def {name}({params}) -> {return_type}:\n    \"\"\"TODO: Add docstring for {name}.\"\"\"\n    raise NotImplementedError\n"
        ),
        Language::JavaScript | Language::TypeScript => format!(
            "function {name}({params}) {{\n    // TODO: Implement {name}\n    throw new Error('Not implemented');\n}}\n"
        ),
    }
}

/// Comment markers recognized at the start of a trimmed line.
const COMMENT_PREFIXES: [&str; 4] = ["#", "//", "/*", "*"];

/// Count total, code, blank and comment lines.
///
/// Lines are split on `\n`, so the empty string is one blank line and a
/// trailing newline adds a final blank line.
#[must_use]
pub fn count_lines(code: &str) -> LineCount {
    let mut total = 0;
    let mut blank = 0;
    let mut comment = 0;

    for line in code.split('\n') {
        total += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            blank += 1;
        } else if COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            comment += 1;
        }
    }

    LineCount {
        total_lines: total,
        code_lines: total - blank - comment,
        blank_lines: blank,
        comment_lines: comment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_python_class_basic() {
        let result = generate_class("User", &strings(&["name", "email"]), &[], Language::Python);
        assert!(result.contains("class User:"));
        assert!(result.contains("def __init__(self, name, email):"));
        assert!(result.contains("self.name = name"));
        assert!(result.contains("self.email = email"));
        assert!(!result.contains("pass"));
    }

    #[test]
    fn test_python_class_without_attributes() {
        let result = generate_class("Empty", &[], &[], Language::Python);
        assert!(result.contains("def __init__(self, ):"));
        assert!(result.contains("        pass"));
    }

    #[test]
    fn test_python_class_with_methods() {
        let result = generate_class(
            "User",
            &strings(&["name"]),
            &strings(&["save", "delete"]),
            Language::Python,
        );
        assert!(result.contains("    def save(self):"));
        assert!(result.contains("    def delete(self):"));
        assert!(result.contains(r#""""TODO: Implement save.""""#));
        assert!(result.contains("raise NotImplementedError"));
    }

    #[test]
    fn test_javascript_class() {
        let result = generate_class(
            "User",
            &strings(&["name"]),
            &strings(&["save"]),
            Language::JavaScript,
        );
        let expected = "class User {\n    constructor(name) {\n        this.name = name;\n    }\n\n    save() {\n        // TODO: Implement save\n        throw new Error('Not implemented');\n    }\n}";
        assert_eq!(result, expected);
    }

    #[test]
    fn test_typescript_class() {
        let result = generate_class(
            "User",
            &strings(&["name"]),
            &strings(&["save"]),
            Language::TypeScript,
        );
        assert!(result.starts_with("class User {\n    private name: any;\n\n"));
        assert!(result.contains("constructor(name: any)"));
        assert!(result.contains("public save(): void {"));
        assert!(result.ends_with('}'));
    }

    #[test]
    fn test_unsupported_language() {
        let err = "ruby".parse::<Language>().unwrap_err();
        assert!(matches!(err, PowerError::InvalidChoice { ref value, .. } if value == "ruby"));
        assert!(err.to_string().contains("python, javascript, typescript"));
        assert_eq!("typescript".parse::<Language>().unwrap(), Language::TypeScript);
    }

    #[test]
    fn test_python_function() {
        let result = generate_function("calculate", &strings(&["a", "b"]), "None", Language::Python);
        assert!(result.starts_with("def calculate(a, b) -> None:\n"));
        assert!(result.contains("raise NotImplementedError"));
    }

    #[test]
    fn test_javascript_function() {
        let result =
            generate_function("calculate", &strings(&["a", "b"]), "None", Language::JavaScript);
        assert!(result.contains("function calculate(a, b) {"));
        assert!(result.contains("throw new Error"));
        assert_eq!(
            result,
            generate_function("calculate", &strings(&["a", "b"]), "int", Language::TypeScript)
        );
    }

    #[test]
    fn test_count_lines() {
        let code = "def hello():\n    # A comment\n    print(\"Hello\")\n\n# Another comment\n";
        let result = count_lines(code);
        assert_eq!(result.total_lines, 6);
        assert_eq!(result.blank_lines, 2);
        assert_eq!(result.comment_lines, 2);
        assert_eq!(result.code_lines, 2);
    }

    #[test]
    fn test_count_lines_c_style_comments() {
        let result = count_lines("/* header\n * body\n */\nint x;\n// done");
        assert_eq!(result.total_lines, 5);
        assert_eq!(result.comment_lines, 4);
        assert_eq!(result.code_lines, 1);
    }

    #[test]
    fn test_count_lines_empty() {
        let result = count_lines("");
        assert_eq!(result.total_lines, 1);
        assert_eq!(result.blank_lines, 1);
        assert_eq!(result.code_lines, 0);
    }
}
