//! Normalization of raw model output.

use once_cell::sync::Lazy;
use regex::Regex;

// Opening fence with an optional language tag on its own line, lazy body,
// closing fence at the very end of the (already trimmed) response.
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A```(?:[\w+#.-]*[ \t\r]*\n)?(.*?)\r?\n?[ \t]*```\z")
        .expect("fence pattern is a valid regex")
});

// A line holding nothing but a fence and an optional language tag.
static FENCE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*```[\w+#.-]*[ \t\r]*$").expect("fence line pattern is a valid regex")
});

/// Strips a single surrounding Markdown code fence, if present.
///
/// A response that is exactly one fenced block yields the block body, trimmed.
/// Anything else (no fence, several blocks, prose around the block) is
/// returned trimmed but otherwise untouched.
pub fn strip_code_fence(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(captures) = FENCED_BLOCK.captures(trimmed) {
        let body = captures.get(1).map_or("", |m| m.as_str());
        if !contains_fence_line(body) {
            return body.trim().to_string();
        }
    }
    trimmed.to_string()
}

fn contains_fence_line(body: &str) -> bool {
    FENCE_LINE.is_match(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_javascript_fence() {
        let raw = "```javascript\nfunction onOpen(){...}\n```";
        assert_eq!(strip_code_fence(raw), "function onOpen(){...}");
    }

    #[test]
    fn test_strips_fence_without_language_tag() {
        let raw = "```\nconst a = 1;\nconst b = 2;\n```";
        assert_eq!(strip_code_fence(raw), "const a = 1;\nconst b = 2;");
    }

    #[test]
    fn test_allows_trailing_whitespace_after_closing_fence() {
        let raw = "```gas\nfunction main() {}\n```  \n\n";
        assert_eq!(strip_code_fence(raw), "function main() {}");
    }

    #[test]
    fn test_body_is_trimmed() {
        let raw = "```js\n\n   function main() {}   \n\n```";
        assert_eq!(strip_code_fence(raw), "function main() {}");
    }

    #[test]
    fn test_unfenced_input_is_only_trimmed() {
        let raw = "  function main() {\n  return 1;\n}\n ";
        assert_eq!(strip_code_fence(raw), "function main() {\n  return 1;\n}");
    }

    #[test]
    fn test_two_blocks_are_left_alone() {
        let raw = "```js\na()\n```\n\n```js\nb()\n```";
        assert_eq!(strip_code_fence(raw), raw);
    }

    #[test]
    fn test_backticks_inside_template_literal_do_not_block_stripping() {
        let raw = "```javascript\nconst md = `\n```sheet: ${name}\n`;\n```";
        assert_eq!(strip_code_fence(raw), "const md = `\n```sheet: ${name}\n`;");
    }

    #[test]
    fn test_prose_before_fence_is_left_alone() {
        let raw = "Here you go:\n```js\na()\n```";
        assert_eq!(strip_code_fence(raw), raw);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "```javascript\nfunction onOpen(){...}\n```",
            "plain text",
            "```\n```",
            "  ```js\nx\n```  ",
        ];
        for input in inputs {
            let once = strip_code_fence(input);
            assert_eq!(strip_code_fence(&once), once, "input: {:?}", input);
        }
    }
}
