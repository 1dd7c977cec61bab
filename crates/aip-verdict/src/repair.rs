/// Locates the outermost `{ ... }` object in `text`, tolerating surrounding
/// markdown fences or prose, then strips trailing commas before `}`/`]`.
/// Returns the repaired slice, ready to hand to a JSON parser.
pub fn extract_and_repair(text: &str) -> Option<String> {
    let start = text.find('{')?;
    let end = find_matching_brace(text, start)?;
    let slice = &text[start..=end];
    Some(strip_trailing_commas(slice))
}

fn find_matching_brace(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &byte) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

fn strip_trailing_commas(slice: &str) -> String {
    let mut result = String::with_capacity(slice.len());
    let chars: Vec<char> = slice.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == '}' || chars[j] == ']') {
                i += 1;
                continue;
            }
        }
        result.push(chars[i]);
        i += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_from_surrounding_prose() {
        let text = "Here is my analysis:\n```json\n{\"verdict\":\"clear\"}\n```\nThat's my answer.";
        let repaired = extract_and_repair(text).unwrap();
        assert_eq!(repaired, "{\"verdict\":\"clear\"}");
    }

    #[test]
    fn strips_trailing_comma_before_closing_brace() {
        let text = "{\"a\":1,}";
        let repaired = extract_and_repair(text).unwrap();
        assert_eq!(repaired, "{\"a\":1}");
    }

    #[test]
    fn strips_trailing_comma_before_closing_bracket() {
        let text = r#"{"a":[1,2,]}"#;
        let repaired = extract_and_repair(text).unwrap();
        assert_eq!(repaired, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn handles_nested_braces_inside_strings() {
        let text = r#"{"description":"contains a { brace }"}"#;
        let repaired = extract_and_repair(text).unwrap();
        assert_eq!(repaired, text);
    }

    #[test]
    fn returns_none_when_no_opening_brace() {
        assert!(extract_and_repair("no object here").is_none());
    }

    #[test]
    fn returns_none_when_brace_unmatched() {
        assert!(extract_and_repair("{\"a\":1").is_none());
    }
}
