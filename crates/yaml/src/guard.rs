//! Lexical checks run before YAML text reaches the parser.
//!
//! The YAML parser would accept several things that have no place in a document derived from
//! JSON: tab indentation (which some parsers silently treat as spaces), anchors and aliases,
//! tags, directives and multiple documents. These are refused here, with a line number, so they
//! can never be reinterpreted. So are numbers JSON would write differently (`0x1F`, `+5`, `1.50`),
//! since the parser keeps only their value.

use crate::convert::canonical_number;
use crate::{YamlError, YamlResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quote {
    Single,
    Double,
}

#[derive(Debug, Default)]
struct Scanner {
    /// An open quoted scalar carried over from a previous line.
    quote: Option<Quote>,
    flow_depth: usize,
    /// Column of the node that owns an open block scalar (`|` or `>`): its mapping key, or its
    /// `-` entry. Content lines are indented further than this.
    block_parent: Option<usize>,
    seen_content: bool,
    ended: bool,
}

/// Checks `text` line by line.
///
/// # Errors
///
/// Returns [`YamlError::TabIndentation`] or [`YamlError::UnsupportedSyntax`] for the first
/// offending line.
pub(crate) fn check(text: &str) -> YamlResult<()> {
    let mut scanner = Scanner::default();
    for (index, line) in text.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        scanner.line(index + 1, line)?;
    }
    Ok(())
}

fn unsupported(line: usize, message: &str) -> YamlError {
    YamlError::UnsupportedSyntax {
        line,
        message: message.to_owned(),
    }
}

impl Scanner {
    fn line(&mut self, number: usize, line: &str) -> YamlResult<()> {
        let content = line.trim_start_matches(&[' ', '\t'][..]);
        let blank = content.is_empty();
        let spaces = line.len() - line.trim_start_matches(' ').len();

        if let Some(parent) = self.block_parent {
            if blank || spaces > parent {
                return Ok(());
            }
            self.block_parent = None;
        }

        if self.quote.is_some() {
            return self.scan(number, line, 0);
        }
        if blank {
            return Ok(());
        }

        let indent = line.len() - content.len();
        if line[..indent].contains('\t') {
            return Err(YamlError::TabIndentation { line: number });
        }
        if content.starts_with('#') {
            return Ok(());
        }

        if indent == 0 {
            if content.starts_with('%') {
                return Err(unsupported(number, "directives are not supported"));
            }
            if content == "..." {
                self.ended = true;
                return Ok(());
            }
            if content == "---" || content.starts_with("--- ") {
                if self.seen_content || self.ended {
                    return Err(unsupported(number, "multiple documents are not supported"));
                }
                return self.scan(number, line, 3);
            }
        }

        if self.ended {
            return Err(unsupported(number, "multiple documents are not supported"));
        }
        self.seen_content = true;
        self.scan(number, line, indent)
    }

    /// Walks one line from byte offset `start`, tracking quotes and flow collections, and
    /// rejects node properties (`&`, `*`, `!`) wherever a node may begin.
    fn scan(&mut self, number: usize, line: &str, start: usize) -> YamlResult<()> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        let chars: Vec<char> = line[start..].chars().collect();
        let mut at_node = self.quote.is_none();
        let mut after_space = true;
        let mut node_start = indent;
        let mut key_column: Option<usize> = None;
        let mut entry_column: Option<usize> = None;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            match self.quote {
                Some(Quote::Double) => {
                    if c == '\\' {
                        i += 2;
                        continue;
                    }
                    if c == '"' {
                        self.quote = None;
                        at_node = false;
                    }
                    i += 1;
                    continue;
                }
                Some(Quote::Single) => {
                    if c == '\'' {
                        if next == Some('\'') {
                            i += 2;
                            continue;
                        }
                        self.quote = None;
                        at_node = false;
                    }
                    i += 1;
                    continue;
                }
                None => {}
            }

            if c == ' ' || c == '\t' {
                after_space = true;
                i += 1;
                continue;
            }
            if c == '#' && after_space {
                break;
            }
            let separated = next.map_or(true, |n| n == ' ' || n == '\t');

            if at_node {
                match c {
                    '&' => return Err(unsupported(number, "anchors are not supported")),
                    '*' => return Err(unsupported(number, "aliases are not supported")),
                    '!' => return Err(unsupported(number, "tags are not supported")),
                    '"' => {
                        self.quote = Some(Quote::Double);
                        node_start = start + i;
                        at_node = false;
                    }
                    '\'' => {
                        self.quote = Some(Quote::Single);
                        node_start = start + i;
                        at_node = false;
                    }
                    '[' | '{' => self.flow_depth += 1,
                    ']' | '}' if self.flow_depth > 0 => {
                        self.flow_depth -= 1;
                        at_node = false;
                    }
                    ',' if self.flow_depth > 0 => {}
                    '-' if separated => entry_column = Some(start + i),
                    '?' | ':' if separated => {}
                    '|' | '>' if self.flow_depth == 0 => {
                        self.block_parent = Some(key_column.or(entry_column).unwrap_or(indent));
                        return Ok(());
                    }
                    _ => {
                        node_start = start + i;
                        at_node = false;
                        if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') {
                            check_number(number, &plain_token(&chars[i..], self.flow_depth > 0))?;
                        }
                    }
                }
            } else if c == ':'
                && (separated || (self.flow_depth > 0 && matches!(next, Some(',' | ']' | '}'))))
            {
                if self.flow_depth == 0 {
                    key_column = Some(node_start);
                }
                at_node = true;
            } else if self.flow_depth > 0 {
                match c {
                    ',' => at_node = true,
                    ']' | '}' => self.flow_depth -= 1,
                    _ => {}
                }
            }

            after_space = false;
            i += 1;
        }
        Ok(())
    }
}

/// The plain scalar starting at `chars[0]`, up to a comment, a key separator or the end of a flow
/// entry.
fn plain_token(chars: &[char], in_flow: bool) -> String {
    let mut token = String::new();
    for (index, &c) in chars.iter().enumerate() {
        let next = chars.get(index + 1).copied();
        if (c == ' ' || c == '\t') && next == Some('#') {
            break;
        }
        if c == ':'
            && (next.map_or(true, |n| n == ' ' || n == '\t')
                || (in_flow && matches!(next, Some(',' | ']' | '}'))))
        {
            break;
        }
        if in_flow && matches!(c, ',' | ']' | '}') {
            break;
        }
        token.push(c);
    }
    token.trim_end().to_owned()
}

/// Rejects a token the YAML parser reads as a finite number unless it is already in canonical
/// JSON form. Non-finite values are left to the post-parse check.
fn check_number(line: usize, token: &str) -> YamlResult<()> {
    let Ok(serde_yaml::Value::Number(parsed)) = serde_yaml::from_str::<serde_yaml::Value>(token)
    else {
        return Ok(());
    };
    if parsed.as_f64().is_some_and(|float| !float.is_finite()) {
        return Ok(());
    }
    match canonical_number(token) {
        Some(canonical) if canonical == token => Ok(()),
        Some(canonical) => Err(unsupported(
            line,
            &format!("number '{token}' must be written as {canonical}"),
        )),
        None => Err(unsupported(line, &format!("'{token}' is not a JSON number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_line(text: &str) -> usize {
        match check(text) {
            Err(YamlError::TabIndentation { line }) => line,
            Err(YamlError::UnsupportedSyntax { line, .. }) => line,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn plain_documents_pass() {
        let text = "\
phenopacket:
  id: example-1
  subject:
    id: 'patient #1'
    note: \"a & b * c ! d\"
  tags: [a, b, 'c, d']
  phenotypicFeatures:
  - type:
      id: HP:0001250
      label: Seizure # trailing comment
";
        assert!(check(text).is_ok());
    }

    #[test]
    fn tab_in_indentation_is_rejected() {
        assert_eq!(rejected_line("a:\n\tb: 1\n"), 2);
        assert_eq!(rejected_line("a:\n  \tb: 1\n"), 2);
    }

    #[test]
    fn tab_after_content_is_allowed() {
        assert!(check("a:\tb\n").is_ok());
    }

    #[test]
    fn anchors_aliases_and_tags_are_rejected() {
        assert_eq!(rejected_line("a: &anchor 1\nb: *anchor\n"), 1);
        assert_eq!(rejected_line("a: 1\nb: *anchor\n"), 2);
        assert_eq!(rejected_line("a: !!str 1\n"), 1);
        assert_eq!(rejected_line("- [1, *x]\n"), 1);
        assert_eq!(rejected_line("list:\n- &item x\n"), 2);
    }

    #[test]
    fn node_property_characters_inside_scalars_are_fine() {
        assert!(check("a: b&c\nd: e*f\ng: h!\nurl: http://example.org/#x\n").is_ok());
    }

    #[test]
    fn block_scalar_content_is_not_scanned() {
        let text = "note: |\n  *not an alias*\n  &not an anchor\nnext: 1\n";
        assert!(check(text).is_ok());
        assert_eq!(rejected_line("note: >-\n  text\nnext: *x\n"), 3);
    }

    #[test]
    fn block_scalar_in_a_sequence_entry_ends_at_the_next_key() {
        let text = "items:\n- note: |\n    line\n  ref: !!str 5\n";
        assert_eq!(rejected_line(text), 4);

        let text = "items:\n- note: |\n    *literal*\n  ref: 5\n- |\n  &literal\n- *x\n";
        assert_eq!(rejected_line(text), 7);
    }

    #[test]
    fn directives_and_multiple_documents_are_rejected() {
        assert_eq!(rejected_line("%YAML 1.2\n---\na: 1\n"), 1);
        assert_eq!(rejected_line("a: 1\n---\nb: 2\n"), 2);
        assert_eq!(rejected_line("a: 1\n...\nb: 2\n"), 3);
        assert!(check("---\na: 1\n").is_ok());
        assert!(check("a: 1\n...\n").is_ok());
    }

    #[test]
    fn yaml_only_number_forms_are_rejected() {
        assert_eq!(rejected_line("n: 0x1F\n"), 1);
        assert_eq!(rejected_line("a: 1\nn: 0o17\n"), 2);
        assert_eq!(rejected_line("m: +5\n"), 1);
        assert_eq!(rejected_line("list: [1, 0x1f]\n"), 1);
        assert_eq!(rejected_line("- 1.50 # trailing zero\n"), 1);
    }

    #[test]
    fn canonical_numbers_and_number_like_strings_pass() {
        let text = "\
count: 3
ratio: 0.5
value: 280.0
negative: -4
tiny: 1e-7
date: 2023-10-09
grouped: 1_000
version: '0x1F'
flow: [1, 2.5, -3]
infinite: .inf
";
        assert!(check(text).is_ok());
    }

    #[test]
    fn quoted_scalars_may_span_lines() {
        let text = "a: \"first\n  *still quoted\"\nb: 1\n";
        assert!(check(text).is_ok());
    }
}
