//! Literal replacement — text in, text out, no I/O.

use crate::defaults::Replacement;

/// Result of running a replacement table over one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    pub content: String,
    /// Occurrences replaced, summed over all rules.
    pub replacements: usize,
}

impl Replaced {
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Apply every rule in table order.
///
/// Each rule replaces all non-overlapping occurrences of `from` and sees the
/// output of the rules before it, so a later rule can match text an earlier
/// rule introduced.
pub fn apply_replacements(text: &str, table: &[Replacement]) -> Replaced {
    let mut content = text.to_string();
    let mut replacements = 0;

    for rule in table {
        if rule.from.is_empty() {
            continue;
        }
        let count = content.matches(rule.from.as_str()).count();
        if count == 0 {
            continue;
        }
        content = content.replace(rule.from.as_str(), &rule.to);
        replacements += count;
    }

    Replaced {
        content,
        replacements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn border_table() -> Vec<Replacement> {
        vec![
            Replacement::new("border-[#1A1A1A]", "border-[#333]"),
            Replacement::new("border-[#111]", "border-[#444]"),
        ]
    }

    #[test]
    fn class_attribute_is_rewritten() {
        let out = apply_replacements(r#"className="border-[#1A1A1A] p-4""#, &border_table());
        assert_eq!(out.content, r#"className="border-[#333] p-4""#);
        assert_eq!(out.replacements, 1);
    }

    #[test]
    fn stylesheet_rule_is_rewritten() {
        let out = apply_replacements(
            ".box { border: 1px solid border-[#111]; }",
            &border_table(),
        );
        assert_eq!(out.content, ".box { border: 1px solid border-[#444]; }");
    }

    #[test]
    fn both_tokens_in_one_pass() {
        let text = "<a class=\"border-[#1A1A1A]\"/><b class=\"border-[#111] border-[#111]\"/>";
        let out = apply_replacements(text, &border_table());
        assert_eq!(
            out.content,
            "<a class=\"border-[#333]\"/><b class=\"border-[#444] border-[#444]\"/>"
        );
        assert_eq!(out.replacements, 3);
        assert!(out.changed(text));
    }

    #[test]
    fn untouched_text_is_unchanged() {
        let text = "className=\"border-[#222] border-[#1A1A1B]\"";
        let out = apply_replacements(text, &border_table());
        assert_eq!(out.content, text);
        assert_eq!(out.replacements, 0);
        assert!(!out.changed(text));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let out = apply_replacements("border-[#1a1a1a]", &border_table());
        assert_eq!(out.replacements, 0);
    }

    #[test]
    fn later_rule_sees_earlier_output() {
        let table = vec![Replacement::new("red", "blue"), Replacement::new("blue", "green")];
        let out = apply_replacements("red blue", &table);
        assert_eq!(out.content, "green green");
        assert_eq!(out.replacements, 3);
    }

    #[test]
    fn earlier_rule_can_starve_later_rule() {
        let table = vec![
            Replacement::new("border-[#111]", "border-[#444]"),
            Replacement::new("[#111]", "[#999]"),
        ];
        let out = apply_replacements("border-[#111]", &table);
        assert_eq!(out.content, "border-[#444]");
        assert_eq!(out.replacements, 1);
    }

    #[test]
    fn occurrences_do_not_overlap() {
        let table = vec![Replacement::new("aa", "b")];
        let out = apply_replacements("aaa", &table);
        assert_eq!(out.content, "ba");
        assert_eq!(out.replacements, 1);
    }

    #[test]
    fn replacing_with_same_text_is_not_a_change() {
        let table = vec![Replacement::new("border-[#333]", "border-[#333]")];
        let text = "border-[#333]";
        let out = apply_replacements(text, &table);
        assert!(!out.changed(text));
    }
}
