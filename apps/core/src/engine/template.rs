//! Two-slot template filling.

/// Substitutes `{0}` with `first` and `{1}` with `second`.
///
/// The template is scanned once, so text inside the substituted values is
/// never itself treated as a slot. A slot that appears more than once is
/// filled every time it appears.
pub fn fill(template: &str, first: &str, second: &str) -> String {
    let mut out = String::with_capacity(template.len() + first.len() + second.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{0}") {
            out.push_str(first);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{1}") {
            out.push_str(second);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_both_slots() {
        assert_eq!(
            fill("A state where {0} and {1} merge", "Time Field", "Logic Field"),
            "A state where Time Field and Logic Field merge"
        );
    }

    #[test]
    fn test_repeated_slot() {
        assert_eq!(
            fill("{0} precedes {1} which precedes {0}", "A", "B"),
            "A precedes B which precedes A"
        );
    }

    #[test]
    fn test_values_are_not_rescanned() {
        assert_eq!(fill("{0} / {1}", "{1}", "x"), "{1} / x");
    }

    #[test]
    fn test_stray_braces_are_kept() {
        assert_eq!(fill("{x} {0}", "a", "b"), "{x} a");
        assert_eq!(fill("trailing {", "a", "b"), "trailing {");
    }
}
