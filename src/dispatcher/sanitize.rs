//! Input normalization
//!
//! `sanitize` is what every matcher sees: lower case, no `.`/`?`/`!`, curly
//! apostrophes folded to `'`, trimmed. `clean` does the same but keeps letter
//! case, for text the bot stores and echoes back (task descriptions).

const STRIPPED: [char; 3] = ['.', '?', '!'];
const APOSTROPHES: [char; 2] = ['\u{2018}', '\u{2019}'];

/// Strip punctuation and surrounding whitespace, keeping letter case
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| !STRIPPED.contains(c))
        .map(|c| if APOSTROPHES.contains(&c) { '\'' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Case-fold, strip punctuation and trim. Idempotent.
pub fn sanitize(raw: &str) -> String {
    clean(&raw.to_lowercase())
}

/// Both forms of one line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// Punctuation stripped, case kept
    pub cleaned: String,
    /// What the matchers compare against
    pub normalized: String,
}

impl Utterance {
    pub fn new(raw: &str) -> Self {
        Self {
            cleaned: clean(raw),
            normalized: sanitize(raw),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Match `command` at the start of `text` (ASCII case-insensitive) as a whole word
/// and return the trimmed remainder.
pub fn strip_command<'a>(text: &'a str, command: &str) -> Option<&'a str> {
    let head = text.get(..command.len())?;
    if !head.eq_ignore_ascii_case(command) {
        return None;
    }

    let rest = &text[command.len()..];
    if rest.is_empty() {
        Some(rest)
    } else if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Split at the last occurrence of `separator` (ASCII case-insensitive)
pub fn rsplit_once_ci<'a>(text: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let pos = text
        .to_ascii_lowercase()
        .rfind(&separator.to_ascii_lowercase())?;
    Some((&text[..pos], &text[pos + separator.len()..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_sanitize_basic() {
        assert_eq!(sanitize("  What is Phishing?! "), "what is phishing");
        assert_eq!(sanitize("MENU."), "menu");
        assert_eq!(sanitize("?!."), "");
    }

    #[test]
    fn test_sanitize_trims_after_stripping() {
        assert_eq!(sanitize("! exit !"), "exit");
    }

    #[test]
    fn test_curly_apostrophes_fold_to_straight() {
        assert_eq!(sanitize("What\u{2019}s next?"), "what's next");
        assert_eq!(clean("Don\u{2018}t click"), "Don't click");
    }

    #[test]
    fn test_clean_keeps_case() {
        assert_eq!(clean(" add task Buy milk. "), "add task Buy milk");
    }

    #[test]
    fn test_utterance() {
        let u = Utterance::new("Add Task Buy Milk!");
        assert_eq!(u.cleaned, "Add Task Buy Milk");
        assert_eq!(u.normalized, "add task buy milk");
        assert!(Utterance::new("   ").is_empty());
    }

    #[test]
    fn test_strip_command() {
        assert_eq!(strip_command("add task Buy milk", "add task"), Some("Buy milk"));
        assert_eq!(strip_command("ADD TASK   Buy milk", "add task"), Some("Buy milk"));
        assert_eq!(strip_command("add task", "add task"), Some(""));
        assert_eq!(strip_command("add tasks", "add task"), None);
        assert_eq!(strip_command("answers", "answer"), None);
        assert_eq!(strip_command("add", "add task"), None);
    }

    #[test]
    fn test_strip_command_non_ascii_boundary() {
        assert_eq!(strip_command("añswer 1", "answer"), None);
    }

    #[test]
    fn test_rsplit_once_ci() {
        assert_eq!(
            rsplit_once_ci("check what's at home AT 18:00", " at "),
            Some(("check what's at home", "18:00"))
        );
        assert_eq!(rsplit_once_ci("no time", " at "), None);
    }

    #[quickcheck]
    fn sanitize_is_idempotent(input: String) -> bool {
        let once = sanitize(&input);
        sanitize(&once) == once
    }

    #[quickcheck]
    fn sanitize_output_has_no_stripped_chars(input: String) -> bool {
        let out = sanitize(&input);
        !out.contains(STRIPPED) && !out.contains(APOSTROPHES)
    }
}
