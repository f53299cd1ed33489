//! Comment stripping.
//!
//! Everything from `--` through end-of-line is removed before the source
//! ever reaches the tokenizer; newlines are preserved so line numbers stay
//! aligned with the original file. This is a line-wise textual substitution,
//! exactly as in the original preprocessor — it does not know about string
//! literals, so `--` inside a string literal is stripped too (the language
//! has no use for `--` inside a string, so this is not a practical concern).

pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for (i, line) in source.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match line.find("--") {
            Some(idx) => out.push_str(&line[..idx]),
            None => out.push_str(line),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_comment() {
        assert_eq!(strip_comments("local x = 1 -- set x\n"), "local x = 1 \n");
    }

    #[test]
    fn leaves_code_without_comments_untouched() {
        assert_eq!(strip_comments("print(1)\nprint(2)"), "print(1)\nprint(2)");
    }

    #[test]
    fn strips_whole_line_comment() {
        assert_eq!(strip_comments("-- just a comment\nprint(1)"), "\nprint(1)");
    }
}
