//! Word-level tokenizer with typographic quote repair.
//!
//! The source text format writes double quotes as doubled back-ticks and
//! doubled single-quotes; those are normalized to a straight `"` before
//! segmentation. Segmentation keeps maximal alphanumeric runs together,
//! keeps `.` and `,` inside a token only when flanked by digits (so `3.5`
//! and `1,000` survive whole), and emits every other non-whitespace
//! character as its own token (so `%`, `$`, `?` detach from words).

/// Tokenize `text` into word-level tokens.
///
/// The returned iterator is lazy and finite; clone it (or call `tokenize`
/// again) to restart. Any input produces a possibly-empty token sequence.
pub fn tokenize(text: &str) -> Tokens {
    let normalized = text.replace("``", "\"").replace("''", "\"");
    Tokens {
        chars: normalized.chars().collect(),
        pos: 0,
    }
}

/// Lazy token iterator produced by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens {
    chars: Vec<char>,
    pos: usize,
}

impl Tokens {
    /// True when `chars[i]` is a `.` or `,` with a digit on both sides,
    /// i.e. a decimal point or thousands separator inside a number.
    fn is_numeric_separator(&self, i: usize) -> bool {
        if !matches!(self.chars[i], '.' | ',') {
            return false;
        }
        let before = i
            .checked_sub(1)
            .and_then(|j| self.chars.get(j))
            .is_some_and(|c| c.is_ascii_digit());
        let after = self.chars.get(i + 1).is_some_and(|c| c.is_ascii_digit());
        before && after
    }
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
        let c = *self.chars.get(self.pos)?;

        if c.is_alphanumeric() {
            let start = self.pos;
            while self.pos < self.chars.len()
                && (self.chars[self.pos].is_alphanumeric()
                    || self.is_numeric_separator(self.pos))
            {
                self.pos += 1;
            }
            Some(self.chars[start..self.pos].iter().collect())
        } else {
            self.pos += 1;
            Some(c.to_string())
        }
    }
}
