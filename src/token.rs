use std::borrow::Cow;

use super::parser::Token;

/// Accumulates the tokens of consecutive parses over one input
///
/// While every appended token is exactly the text consumed at its step, the
/// result stays a borrowed slice of the input. The first token that is not
/// (a dropped or rewritten one) switches to an owned buffer.
#[derive(Debug)]
pub(crate) struct TokenBuf<'a> {
    input: &'a str,
    consumed: usize,
    owned: Option<String>,
}

impl<'a> TokenBuf<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            consumed: 0,
            owned: None,
        }
    }

    /// Append the token of a parse that turned `before` into `after`
    pub(crate) fn push(&mut self, token: Token<'a>, before: &'a str, after: &'a str) {
        let step = before.len() - after.len();
        if step == 0 && token.is_empty() {
            return;
        }

        if let Some(owned) = self.owned.as_mut() {
            owned.push_str(&token);
            return;
        }

        let contiguous = matches!(token, Cow::Borrowed(t)
            if t.len() == step && std::ptr::eq(t.as_ptr(), before.as_ptr()));

        if contiguous {
            self.consumed += step;
        } else {
            let mut owned = String::with_capacity(self.consumed + token.len());
            owned.push_str(&self.input[..self.consumed]);
            owned.push_str(&token);
            self.owned = Some(owned);
        }
    }

    pub(crate) fn finish(self) -> Token<'a> {
        match self.owned {
            Some(owned) => Cow::Owned(owned),
            None => Cow::Borrowed(&self.input[..self.consumed]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_tokens_stay_borrowed() {
        let input = "abcdef";
        let mut buf = TokenBuf::new(input);
        buf.push(Cow::Borrowed(&input[..2]), input, &input[2..]);
        buf.push(Cow::Borrowed(&input[2..3]), &input[2..], &input[3..]);

        let token = buf.finish();
        assert!(matches!(token, Cow::Borrowed("abc")));
    }

    #[test]
    fn test_dropped_token_switches_to_owned() {
        let input = "a b";
        let mut buf = TokenBuf::new(input);
        buf.push(Cow::Borrowed(&input[..1]), input, &input[1..]);
        buf.push(Cow::Borrowed(""), &input[1..], &input[2..]);
        buf.push(Cow::Borrowed(&input[2..]), &input[2..], "");

        let token = buf.finish();
        assert!(matches!(token, Cow::Owned(_)));
        assert_eq!(token, "ab");
    }

    #[test]
    fn test_owned_token_is_copied() {
        let input = "xy";
        let mut buf = TokenBuf::new(input);
        buf.push(Cow::Owned("x".to_string()), input, &input[1..]);
        buf.push(Cow::Borrowed(&input[1..]), &input[1..], "");
        assert_eq!(buf.finish(), "xy");
    }

    #[test]
    fn test_empty_buffer() {
        let buf = TokenBuf::new("abc");
        assert_eq!(buf.finish(), "");
    }
}
