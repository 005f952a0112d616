//! Netlist lexer: a plain iterator of token lines.

/// One declaration line split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLine {
    /// 1-based source line number.
    pub line: usize,
    pub tokens: Vec<String>,
}

impl TokenLine {
    /// The declared symbol (first token). Token lines are never empty.
    pub fn symbol(&self) -> &str {
        &self.tokens[0]
    }

    /// Tokens after the symbol.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }
}

/// Iterator over the declaration lines of a netlist.
#[derive(Debug, Clone)]
pub struct TokenLines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl Iterator for TokenLines<'_> {
    type Item = TokenLine;

    fn next(&mut self) -> Option<TokenLine> {
        for (idx, raw) in self.lines.by_ref() {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return Some(TokenLine {
                line: idx + 1,
                tokens: text.split_whitespace().map(str::to_string).collect(),
            });
        }
        None
    }
}

/// Split netlist text into declaration lines, skipping blanks and `#` comments.
pub fn tokenize(input: &str) -> TokenLines<'_> {
    TokenLines {
        lines: input.lines().enumerate(),
    }
}
