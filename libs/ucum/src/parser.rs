//! Unit-expression parser
//!
//! Turns a UCUM string into a [`Unit`], or into a list of user-facing
//! messages explaining why it could not. The parse runs in phases:
//!
//! 1. input hygiene (length, whitespace, ASCII outside annotations);
//! 2. annotation extraction into placeholder tokens;
//! 3. bracket and parenthesis balance checking;
//! 4. sibling-number repair (`4(x)` becomes `4.(x)`, with a warning);
//! 5. lexing and recursive descent with atom resolution;
//! 6. left-to-right algebraic folding.
//!
//! Repairs and fallbacks emit advisory messages and continue; the first
//! hard failure stops the parse and returns the accumulated messages.

use crate::error::{Error, Result};
use crate::lexer::{Lexer, ANN_CLOSE, ANN_OPEN};
use crate::suggest::{self, SuggestionBlock};
use crate::table::AtomTable;
use crate::token::{Token, TokenType};
use crate::unit::{Conversion, Unit};
use tracing::debug;

/// Upper bound on the input expression, in bytes
pub const MAX_INPUT_BYTES: usize = 64 * 1024;

const MAX_PAREN_DEPTH: usize = 64;

/// Caller-selectable parsing behaviour
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    /// Ask the suggestion index for candidates when a token is unknown
    pub suggestions: bool,
    /// Fall back to case-insensitive atom and prefix lookup, with an
    /// advisory message on use
    pub case_insensitive: bool,
}

/// Outcome of a parse: a unit on success, messages either way
#[derive(Debug)]
pub struct ParseReport {
    pub unit: Option<Unit>,
    /// User-facing messages: advisories on success, errors on failure
    pub messages: Vec<String>,
    /// Suggestion blocks for unresolvable tokens, when enabled
    pub suggestions: Vec<SuggestionBlock>,
    /// The repaired, annotation-restored form of the input
    pub normalized: String,
}

/// The unit-expression parser
pub struct UnitParser<'t> {
    table: &'t AtomTable,
    opts: ParseOptions,
    annotations: Vec<String>,
    messages: Vec<String>,
    suggestions: Vec<SuggestionBlock>,
}

struct Cursor {
    lexer: Lexer,
    current: Token,
}

impl Cursor {
    fn new(input: &str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Cursor { lexer, current }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }
}

impl<'t> UnitParser<'t> {
    pub fn new(table: &'t AtomTable, opts: ParseOptions) -> Self {
        UnitParser {
            table,
            opts,
            annotations: Vec::new(),
            messages: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Parse `input` into a unit; never panics, all failures are
    /// reported through the returned [`ParseReport`]
    pub fn parse(mut self, input: &str) -> ParseReport {
        match self.run(input) {
            Ok((unit, normalized)) => ParseReport {
                unit: Some(unit),
                messages: self.messages,
                suggestions: self.suggestions,
                normalized,
            },
            Err(err) => {
                if self.messages.is_empty() {
                    self.messages.push(format!("{err}."));
                }
                ParseReport {
                    unit: None,
                    messages: self.messages,
                    suggestions: self.suggestions,
                    normalized: input.to_owned(),
                }
            }
        }
    }

    fn run(&mut self, input: &str) -> Result<(Unit, String)> {
        if input.is_empty() {
            self.messages.push("No unit string specified.".into());
            return Err(Error::EmptyInput);
        }
        if input.len() > MAX_INPUT_BYTES {
            self.messages.push(format!(
                "The unit expression is too long ({} bytes; the limit is {MAX_INPUT_BYTES})."
            , input.len()));
            return Err(Error::InputTooLong(input.len()));
        }

        let extracted = self.extract_annotations(input)?;
        self.check_hygiene(input, &extracted)?;
        self.check_balance(&extracted)?;
        let repaired = self.repair_sibling_numbers(&extracted);

        let mut cursor = Cursor::new(&repaired);
        let mut unit = self.parse_expression(&mut cursor, 0)?;
        if cursor.current.token_type != TokenType::Eof {
            let display = self.restore(&repaired);
            self.messages.push(format!(
                "{display} is not a valid UCUM code. Expected '.' or '/' before '{}'.",
                self.token_text(&cursor.current)
            ));
            return Err(Error::UnknownAtom(display));
        }

        let normalized = self.restore(&repaired);
        unit.cs_code = normalized.clone();
        Ok((unit, normalized))
    }

    /// Replace `{...}` segments with placeholder tokens, storing their
    /// text for later restoration; non-ASCII is preserved inside braces
    fn extract_annotations(&mut self, input: &str) -> Result<String> {
        let mut out = String::with_capacity(input.len());
        let mut chars = input.char_indices().peekable();
        while let Some((pos, c)) = chars.next() {
            match c {
                '{' => {
                    let mut text = String::new();
                    let mut closed = false;
                    for (_, b) in chars.by_ref() {
                        match b {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => {
                                self.messages.push(format!(
                                    "Annotations may not be nested; found '{{' inside the annotation at {}.",
                                    emphasize(input, pos)
                                ));
                                return Err(Error::UnbalancedBrackets(input.to_owned()));
                            }
                            _ => text.push(b),
                        }
                    }
                    if !closed {
                        self.messages.push(format!(
                            "Missing close brace for open brace at {}.",
                            emphasize(input, pos)
                        ));
                        return Err(Error::UnbalancedBrackets(input.to_owned()));
                    }
                    out.push(ANN_OPEN);
                    out.push_str(&self.annotations.len().to_string());
                    out.push(ANN_CLOSE);
                    self.annotations.push(text);
                }
                '}' => {
                    self.messages.push(format!(
                        "Missing open brace for close brace at {}.",
                        emphasize(input, pos)
                    ));
                    return Err(Error::UnbalancedBrackets(input.to_owned()));
                }
                _ => out.push(c),
            }
        }
        Ok(out)
    }

    /// Whitespace and non-ASCII are only meaningful inside annotations,
    /// which have been extracted by now
    fn check_hygiene(&mut self, input: &str, extracted: &str) -> Result<()> {
        for c in extracted.chars() {
            if c == ANN_OPEN || c == ANN_CLOSE {
                continue;
            }
            if c.is_whitespace() {
                self.messages.push(format!(
                    "{input} is not a valid UCUM code. Blank spaces are not allowed in UCUM codes."
                ));
                return Err(Error::UnknownAtom(input.to_owned()));
            }
            if !c.is_ascii() {
                self.messages.push(format!(
                    "{input} is not a valid UCUM code. Only ASCII characters are allowed outside annotations."
                ));
                return Err(Error::UnknownAtom(input.to_owned()));
            }
        }
        Ok(())
    }

    fn check_balance(&mut self, s: &str) -> Result<()> {
        let mut parens: Vec<usize> = Vec::new();
        for (i, c) in s.char_indices() {
            match c {
                '(' => parens.push(i),
                ')' => {
                    if parens.pop().is_none() {
                        let at = self.emphasize_restored(s, i);
                        self.messages.push(format!(
                            "Missing open parenthesis for close parenthesis at {at}."
                        ));
                        return Err(Error::UnbalancedParentheses(at));
                    }
                }
                _ => {}
            }
        }
        if let Some(&open) = parens.last() {
            let at = self.emphasize_restored(s, open);
            self.messages.push(format!(
                "Missing close parenthesis for open parenthesis at {at}."
            ));
            return Err(Error::UnbalancedParentheses(at));
        }

        let mut bracket: Option<usize> = None;
        for (i, c) in s.char_indices() {
            match c {
                '[' => {
                    if let Some(open) = bracket {
                        let at = self.emphasize_restored(s, open);
                        self.messages
                            .push(format!("Missing close bracket for open bracket at {at}."));
                        return Err(Error::UnbalancedBrackets(at));
                    }
                    bracket = Some(i);
                }
                ']' => {
                    if bracket.take().is_none() {
                        let at = self.emphasize_restored(s, i);
                        self.messages
                            .push(format!("Missing open bracket for close bracket at {at}."));
                        return Err(Error::UnbalancedBrackets(at));
                    }
                }
                _ => {}
            }
        }
        if let Some(open) = bracket {
            let at = self.emphasize_restored(s, open);
            self.messages
                .push(format!("Missing close bracket for open bracket at {at}."));
            return Err(Error::UnbalancedBrackets(at));
        }
        Ok(())
    }

    /// `4(mmol/L)` is missing its operator; rewrite to `4.(mmol/L)` and
    /// record the substitution as a non-fatal warning
    fn repair_sibling_numbers(&mut self, s: &str) -> String {
        let bytes = s.as_bytes();
        let mut out = String::with_capacity(s.len() + 2);
        let mut repaired = false;
        for (i, c) in s.char_indices() {
            out.push(c);
            if c.is_ascii_digit() && bytes.get(i + 1) == Some(&b'(') {
                out.push('.');
                repaired = true;
            }
        }
        if repaired {
            let before = self.restore(s);
            let after = self.restore(&out);
            debug!(%before, %after, "sibling-number repair applied");
            self.messages.push(format!(
                "{before} is not a valid UCUM code. Did you mean {after}? We assumed {after} and continued."
            ));
        }
        out
    }

    fn parse_expression(&mut self, cursor: &mut Cursor, depth: usize) -> Result<Unit> {
        let mut acc = if cursor.current.token_type == TokenType::Slash {
            // a leading '/' denotes the reciprocal of what follows
            Unit::one()
        } else {
            self.parse_term(cursor, depth)?
        };

        loop {
            match cursor.current.token_type {
                TokenType::Dot => {
                    cursor.advance();
                    let rhs = self.parse_term(cursor, depth)?;
                    acc = self.combine(acc.multiply(&rhs))?;
                }
                TokenType::Slash => {
                    cursor.advance();
                    let rhs = self.parse_term(cursor, depth)?;
                    acc = self.combine(acc.divide(&rhs))?;
                }
                TokenType::Eof | TokenType::CloseParen => break,
                _ => {
                    self.messages.push(format!(
                        "Expected '.' or '/' before '{}'.",
                        self.token_text(&cursor.current)
                    ));
                    return Err(Error::UnknownAtom(cursor.current.value.clone()));
                }
            }
        }
        Ok(acc)
    }

    fn combine<T>(&mut self, result: Result<T>) -> Result<T> {
        result.map_err(|err| {
            self.messages.push(format!("{err}."));
            err
        })
    }

    fn parse_term(&mut self, cursor: &mut Cursor, depth: usize) -> Result<Unit> {
        let unit = match cursor.current.token_type {
            TokenType::OpenParen => {
                if depth >= MAX_PAREN_DEPTH {
                    self.messages
                        .push("The unit expression is nested too deeply.".into());
                    return Err(Error::UnknownAtom(cursor.current.value.clone()));
                }
                cursor.advance();
                let inner = self.parse_expression(cursor, depth + 1)?;
                let close = cursor.current.clone();
                if close.token_type != TokenType::CloseParen {
                    // the balance pre-check makes this unreachable, but a
                    // defect there must not turn into a panic here
                    self.messages.push(format!(
                        "Missing close parenthesis for open parenthesis before '{}'.",
                        self.token_text(&close)
                    ));
                    return Err(Error::UnbalancedParentheses(close.value));
                }
                cursor.advance();
                self.apply_group_exponent(cursor, inner, close.end())?
            }
            TokenType::Integer => {
                let tok = cursor.current.clone();
                cursor.advance();
                self.parse_factor(&tok)?
            }
            TokenType::Annotation => {
                let tok = cursor.current.clone();
                cursor.advance();
                self.parse_lone_annotation(&tok)
            }
            TokenType::Symbol => {
                let tok = cursor.current.clone();
                cursor.advance();
                self.resolve_symbol(&tok)?
            }
            _ => {
                self.messages.push(format!(
                    "Expected a unit term before '{}'.",
                    self.token_text(&cursor.current)
                ));
                return Err(Error::UnknownAtom(cursor.current.value.clone()));
            }
        };

        // an annotation following a term is a comment
        if cursor.current.token_type == TokenType::Annotation {
            cursor.advance();
        }
        Ok(unit)
    }

    /// `(...)` may carry an integer exponent with no separator
    fn apply_group_exponent(
        &mut self,
        cursor: &mut Cursor,
        mut unit: Unit,
        close_end: usize,
    ) -> Result<Unit> {
        if cursor.current.token_type == TokenType::Integer && cursor.current.position == close_end {
            let tok = cursor.current.clone();
            cursor.advance();
            let p: i32 = tok.value.parse().map_err(|_| {
                self.messages.push(format!(
                    "The exponent '{}' is out of range.",
                    tok.value
                ));
                Error::NonIntegerExponent(tok.value.clone())
            })?;
            self.combine(
                unit.power(f64::from(p)).map(|()| unit),
            )
        } else {
            Ok(unit)
        }
    }

    /// A bare integer is a dimensionless unit of that magnitude; only
    /// positive values are legal
    fn parse_factor(&mut self, tok: &Token) -> Result<Unit> {
        if tok.value.starts_with('+') || tok.value.starts_with('-') {
            self.messages.push(format!(
                "{} is not a valid UCUM code. A numeric factor may not carry a sign.",
                tok.value
            ));
            return Err(Error::UnknownAtom(tok.value.clone()));
        }
        let n: f64 = tok.value.parse().unwrap_or(0.0);
        if n <= 0.0 {
            self.messages.push(format!(
                "{} is not a valid UCUM code. A numeric factor must be a positive integer.",
                tok.value
            ));
            return Err(Error::UnknownAtom(tok.value.clone()));
        }
        Ok(Unit::from_number(n))
    }

    /// A lone annotation denotes the dimensionless unit 1; when its text
    /// names a known atom, advise the likely intent without failing
    fn parse_lone_annotation(&mut self, tok: &Token) -> Unit {
        let text = self
            .annotations
            .get(tok.value.parse::<usize>().unwrap_or(usize::MAX))
            .cloned()
            .unwrap_or_default();
        let named = self
            .table
            .atom_by_cs(&text)
            .or_else(|| self.table.atom_by_cs(&format!("[{text}]")));
        if let Some(atom) = named {
            self.messages.push(format!(
                "{{{text}}} is a valid unit expression, but did you mean {} ({})?",
                atom.cs_code, atom.name
            ));
        }
        Unit::one()
    }

    fn resolve_symbol(&mut self, tok: &Token) -> Result<Unit> {
        let s = &tok.value;

        if is_scientific_notation(s) {
            self.messages.push(format!(
                "{s} is not a valid UCUM code. UCUM codes may not use exponential (scientific) notation."
            ));
            return Err(Error::UnknownAtom(s.clone()));
        }

        let (base, exponent) = split_exponent(s);
        let Some(mut unit) = self.lookup_atom(base) else {
            self.messages.push(format!("{s} is not a valid UCUM code."));
            if self.opts.suggestions {
                if let Some(block) = suggest::block_for(self.table, base) {
                    self.suggestions.push(block);
                }
            }
            return Err(Error::UnknownAtom(s.clone()));
        };

        if let Some(p) = exponent {
            self.combine(unit.power(f64::from(p)).map(|()| ()))?;
        }
        Ok(unit)
    }

    /// Atom resolution order: exact case-sensitive atom; case-sensitive
    /// prefix plus metric atom; the same two case-insensitively when the
    /// caller opted in. A prefixed atom is never itself split again, so
    /// double-prefix forms like `mcg` resolve to nothing.
    fn lookup_atom(&mut self, base: &str) -> Option<Unit> {
        if let Some(atom) = self.table.atom_by_cs(base) {
            return Some(Unit::from_atom(atom));
        }
        if let Some(unit) = self.prefixed(base, false) {
            return Some(unit);
        }
        if self.opts.case_insensitive {
            if let Some(atom) = self.table.atom_by_ci(base) {
                self.messages.push(format!(
                    "{base} is not a valid UCUM code, but {} is. We assumed you meant {} ({}).",
                    atom.cs_code, atom.cs_code, atom.name
                ));
                debug!(given = %base, resolved = %atom.cs_code, "case-insensitive atom fallback");
                return Some(Unit::from_atom(atom));
            }
            if let Some(unit) = self.prefixed(base, true) {
                self.messages.push(format!(
                    "{base} is not a valid UCUM code, but {} is. We assumed you meant {} ({}).",
                    unit.cs_code, unit.cs_code, unit.name
                ));
                debug!(given = %base, resolved = %unit.cs_code, "case-insensitive prefix fallback");
                return Some(unit);
            }
        }
        None
    }

    fn prefixed(&self, base: &str, case_insensitive: bool) -> Option<Unit> {
        for plen in [2usize, 1] {
            if base.len() <= plen {
                continue;
            }
            let (head, rest) = base.split_at(plen);
            let prefix = if case_insensitive {
                self.table.prefix_by_ci(head)
            } else {
                self.table.prefix_by_cs(head)
            };
            let Some(prefix) = prefix else { continue };
            let atom = if case_insensitive {
                self.table.atom_by_ci(rest)
            } else {
                self.table.atom_by_cs(rest)
            };
            let Some(atom) = atom else { continue };
            if !atom.is_metric {
                continue;
            }

            let mut unit = Unit::from_atom(atom);
            match &mut unit.conv {
                Conversion::Special { prefix: inner, .. } => *inner *= prefix.value,
                Conversion::Ratio => unit.magnitude *= prefix.value,
            }
            unit.cs_code = format!("{}{}", prefix.cs_code, atom.cs_code);
            unit.ci_code = format!("{}{}", prefix.ci_code, atom.ci_code);
            unit.name = format!("{}{}", prefix.name, atom.name);
            unit.is_base = false;
            return Some(unit);
        }
        None
    }

    /// Restore annotation placeholders to their `{...}` form
    fn restore(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == ANN_OPEN {
                let mut index = String::new();
                for b in chars.by_ref() {
                    if b == ANN_CLOSE {
                        break;
                    }
                    index.push(b);
                }
                let text = index
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.annotations.get(i))
                    .cloned()
                    .unwrap_or_default();
                out.push('{');
                out.push_str(&text);
                out.push('}');
            } else {
                out.push(c);
            }
        }
        out
    }

    fn emphasize_restored(&self, s: &str, pos: usize) -> String {
        format!(
            "{} ->{}<- {}",
            self.restore(&s[..pos]),
            &s[pos..=pos],
            self.restore(&s[pos + 1..])
        )
    }

    fn token_text(&self, tok: &Token) -> String {
        match tok.token_type {
            TokenType::Annotation => format!(
                "{{{}}}",
                tok.value
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.annotations.get(i))
                    .cloned()
                    .unwrap_or_default()
            ),
            TokenType::Eof => "end of input".into(),
            _ => tok.value.clone(),
        }
    }
}

/// Quote the character at `pos` with emphasis markers
fn emphasize(s: &str, pos: usize) -> String {
    let c = s[pos..].chars().next().unwrap_or('?');
    let after = pos + c.len_utf8();
    format!("{} ->{c}<- {}", &s[..pos], &s[after..])
}

/// `digits e digits` is a floating-point habit, not a UCUM exponent
fn is_scientific_notation(s: &str) -> bool {
    let Some(epos) = s.find(['e', 'E']) else {
        return false;
    };
    let (mantissa, rest) = s.split_at(epos);
    let exp = &rest[1..];
    let exp = exp.strip_prefix(&['+', '-'][..]).unwrap_or(exp);
    !mantissa.is_empty()
        && mantissa.bytes().all(|b| b.is_ascii_digit())
        && !exp.is_empty()
        && exp.bytes().all(|b| b.is_ascii_digit())
}

/// Split a trailing signed-integer exponent off an atom token
fn split_exponent(s: &str) -> (&str, Option<i32>) {
    if s.ends_with(']') {
        return (s, None);
    }
    let bytes = s.as_bytes();
    let mut digits = s.len();
    while digits > 0 && bytes[digits - 1].is_ascii_digit() {
        digits -= 1;
    }
    if digits == s.len() {
        return (s, None);
    }
    let mut base_end = digits;
    if base_end > 0 && (bytes[base_end - 1] == b'+' || bytes[base_end - 1] == b'-') {
        base_end -= 1;
    }
    if base_end == 0 {
        return (s, None);
    }
    match s[base_end..].parse::<i32>() {
        Ok(exp) => (&s[..base_end], Some(exp)),
        Err(_) => (s, None),
    }
}
