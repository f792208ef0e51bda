//! Macro rules: regex shorthand that turns bare words into references.
//!
//! A rule pairs a pattern with a template. A word matching the whole pattern
//! is rewritten through the template, and the result must be a reference:
//!
//! ```text
//! /macro b/([0-9]+) bug/\1
//! ```
//!
//! Templates refer to groups as `\1`, `\g<1>` or `\g<name>`. Rules are tried in
//! declaration order and the first match wins.

use regex::Regex;

use oblique_foundation::{Error, ErrorKind, Ref, Result};

/// A compiled macro rule.
#[derive(Clone, Debug)]
pub struct MacroRule {
    /// The pattern as written.
    pattern: String,
    /// The pattern anchored to both ends of the word.
    regex: Regex,
    /// The template as written.
    template: String,
    /// The template in `regex` replacement syntax.
    replacement: String,
}

impl MacroRule {
    /// Compiles a rule.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidMacroPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn new(pattern: &str, template: &str) -> Result<Self> {
        let invalid = |err: regex::Error| {
            Error::new(ErrorKind::InvalidMacroPattern {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
        };
        // Validate on its own first so the anchoring group cannot balance a stray paren.
        Regex::new(pattern).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            template: template.to_string(),
            replacement: translate_template(template),
        })
    }

    /// Returns the pattern as written.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the template as written.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns true if this rule matches the whole word.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    /// Expands `word` through this rule.
    ///
    /// Returns `Ok(None)` if the rule does not match the whole word.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidMacroExpansion`] if the word matches but the
    /// expansion is not a reference.
    pub fn apply(&self, word: &str) -> Result<Option<Ref>> {
        let Some(captures) = self.regex.captures(word) else {
            return Ok(None);
        };
        let mut expansion = String::new();
        captures.expand(&self.replacement, &mut expansion);
        expansion.parse::<Ref>().map(Some).map_err(|_| {
            Error::new(ErrorKind::InvalidMacroExpansion {
                pattern: self.pattern.clone(),
                expansion,
            })
        })
    }
}

/// Expands `word` through the first rule that matches it.
///
/// Returns `Ok(None)` if no rule matches; the word then stays a literal word.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidMacroExpansion`] if the first matching rule
/// expands to something that is not a reference. Later rules are not tried.
pub fn expand(word: &str, rules: &[MacroRule]) -> Result<Option<Ref>> {
    for rule in rules {
        if let Some(target) = rule.apply(word)? {
            return Ok(Some(target));
        }
    }
    Ok(None)
}

/// Ordered macro rules of one parse session.
#[derive(Clone, Debug, Default)]
pub struct MacroRegistry {
    rules: Vec<MacroRule>,
}

impl MacroRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles and appends a rule. Earlier rules take priority.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn define(&mut self, pattern: &str, template: &str) -> Result<()> {
        self.rules.push(MacroRule::new(pattern, template)?);
        Ok(())
    }

    /// Appends an already compiled rule.
    pub fn push(&mut self, rule: MacroRule) {
        self.rules.push(rule);
    }

    /// Expands `word` through the first matching rule.
    ///
    /// # Errors
    ///
    /// See [`expand`].
    pub fn apply(&self, word: &str) -> Result<Option<Ref>> {
        expand(word, &self.rules)
    }

    /// Returns the rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[MacroRule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Rewrites a backslash-style template into `regex` replacement syntax.
///
/// `\1` and `\g<1>` become `${1}`, `\g<name>` becomes `${name}`, `\\` is a
/// literal backslash and `$` is escaped so it stays literal.
fn translate_template(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '$' => out.push_str("$$"),
            '\\' => match chars.peek().copied() {
                Some(d) if d.is_ascii_digit() => {
                    let mut group = String::new();
                    while group.len() < 2 {
                        match chars.peek() {
                            Some(d) if d.is_ascii_digit() => {
                                group.push(*d);
                                chars.next();
                            }
                            _ => break,
                        }
                    }
                    out.push_str(&format!("${{{group}}}"));
                }
                Some('g') => {
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    match group_name(&mut lookahead) {
                        Some(name) => {
                            out.push_str(&format!("${{{name}}}"));
                            chars = lookahead;
                        }
                        None => out.push('\\'),
                    }
                }
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                _ => out.push('\\'),
            },
            _ => out.push(c),
        }
    }
    out
}

/// Reads `<name>` from `chars`, returning the name if it is well formed.
fn group_name(chars: &mut impl Iterator<Item = char>) -> Option<String> {
    if chars.next()? != '<' {
        return None;
    }
    let mut name = String::new();
    loop {
        match chars.next()? {
            '>' => break,
            c if c.is_alphanumeric() || c == '_' => name.push(c),
            _ => return None,
        }
    }
    (!name.is_empty()).then_some(name)
}
