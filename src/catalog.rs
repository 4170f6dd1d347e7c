//! # Instruction Catalog
//!
//! An ordered, immutable collection of instruction definitions. Each definition pairs
//! a per-byte pattern (literal opcode bytes and operand placeholders) with a mnemonic
//! template whose `n`/`d` marker characters receive the decoded operand text.
//!
//! Order matters: matching is first-match-wins, so the catalog must list longer,
//! more literal patterns before shorter ones that share their leading bytes.
//! [`InstructionCatalog::lint`] reports entries that ordering makes unreachable.
//!
//! ## Hex template notation
//!
//! Definitions can also be loaded from text, one token per byte:
//!
//! ```
//! use z80disasm::catalog::{InstructionDef, PatternToken};
//!
//! let def = InstructionDef::parse("LD (IX+d),n", "DD 36 d n").unwrap();
//! assert_eq!(def.len(), 4);
//! assert_eq!(def.tokens()[2], PatternToken::Displacement);
//! assert_eq!(def.operand_offset(), Some(2));
//! assert_eq!(def.hex_template(), "DD 36 d n");
//! ```

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use crate::opcodes::Z80_INSTRUCTIONS;

/// Marker character for an immediate operand slot in a mnemonic template.
pub const IMMEDIATE_MARKER: char = 'n';

/// Marker character for a displacement operand slot in a mnemonic template.
pub const DISPLACEMENT_MARKER: char = 'd';

/// One byte position of an instruction pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternToken {
    /// The memory byte must equal this value.
    Literal(u8),

    /// Operand byte rendered as two unsigned hex digits.
    Immediate,

    /// Operand byte rendered as a signed two's-complement decimal.
    Displacement,
}

impl PatternToken {
    /// True for `Immediate` and `Displacement`.
    pub const fn is_placeholder(self) -> bool {
        !matches!(self, PatternToken::Literal(_))
    }

    /// The template marker this placeholder fills, if it is one.
    pub const fn marker(self) -> Option<char> {
        match self {
            PatternToken::Literal(_) => None,
            PatternToken::Immediate => Some(IMMEDIATE_MARKER),
            PatternToken::Displacement => Some(DISPLACEMENT_MARKER),
        }
    }

    /// The placeholder kind a template marker character stands for.
    pub const fn from_marker(c: char) -> Option<PatternToken> {
        match c {
            IMMEDIATE_MARKER => Some(PatternToken::Immediate),
            DISPLACEMENT_MARKER => Some(PatternToken::Displacement),
            _ => None,
        }
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternToken::Literal(b) => write!(f, "{:02X}", b),
            PatternToken::Immediate => write!(f, "{}", IMMEDIATE_MARKER),
            PatternToken::Displacement => write!(f, "{}", DISPLACEMENT_MARKER),
        }
    }
}

/// Errors from loading definitions out of hex template text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The hex template has no tokens.
    #[error("hex template is empty")]
    EmptyTemplate,

    /// A token is neither a two-digit hex byte nor a placeholder.
    #[error("invalid token '{token}' at byte {position}")]
    InvalidToken { position: usize, token: String },

    /// Placeholders were written without a separating space, e.g. `nn`.
    #[error("placeholders must be space separated, found '{token}' at byte {position}")]
    JoinedPlaceholders { position: usize, token: String },

    /// The first byte of a pattern must be a literal opcode byte.
    #[error("pattern must start with a literal opcode byte")]
    LeadingPlaceholder,

    /// An entry of a multi-entry load failed.
    #[error("catalog entry {index} ('{mnemonic}'): {source}")]
    Entry {
        index: usize,
        mnemonic: String,
        #[source]
        source: Box<CatalogError>,
    },
}

/// A single instruction: byte pattern plus mnemonic template.
///
/// The byte length of the instruction is the pattern length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionDef {
    template: Cow<'static, str>,
    pattern: Cow<'static, [PatternToken]>,
}

impl InstructionDef {
    /// Builds a definition over static data, for compile-time tables.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is empty or starts with a placeholder. In a `static`
    /// table this is a compile error.
    pub const fn new(template: &'static str, pattern: &'static [PatternToken]) -> Self {
        match pattern.first() {
            None => panic!("instruction pattern is empty"),
            Some(first) if first.is_placeholder() => {
                panic!("instruction pattern must start with a literal opcode byte")
            }
            Some(_) => {}
        }

        Self {
            template: Cow::Borrowed(template),
            pattern: Cow::Borrowed(pattern),
        }
    }

    /// Parses a hex template such as `"DD 36 d n"` into an owned definition.
    pub fn parse(template: &str, hex: &str) -> Result<Self, CatalogError> {
        let pattern = hex
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| parse_token(position, token))
            .collect::<Result<Vec<_>, _>>()?;

        match pattern.first() {
            None => return Err(CatalogError::EmptyTemplate),
            Some(first) if first.is_placeholder() => return Err(CatalogError::LeadingPlaceholder),
            Some(_) => {}
        }

        Ok(Self {
            template: Cow::Owned(template.to_string()),
            pattern: Cow::Owned(pattern),
        })
    }

    /// The mnemonic template, e.g. `"LD HL,nn"`.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The per-byte pattern.
    pub fn tokens(&self) -> &[PatternToken] {
        &self.pattern
    }

    /// Instruction length in bytes.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Offset of the first operand byte, if the instruction has operands.
    pub fn operand_offset(&self) -> Option<usize> {
        self.pattern.iter().position(|t| t.is_placeholder())
    }

    /// Number of placeholder bytes in the pattern.
    pub fn placeholder_count(&self) -> usize {
        self.pattern.iter().filter(|t| t.is_placeholder()).count()
    }

    /// Number of marker characters in the template.
    pub fn marker_count(&self) -> usize {
        self.markers().count()
    }

    /// Byte positions and kinds of the template's marker characters, left to right.
    pub fn markers(&self) -> impl Iterator<Item = (usize, PatternToken)> + '_ {
        self.template
            .char_indices()
            .filter_map(|(i, c)| PatternToken::from_marker(c).map(|kind| (i, kind)))
    }

    /// Placeholder tokens with their byte offsets, in ascending offset order.
    pub fn placeholders(&self) -> impl Iterator<Item = (usize, PatternToken)> + '_ {
        self.pattern
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_placeholder())
            .map(|(i, &t)| (i, t))
    }

    /// The pattern written back out in hex template notation.
    pub fn hex_template(&self) -> String {
        self.pattern
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True if every byte string this definition matches is also matched by `other`.
    fn is_covered_by(&self, other: &InstructionDef) -> bool {
        other.len() <= self.len()
            && other
                .tokens()
                .iter()
                .zip(self.tokens())
                .all(|(theirs, ours)| theirs.is_placeholder() || theirs == ours)
    }
}

impl fmt::Display for InstructionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.template, self.hex_template())
    }
}

fn parse_token(position: usize, token: &str) -> Result<PatternToken, CatalogError> {
    if token.chars().all(|c| PatternToken::from_marker(c).is_some()) {
        let mut chars = token.chars();
        return match (chars.next().and_then(PatternToken::from_marker), chars.next()) {
            (Some(kind), None) => Ok(kind),
            _ => Err(CatalogError::JoinedPlaceholders {
                position,
                token: token.to_string(),
            }),
        };
    }

    if token.len() == 2 && token.chars().all(|c| c.is_ascii_hexdigit()) {
        if let Ok(byte) = u8::from_str_radix(token, 16) {
            return Ok(PatternToken::Literal(byte));
        }
    }

    Err(CatalogError::InvalidToken {
        position,
        token: token.to_string(),
    })
}

/// A problem found by [`InstructionCatalog::lint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// The template has a different number of markers than the pattern has placeholders.
    MarkerCountMismatch {
        index: usize,
        markers: usize,
        placeholders: usize,
    },

    /// Rightmost-first substitution puts the operand byte at `offset` into a marker
    /// of the other kind.
    MarkerKindMismatch {
        index: usize,
        offset: usize,
        expected: char,
        found: char,
    },

    /// An earlier entry matches everything this entry matches.
    Shadowed { index: usize, by: usize },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::MarkerCountMismatch {
                index,
                markers,
                placeholders,
            } => write!(
                f,
                "entry {}: {} template markers for {} placeholder bytes",
                index, markers, placeholders
            ),
            CatalogIssue::MarkerKindMismatch {
                index,
                offset,
                expected,
                found,
            } => write!(
                f,
                "entry {}: operand byte {} ('{}') lands on a '{}' marker",
                index, offset, expected, found
            ),
            CatalogIssue::Shadowed { index, by } => {
                write!(f, "entry {}: unreachable, entry {} always matches first", index, by)
            }
        }
    }
}

impl CatalogIssue {
    /// Index of the offending entry.
    pub fn index(&self) -> usize {
        match *self {
            CatalogIssue::MarkerCountMismatch { index, .. }
            | CatalogIssue::MarkerKindMismatch { index, .. }
            | CatalogIssue::Shadowed { index, .. } => index,
        }
    }
}

static Z80_CATALOG: InstructionCatalog = InstructionCatalog::from_static(Z80_INSTRUCTIONS);

/// Priority-ordered set of instruction definitions.
///
/// # Examples
///
/// ```
/// use z80disasm::InstructionCatalog;
///
/// let catalog = InstructionCatalog::from_templates([
///     ("LD HL,nn", "21 n n"),
///     ("NOP", "00"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.lint().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct InstructionCatalog {
    defs: Cow<'static, [InstructionDef]>,
}

impl InstructionCatalog {
    /// Wraps a static table without copying it.
    pub const fn from_static(defs: &'static [InstructionDef]) -> Self {
        Self {
            defs: Cow::Borrowed(defs),
        }
    }

    /// Takes ownership of a list of definitions, keeping their order.
    pub fn new(defs: Vec<InstructionDef>) -> Self {
        Self {
            defs: Cow::Owned(defs),
        }
    }

    /// The built-in Z80 instruction set.
    pub fn z80() -> &'static InstructionCatalog {
        &Z80_CATALOG
    }

    /// Loads `(mnemonic template, hex template)` pairs in order.
    pub fn from_templates<'a, I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let defs = entries
            .into_iter()
            .enumerate()
            .map(|(index, (mnemonic, hex))| {
                InstructionDef::parse(mnemonic, hex).map_err(|e| CatalogError::Entry {
                    index,
                    mnemonic: mnemonic.to_string(),
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(entries = defs.len(), "loaded instruction catalog from templates");

        Ok(Self::new(defs))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InstructionDef> {
        self.defs.get(index)
    }

    /// Definitions in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, InstructionDef> {
        self.defs.iter()
    }

    /// Longest pattern in the catalog, in bytes.
    pub fn max_len(&self) -> usize {
        self.defs.iter().map(InstructionDef::len).max().unwrap_or(0)
    }

    /// Checks every entry for marker/placeholder disagreement and unreachable entries.
    pub fn lint(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for (index, def) in self.defs.iter().enumerate() {
            let markers: Vec<_> = def.markers().collect();
            let placeholders: Vec<_> = def.placeholders().collect();

            if markers.len() != placeholders.len() {
                issues.push(CatalogIssue::MarkerCountMismatch {
                    index,
                    markers: markers.len(),
                    placeholders: placeholders.len(),
                });
            }

            // The k-th operand byte fills the k-th marker counting from the right.
            for ((offset, kind), (_, marker_kind)) in
                placeholders.iter().zip(markers.iter().rev())
            {
                if kind != marker_kind {
                    issues.push(CatalogIssue::MarkerKindMismatch {
                        index,
                        offset: *offset,
                        expected: kind.marker().unwrap_or('?'),
                        found: marker_kind.marker().unwrap_or('?'),
                    });
                }
            }

            if let Some(by) = self.defs[..index]
                .iter()
                .position(|earlier| def.is_covered_by(earlier))
            {
                issues.push(CatalogIssue::Shadowed { index, by });
            }
        }

        issues
    }

    /// Runs [`lint`](Self::lint), logging each issue as a warning. Returns the issue count.
    pub fn lint_and_log(&self) -> usize {
        let issues = self.lint();
        for issue in &issues {
            let def = &self.defs[issue.index()];
            tracing::warn!(instruction = %def, "{}", issue);
        }
        issues.len()
    }
}

impl<'a> IntoIterator for &'a InstructionCatalog {
    type Item = &'a InstructionDef;
    type IntoIter = std::slice::Iter<'a, InstructionDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_and_placeholders() {
        let def = InstructionDef::parse("LD HL,nn", "21 n n").unwrap();
        assert_eq!(
            def.tokens(),
            &[
                PatternToken::Literal(0x21),
                PatternToken::Immediate,
                PatternToken::Immediate
            ]
        );
        assert_eq!(def.len(), 3);
        assert_eq!(def.placeholder_count(), 2);
        assert_eq!(def.marker_count(), 2);
        assert_eq!(def.operand_offset(), Some(1));
    }

    #[test]
    fn test_parse_rejects_empty_template() {
        assert_eq!(InstructionDef::parse("NOP", "  "), Err(CatalogError::EmptyTemplate));
    }

    #[test]
    fn test_parse_rejects_joined_placeholders() {
        assert_eq!(
            InstructionDef::parse("LD HL,nn", "21 nn"),
            Err(CatalogError::JoinedPlaceholders {
                position: 1,
                token: "nn".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert!(matches!(
            InstructionDef::parse("X", "0G"),
            Err(CatalogError::InvalidToken { position: 0, .. })
        ));
        assert!(matches!(
            InstructionDef::parse("X", "100"),
            Err(CatalogError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_leading_placeholder() {
        assert_eq!(
            InstructionDef::parse("n", "n 00"),
            Err(CatalogError::LeadingPlaceholder)
        );
    }

    #[test]
    fn test_from_templates_reports_failing_entry() {
        let err =
            InstructionCatalog::from_templates([("NOP", "00"), ("JR d", "18 dd")]).unwrap_err();
        match err {
            CatalogError::Entry { index, mnemonic, .. } => {
                assert_eq!(index, 1);
                assert_eq!(mnemonic, "JR d");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_operand_offset_for_plain_opcode() {
        let def = InstructionDef::parse("NOP", "00").unwrap();
        assert_eq!(def.operand_offset(), None);
    }

    #[test]
    fn test_display_shows_both_templates() {
        let def = InstructionDef::parse("JR NZ,d", "20 d").unwrap();
        assert_eq!(def.to_string(), "JR NZ,d (20 d)");
    }

    #[test]
    fn test_lint_flags_marker_count_mismatch() {
        let catalog = InstructionCatalog::from_templates([("LD A,n", "3E n n")]).unwrap();
        assert_eq!(
            catalog.lint(),
            vec![CatalogIssue::MarkerCountMismatch {
                index: 0,
                markers: 1,
                placeholders: 2
            }]
        );
    }

    #[test]
    fn test_lint_flags_kind_mismatch_under_rightmost_first_order() {
        let catalog = InstructionCatalog::from_templates([("LD (IX+d),n", "DD 36 d n")]).unwrap();
        assert_eq!(
            catalog.lint(),
            vec![
                CatalogIssue::MarkerKindMismatch {
                    index: 0,
                    offset: 2,
                    expected: 'd',
                    found: 'n'
                },
                CatalogIssue::MarkerKindMismatch {
                    index: 0,
                    offset: 3,
                    expected: 'n',
                    found: 'd'
                },
            ]
        );
    }

    #[test]
    fn test_lint_flags_shadowed_entry() {
        let catalog =
            InstructionCatalog::from_templates([("PREFIX n", "DD n"), ("LD IX,nn", "DD 21 n n")])
                .unwrap();
        assert_eq!(catalog.lint(), vec![CatalogIssue::Shadowed { index: 1, by: 0 }]);
    }

    #[test]
    fn test_longer_earlier_entry_does_not_shadow() {
        let catalog =
            InstructionCatalog::from_templates([("LD IX,nn", "DD 21 n n"), ("PREFIX n", "DD n")])
                .unwrap();
        assert!(catalog.lint().is_empty());
    }

    #[test]
    fn test_max_len() {
        let catalog =
            InstructionCatalog::from_templates([("NOP", "00"), ("BIT 0,(IX+d)", "DD CB d 46")])
                .unwrap();
        assert_eq!(catalog.max_len(), 4);
        assert_eq!(InstructionCatalog::new(Vec::new()).max_len(), 0);
    }

    #[test]
    fn test_lint_and_log_counts_issues() {
        let catalog = InstructionCatalog::from_templates([("LD A,n", "3E")]).unwrap();
        assert_eq!(catalog.lint_and_log(), 1);
        assert_eq!(InstructionCatalog::z80().lint_and_log(), 4);
    }

    #[test]
    fn test_catalog_access_in_order() {
        let catalog = InstructionCatalog::from_templates([("NOP", "00"), ("HALT", "76")]).unwrap();

        assert_eq!(catalog.get(1).map(InstructionDef::template), Some("HALT"));
        assert!(catalog.get(2).is_none());

        let templates: Vec<&str> = (&catalog).into_iter().map(|d| d.template()).collect();
        assert_eq!(templates, vec!["NOP", "HALT"]);
    }

    #[test]
    #[should_panic(expected = "instruction pattern is empty")]
    fn test_static_constructor_rejects_empty_pattern() {
        let _ = InstructionDef::new("X", &[]);
    }

    #[test]
    #[should_panic(expected = "must start with a literal opcode byte")]
    fn test_static_constructor_rejects_leading_placeholder() {
        let _ = InstructionDef::new("X n", &[PatternToken::Immediate]);
    }

    #[test]
    fn test_static_constructor_accepts_literal_first_byte() {
        const PATTERN: &[PatternToken] = &[PatternToken::Literal(0x18), PatternToken::Displacement];
        let def = InstructionDef::new("JR d", PATTERN);
        assert_eq!(def.len(), 2);
        assert_eq!(def.hex_template(), "18 d");
    }
}
