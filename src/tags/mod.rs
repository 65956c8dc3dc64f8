mod lexer;

use std::fs;
use std::path::Path;

use logos::Logos;
use tracing::{debug, trace};

use lexer::Token;

/// Annotation identifier that declares a test file's tags.
const TAG_ANNOTATION: &str = "Tags";

/// Directive keywords the tag annotation may be attached to.
const DIRECTIVE_KEYWORDS: [&str; 4] = ["import", "export", "library", "part"];

/// Safety bound on how many prelude tokens are examined.
const PRELUDE_TOKEN_LIMIT: usize = 4096;

/// Report whether the test file at `path` declares at least one of the
/// requested tags.
///
/// This is a purely syntactic check of one fixed location: the first
/// annotation on the file's first top-level directive. Unreadable files,
/// malformed preludes, and files without a tag declaration all count as
/// "no match"; one bad file must never abort a whole-tree scan, so there
/// is no error channel here.
pub fn matches(path: &Path, requested: &[String]) -> bool {
    if requested.is_empty() {
        return false;
    }

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            debug!(path = %path.display(), %error, "could not read test file, treating as untagged");
            return false;
        }
    };

    let declared = declared_tags(&source);
    trace!(path = %path.display(), ?declared, "extracted tag declaration");

    declared
        .iter()
        .any(|tag| requested.iter().any(|r| r == tag))
}

/// Extract the tags declared by a leading `@Tags([...])` annotation on the
/// source's first directive. Returns an empty list when the declaration is
/// absent or does not have the fixed shape.
pub fn declared_tags(source: &str) -> Vec<String> {
    parse_prelude(&lex_prelude(source))
}

/// Lex up to the end of the first statement. The tag declaration lives
/// entirely before the first `;`, so nothing later can matter. Unknown
/// characters inside that region mean the prelude is not the fixed shape.
fn lex_prelude(source: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => {
                let end = token == Token::Semicolon;
                tokens.push(token);
                if end || tokens.len() >= PRELUDE_TOKEN_LIMIT {
                    break;
                }
            }
            Err(()) => return Vec::new(),
        }
    }
    tokens
}

/// Shallow parse of the fixed shape:
///
/// ```text
/// '@' 'Tags' '(' 'const'? '[' (element (',' element)*)? ']' ')'
/// annotation* directive-keyword ...
/// ```
///
/// Only string-literal elements become tags; other elements are skipped
/// without error. Any structural mismatch yields the empty tag set.
fn parse_prelude(tokens: &[Token]) -> Vec<String> {
    let mut pos = 0;

    // The first top-level node must carry an annotation at all.
    if tokens.get(pos) != Some(&Token::At) {
        return Vec::new();
    }
    pos += 1;

    // And its first annotation must be the tag marker.
    match tokens.get(pos) {
        Some(Token::Identifier(name)) if name == TAG_ANNOTATION => {}
        _ => return Vec::new(),
    }
    pos += 1;

    if tokens.get(pos) != Some(&Token::OpenParen) {
        return Vec::new();
    }
    pos += 1;

    // `const ['a']` is still a list literal.
    if matches!(tokens.get(pos), Some(Token::Identifier(kw)) if kw == "const") {
        pos += 1;
    }

    // The single argument must be a list literal.
    if tokens.get(pos) != Some(&Token::OpenBracket) {
        return Vec::new();
    }
    pos += 1;

    let mut tags = Vec::new();
    loop {
        match tokens.get(pos) {
            Some(Token::Str(value)) => {
                tags.push(value.clone());
                pos += 1;
            }
            Some(Token::CloseBracket) => {
                pos += 1;
                break;
            }
            // Commas and non-string elements are skipped silently.
            Some(_) => pos += 1,
            None => return Vec::new(),
        }
    }

    // Only the first argument matters; skip to the annotation's closing paren.
    let mut depth = 1usize;
    loop {
        let Some(token) = tokens.get(pos) else {
            return Vec::new();
        };
        pos += 1;
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
    }

    // Further annotations may sit between the tag list and the directive.
    while tokens.get(pos) == Some(&Token::At) {
        pos += 1;
        if !matches!(tokens.get(pos), Some(Token::Identifier(_))) {
            return Vec::new();
        }
        pos += 1;
        if tokens.get(pos) == Some(&Token::OpenParen) {
            let mut depth = 0usize;
            let mut closed = false;
            while let Some(token) = tokens.get(pos) {
                pos += 1;
                match token {
                    Token::OpenParen => depth += 1,
                    Token::CloseParen => {
                        depth -= 1;
                        if depth == 0 {
                            closed = true;
                            break;
                        }
                    }
                    _ => {}
                }
            }
            if !closed {
                return Vec::new();
            }
        }
    }

    // The annotated statement must be an import-like directive.
    match tokens.get(pos) {
        Some(Token::Identifier(keyword)) if DIRECTIVE_KEYWORDS.contains(&keyword.as_str()) => tags,
        _ => Vec::new(),
    }
}
