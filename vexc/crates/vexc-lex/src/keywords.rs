//! Reserved word table.
//!
//! The table is built on first use and shared read-only by every lexer.
//! Lookups are exact and case-sensitive.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// Every reserved spelling and the kind it lexes to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("Define", TokenKind::Define),
    ("Fetch", TokenKind::Fetch),
    ("Set", TokenKind::Set),
    ("Interface", TokenKind::Interface),
    ("Namespace", TokenKind::Namespace),
    ("Using", TokenKind::Using),
    ("Public", TokenKind::Public),
    ("Private", TokenKind::Private),
    ("Protected", TokenKind::Protected),
    ("View", TokenKind::View),
    ("Struct", TokenKind::Struct),
    ("Class", TokenKind::Class),
    ("Ref", TokenKind::Ref),
    ("Enum", TokenKind::Enum),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("match", TokenKind::Match),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("return", TokenKind::Return),
    ("Unique", TokenKind::Unique),
    ("Shared", TokenKind::Shared),
    ("Borrow", TokenKind::Borrow),
    ("Raw", TokenKind::Raw),
    ("Unsafe", TokenKind::Unsafe),
    ("Var", TokenKind::Var),
    ("Let", TokenKind::Let),
    ("Const", TokenKind::Const),
    ("Static", TokenKind::Static),
    ("Override", TokenKind::Override),
    ("Virtual", TokenKind::Virtual),
    ("Implement", TokenKind::Implement),
    ("Operator", TokenKind::Operator),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("new", TokenKind::New),
    ("as", TokenKind::As),
    ("is", TokenKind::Is),
    ("in", TokenKind::In),
    ("step", TokenKind::Step),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("global", TokenKind::Global),
    ("null", TokenKind::Null),
    ("Int_8", TokenKind::Int8),
    ("Int_16", TokenKind::Int16),
    ("Int_32", TokenKind::Int32),
    ("Int_64", TokenKind::Int64),
    ("Uint_8", TokenKind::Uint8),
    ("Uint_16", TokenKind::Uint16),
    ("Uint_32", TokenKind::Uint32),
    ("Uint_64", TokenKind::Uint64),
    ("Float_32", TokenKind::Float32),
    ("Float_64", TokenKind::Float64),
    ("Int", TokenKind::Int),
    ("Uint", TokenKind::Uint),
    ("Float", TokenKind::Float),
    ("Double", TokenKind::Double),
    ("Bool", TokenKind::Bool),
    ("Char", TokenKind::Char),
    ("String", TokenKind::String),
    ("Void", TokenKind::Void),
    ("Vector2", TokenKind::Vector2),
    ("Vector3", TokenKind::Vector3),
    ("Vector4", TokenKind::Vector4),
    ("Quat", TokenKind::Quaternion),
    ("Color", TokenKind::Color),
    ("Transform", TokenKind::Transform),
];

lazy_static! {
    static ref KEYWORD_MAP: FxHashMap<&'static str, TokenKind> =
        KEYWORDS.iter().copied().collect();
}

/// Looks up a reserved word.
///
/// Returns `None` for anything that should lex as an identifier.
///
/// # Examples
///
/// ```
/// use vexc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("Public"), Some(TokenKind::Public));
/// assert_eq!(keyword_from_ident("public"), None);
/// assert_eq!(keyword_from_ident("Quat"), Some(TokenKind::Quaternion));
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORD_MAP.get(ident).copied()
}
