//! Token definitions for the Vex lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the text it was scanned from, its
//! position, and (for numeric literals) the decoded [`Literal`] value.

use std::fmt;

use serde::Serialize;
use vexc_util::Span;

/// The kind of a token.
///
/// Kinds are grouped the same way the language reference groups them:
/// declaration keywords, access modifiers, type keywords, control flow,
/// memory/ownership keywords, variable and function keywords, literals,
/// primitive and game-math types, operators, delimiters and specials.
///
/// Serialized (and rendered by [`TokenKind::name`]) in `UPPER_SNAKE_CASE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Declaration keywords
    /// `Define`
    Define,
    /// `Fetch`
    Fetch,
    /// `Set`
    Set,
    /// `Interface`
    Interface,
    /// `Namespace`
    Namespace,
    /// `Using`
    Using,

    // Access modifiers
    /// `Public`
    Public,
    /// `Private`
    Private,
    /// `Protected`
    Protected,
    /// `View`
    View,

    // Type keywords
    /// `Struct`
    Struct,
    /// `Class`
    Class,
    /// `Ref`
    Ref,
    /// `Enum`
    Enum,

    // Control flow
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`
    While,
    /// `do`
    Do,
    /// `match`
    Match,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `return`
    Return,

    // Memory keywords
    /// `Unique`
    Unique,
    /// `Shared`
    Shared,
    /// `Borrow`
    Borrow,
    /// `Raw`
    Raw,
    /// `Unsafe`
    Unsafe,

    // Variable keywords
    /// `Var`
    Var,
    /// `Let`
    Let,
    /// `Const`
    Const,
    /// `Static`
    Static,

    // Function keywords
    /// `Override`
    Override,
    /// `Virtual`
    Virtual,
    /// `Implement`
    Implement,
    /// `Operator`
    Operator,

    // Boolean literals
    /// `true`
    True,
    /// `false`
    False,

    // Other keywords
    /// `new`
    New,
    /// `as`
    As,
    /// `is`
    Is,
    /// `in`
    In,
    /// `step`
    Step,
    /// `super`
    Super,
    /// `this`
    This,
    /// `global`
    Global,
    /// `null`
    Null,

    // Primitive types
    /// `Int_8`
    Int8,
    /// `Int_16`
    Int16,
    /// `Int_32`
    Int32,
    /// `Int_64`
    Int64,
    /// `Uint_8`
    Uint8,
    /// `Uint_16`
    Uint16,
    /// `Uint_32`
    Uint32,
    /// `Uint_64`
    Uint64,
    /// `Float_32`
    Float32,
    /// `Float_64`
    Float64,
    /// `Int`
    Int,
    /// `Uint`
    Uint,
    /// `Float`
    Float,
    /// `Double`
    Double,
    /// `Bool`
    Bool,
    /// `Char`
    Char,
    /// `String`
    String,
    /// `Void`
    Void,

    // Game types
    /// `Vector2`
    Vector2,
    /// `Vector3`
    Vector3,
    /// `Vector4`
    Vector4,
    /// `Quat`
    Quaternion,
    /// `Color`
    Color,
    /// `Transform`
    Transform,

    // Identifiers and literals
    /// A name that is not a keyword
    Identifier,
    /// `45`
    IntegerLiteral,
    /// `3.14`
    FloatLiteral,
    /// `"text"`
    StringLiteral,
    /// `'c'`
    CharLiteral,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `**`
    Power,

    /// `=`
    Assign,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    StarAssign,
    /// `/=`
    SlashAssign,
    /// `%=`
    PercentAssign,

    /// `==`
    Equal,
    /// `===`
    TypeValEq,
    /// `!=`
    NotEqual,
    /// `!==`
    TypeValNeq,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,

    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,

    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `~`
    BitwiseNot,
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,

    /// `->`
    Arrow,
    /// `.`
    Dot,
    /// `..`
    DoubleDot,
    /// `..=`
    DotDotEqual,
    /// `?`
    Question,
    /// `?.`
    QuestionDot,
    /// `??`
    DoubleQuestion,
    /// `:`
    Colon,
    /// `::`
    DoubleColon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `#`
    Hash,
    /// `@`
    At,
    /// `_` (the lexer scans a lone `_` as an identifier)
    Underscore,

    // Delimiters
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,

    // Special
    /// End of input
    EndOfFile,
    /// A lexical error; the token's lexeme holds the message
    Unknown,
}

impl TokenKind {
    /// Returns the canonical upper-snake name of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use vexc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::TypeValEq.name(), "TYPE_VAL_EQ");
    /// assert_eq!(TokenKind::Null.name(), "NULL");
    /// ```
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Define => "DEFINE",
            Fetch => "FETCH",
            Set => "SET",
            Interface => "INTERFACE",
            Namespace => "NAMESPACE",
            Using => "USING",
            Public => "PUBLIC",
            Private => "PRIVATE",
            Protected => "PROTECTED",
            View => "VIEW",
            Struct => "STRUCT",
            Class => "CLASS",
            Ref => "REF",
            Enum => "ENUM",
            If => "IF",
            Else => "ELSE",
            For => "FOR",
            While => "WHILE",
            Do => "DO",
            Match => "MATCH",
            Break => "BREAK",
            Continue => "CONTINUE",
            Return => "RETURN",
            Unique => "UNIQUE",
            Shared => "SHARED",
            Borrow => "BORROW",
            Raw => "RAW",
            Unsafe => "UNSAFE",
            Var => "VAR",
            Let => "LET",
            Const => "CONST",
            Static => "STATIC",
            Override => "OVERRIDE",
            Virtual => "VIRTUAL",
            Implement => "IMPLEMENT",
            Operator => "OPERATOR",
            True => "TRUE",
            False => "FALSE",
            New => "NEW",
            As => "AS",
            Is => "IS",
            In => "IN",
            Step => "STEP",
            Super => "SUPER",
            This => "THIS",
            Global => "GLOBAL",
            Null => "NULL",
            Int8 => "INT8",
            Int16 => "INT16",
            Int32 => "INT32",
            Int64 => "INT64",
            Uint8 => "UINT8",
            Uint16 => "UINT16",
            Uint32 => "UINT32",
            Uint64 => "UINT64",
            Float32 => "FLOAT32",
            Float64 => "FLOAT64",
            Int => "INT",
            Uint => "UINT",
            Float => "FLOAT",
            Double => "DOUBLE",
            Bool => "BOOL",
            Char => "CHAR",
            String => "STRING",
            Void => "VOID",
            Vector2 => "VECTOR2",
            Vector3 => "VECTOR3",
            Vector4 => "VECTOR4",
            Quaternion => "QUATERNION",
            Color => "COLOR",
            Transform => "TRANSFORM",
            Identifier => "IDENTIFIER",
            IntegerLiteral => "INTEGER_LITERAL",
            FloatLiteral => "FLOAT_LITERAL",
            StringLiteral => "STRING_LITERAL",
            CharLiteral => "CHAR_LITERAL",
            Plus => "PLUS",
            Minus => "MINUS",
            Star => "STAR",
            Slash => "SLASH",
            Percent => "PERCENT",
            Power => "POWER",
            Assign => "ASSIGN",
            PlusAssign => "PLUS_ASSIGN",
            MinusAssign => "MINUS_ASSIGN",
            StarAssign => "STAR_ASSIGN",
            SlashAssign => "SLASH_ASSIGN",
            PercentAssign => "PERCENT_ASSIGN",
            Equal => "EQUAL",
            TypeValEq => "TYPE_VAL_EQ",
            NotEqual => "NOT_EQUAL",
            TypeValNeq => "TYPE_VAL_NEQ",
            Less => "LESS",
            Greater => "GREATER",
            LessEqual => "LESS_EQUAL",
            GreaterEqual => "GREATER_EQUAL",
            And => "AND",
            Or => "OR",
            Not => "NOT",
            BitwiseAnd => "BITWISE_AND",
            BitwiseOr => "BITWISE_OR",
            BitwiseXor => "BITWISE_XOR",
            BitwiseNot => "BITWISE_NOT",
            LeftShift => "LEFT_SHIFT",
            RightShift => "RIGHT_SHIFT",
            Arrow => "ARROW",
            Dot => "DOT",
            DoubleDot => "DOUBLE_DOT",
            DotDotEqual => "DOT_DOT_EQUAL",
            Question => "QUESTION",
            QuestionDot => "QUESTION_DOT",
            DoubleQuestion => "DOUBLE_QUESTION",
            Colon => "COLON",
            DoubleColon => "DOUBLE_COLON",
            Semicolon => "SEMICOLON",
            Comma => "COMMA",
            Hash => "HASH",
            At => "AT",
            Underscore => "UNDERSCORE",
            LeftParen => "LEFT_PAREN",
            RightParen => "RIGHT_PAREN",
            LeftBrace => "LEFT_BRACE",
            RightBrace => "RIGHT_BRACE",
            LeftBracket => "LEFT_BRACKET",
            RightBracket => "RIGHT_BRACKET",
            EndOfFile => "END_OF_FILE",
            Unknown => "UNKNOWN",
        }
    }

    /// Returns true for reserved words, including boolean literals and
    /// type names.
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::Define && self <= TokenKind::Transform
    }

    /// Returns true for the four literal kinds.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
        )
    }

    /// Returns true for arithmetic, assignment, comparison, logical,
    /// bitwise and access operators.
    pub fn is_operator(self) -> bool {
        self >= TokenKind::Plus && self <= TokenKind::DoubleQuestion
    }

    /// Returns true for brackets and separators.
    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::LeftBrace
                | TokenKind::RightBrace
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Colon
                | TokenKind::DoubleColon
        )
    }

    /// Returns true for built-in scalar type keywords (`Int_32`, `Bool`, ...).
    pub fn is_primitive_type(self) -> bool {
        self >= TokenKind::Int8 && self <= TokenKind::Void
    }

    /// Returns true for the game-math types (`Vector2` through `Transform`).
    pub fn is_game_type(self) -> bool {
        self >= TokenKind::Vector2 && self <= TokenKind::Transform
    }

    /// Returns true for ownership qualifiers (`Unique`, `Shared`, `Borrow`,
    /// `Raw`, `Unsafe`).
    pub fn is_memory_keyword(self) -> bool {
        self >= TokenKind::Unique && self <= TokenKind::Unsafe
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value of a numeric literal.
///
/// Only `IntegerLiteral` tokens carry `Integer` and only `FloatLiteral`
/// tokens carry `Float`; every other token carries `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum Literal {
    /// No value
    #[default]
    None,
    /// Value of an integer literal
    Integer(i64),
    /// Value of a float literal
    Float(f64),
}

impl Literal {
    /// Returns the integer value, if this is an integer literal.
    pub fn int_value(self) -> Option<i64> {
        match self {
            Literal::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the float value, if this is a float literal.
    pub fn float_value(self) -> Option<f64> {
        match self {
            Literal::Float(value) => Some(value),
            _ => None,
        }
    }
}

/// A single token produced by the lexer.
///
/// Tokens own their lexeme and hold no reference back into the lexer.
///
/// # Examples
///
/// ```
/// use vexc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("Set Score = 45");
/// assert_eq!(tokens[3].kind, TokenKind::IntegerLiteral);
/// assert_eq!(tokens[3].int_value(), Some(45));
/// assert_eq!(
///     tokens[1].to_string(),
///     "Token(Type: IDENTIFIER, Lexeme: 'Score', Line: 1, Column: 5)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// Source text, the decoded value for string and char literals, or
    /// the message for `Unknown`
    pub lexeme: String,
    /// Line of the first character (1-based)
    pub line: u32,
    /// Column of the first character (1-based)
    pub column: u32,
    /// Decoded numeric value
    pub literal: Literal,
    /// Byte range of the token in the source
    pub span: Span,
}

impl Token {
    /// Creates a token starting at `span`'s line and column.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line: span.line,
            column: span.column,
            literal: Literal::None,
            span,
        }
    }

    /// Attaches a numeric value.
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = literal;
        self
    }

    /// Returns the integer value of an `IntegerLiteral` token.
    #[inline]
    pub fn int_value(&self) -> Option<i64> {
        self.literal.int_value()
    }

    /// Returns the float value of a `FloatLiteral` token.
    #[inline]
    pub fn float_value(&self) -> Option<f64> {
        self.literal.float_value()
    }

    /// Returns true if this is the end-of-file token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Returns true if this token reports a lexical error.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Unknown
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(Type: {}, Lexeme: '{}', Line: {}, Column: {})",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}
