//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source slice it was formed
//! from. The lexer never rebuilds text, so literal tokens keep their original
//! escaping and quoting.

use std::fmt;

use sparrow_util::Span;

/// Every kind of token the lexer can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // ===== Declaration keywords =====
    /// `associatedtype`
    Associatedtype,
    /// `class`
    Class,
    /// `deinit`
    Deinit,
    /// `enum`
    Enum,
    /// `extension`
    Extension,
    /// `func`
    Func,
    /// `import`
    Import,
    /// `init`
    Init,
    /// `inout`
    Inout,
    /// `let`
    Let,
    /// `operator`
    Operator,
    /// `precedencegroup`
    Precedencegroup,
    /// `protocol`
    Protocol,
    /// `struct`
    Struct,
    /// `subscript`
    Subscript,
    /// `typealias`
    Typealias,
    /// `var`
    Var,
    /// `__shared`
    Shared,
    /// `__owned`
    Owned,

    // ===== Modifiers =====
    /// `fileprivate`
    Fileprivate,
    /// `internal`
    Internal,
    /// `private`
    Private,
    /// `public`
    Public,
    /// `static`
    Static,

    // ===== Statement keywords =====
    /// `defer`
    Defer,
    /// `if`
    If,
    /// `guard`
    Guard,
    /// `do`
    Do,
    /// `repeat`
    Repeat,
    /// `else`
    Else,
    /// `for`
    For,
    /// `in`
    In,
    /// `while`
    While,
    /// `return`
    Return,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `fallthrough`
    Fallthrough,
    /// `switch`
    Switch,
    /// `case`
    Case,
    /// `default`
    Default,
    /// `where`
    Where,
    /// `catch`
    Catch,

    // ===== Expression keywords =====
    /// `as`
    As,
    /// `Any`
    Any,
    /// `false`
    False,
    /// `is`
    Is,
    /// `nil`
    Nil,
    /// `rethrows`
    Rethrows,
    /// `super`
    Super,
    /// `self`
    SelfValue,
    /// `Self`
    SelfType,
    /// `throw`
    Throw,
    /// `true`
    True,
    /// `try`
    Try,
    /// `throws`
    Throws,
    /// `__FILE__`
    MagicFile,
    /// `__LINE__`
    MagicLine,
    /// `__COLUMN__`
    MagicColumn,
    /// `__FUNCTION__`
    MagicFunction,
    /// `__DSO_HANDLE__`
    MagicDsoHandle,
    /// `_`
    Underscore,

    // ===== Trivia =====
    /// Whitespace run (only with trivia retention)
    Whitespace,
    /// Line or block comment, or a hashbang line (only with trivia retention)
    Comment,

    // ===== Directives =====
    /// `#if`
    PoundIf,
    /// `#else`
    PoundElse,
    /// `#elseif`
    PoundElseif,
    /// `#endif`
    PoundEndif,
    /// `#keyPath`
    PoundKeyPath,
    /// `#line`
    PoundLine,
    /// `#sourceLocation`
    PoundSourceLocation,
    /// `#selector`
    PoundSelector,
    /// `#file`
    PoundFile,
    /// `#column`
    PoundColumn,
    /// `#function`
    PoundFunction,
    /// `#dsohandle`
    PoundDsohandle,

    // ===== Delimiters =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LSquare,
    /// `]`
    RSquare,

    // ===== Separators =====
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semi,
    /// `@`
    AtSign,
    /// A `#` that does not start a known directive
    Pound,
    /// `\`
    Backslash,
    /// A backtick that does not enclose an identifier
    Backtick,

    // ===== Operator-shaped tokens =====
    /// `=`
    Equal,
    /// Prefix `&`
    AmpPrefix,
    /// Member access `.`
    Period,
    /// Prefix `.`
    PeriodPrefix,
    /// Postfix `!`
    ExclaimPostfix,
    /// Postfix `?`
    QuestionPostfix,
    /// Infix `?` (ternary)
    QuestionInfix,
    /// `->`
    Arrow,
    /// Binary operator bound on both sides, `a+b`
    OperBinaryUnspaced,
    /// Binary operator free on both sides, `a + b`
    OperBinarySpaced,
    /// Postfix operator, `a++ `
    OperPostfix,
    /// Prefix operator, ` -a`
    OperPrefix,

    // ===== Literals =====
    /// Integer literal in any radix
    IntegerLiteral,
    /// Decimal or hexadecimal floating-point literal
    FloatingLiteral,
    /// String literal, including its quotes
    StringLiteral,

    // ===== Names =====
    /// Identifier, including backtick-escaped identifiers
    Identifier,
    /// Positional `$0`-style identifier
    DollarIdent,

    // ===== Terminal =====
    /// End of input
    Eof,
    /// Malformed input
    Unknown,
}

impl TokenKind {
    /// Looks up a reserved word.
    ///
    /// ```
    /// use sparrow_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_keyword("init"), Some(TokenKind::Init));
    /// assert_eq!(TokenKind::from_keyword("Self"), Some(TokenKind::SelfType));
    /// assert_eq!(TokenKind::from_keyword("initialize"), None);
    /// ```
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        use TokenKind::*;

        let kind = match text {
            "associatedtype" => Associatedtype,
            "class" => Class,
            "deinit" => Deinit,
            "enum" => Enum,
            "extension" => Extension,
            "func" => Func,
            "import" => Import,
            "init" => Init,
            "inout" => Inout,
            "let" => Let,
            "operator" => Operator,
            "precedencegroup" => Precedencegroup,
            "protocol" => Protocol,
            "struct" => Struct,
            "subscript" => Subscript,
            "typealias" => Typealias,
            "var" => Var,
            "__shared" => Shared,
            "__owned" => Owned,

            "fileprivate" => Fileprivate,
            "internal" => Internal,
            "private" => Private,
            "public" => Public,
            "static" => Static,

            "defer" => Defer,
            "if" => If,
            "guard" => Guard,
            "do" => Do,
            "repeat" => Repeat,
            "else" => Else,
            "for" => For,
            "in" => In,
            "while" => While,
            "return" => Return,
            "break" => Break,
            "continue" => Continue,
            "fallthrough" => Fallthrough,
            "switch" => Switch,
            "case" => Case,
            "default" => Default,
            "where" => Where,
            "catch" => Catch,

            "as" => As,
            "Any" => Any,
            "false" => False,
            "is" => Is,
            "nil" => Nil,
            "rethrows" => Rethrows,
            "super" => Super,
            "self" => SelfValue,
            "Self" => SelfType,
            "throw" => Throw,
            "true" => True,
            "try" => Try,
            "throws" => Throws,
            "__FILE__" => MagicFile,
            "__LINE__" => MagicLine,
            "__COLUMN__" => MagicColumn,
            "__FUNCTION__" => MagicFunction,
            "__DSO_HANDLE__" => MagicDsoHandle,
            "_" => Underscore,
            _ => return None,
        };
        Some(kind)
    }

    /// Looks up the name following a `#`.
    ///
    /// ```
    /// use sparrow_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_directive("elseif"), Some(TokenKind::PoundElseif));
    /// assert_eq!(TokenKind::from_directive("warning"), None);
    /// ```
    pub fn from_directive(name: &str) -> Option<TokenKind> {
        let kind = match name {
            "if" => TokenKind::PoundIf,
            "else" => TokenKind::PoundElse,
            "elseif" => TokenKind::PoundElseif,
            "endif" => TokenKind::PoundEndif,
            "keyPath" => TokenKind::PoundKeyPath,
            "line" => TokenKind::PoundLine,
            "sourceLocation" => TokenKind::PoundSourceLocation,
            "selector" => TokenKind::PoundSelector,
            "file" => TokenKind::PoundFile,
            "column" => TokenKind::PoundColumn,
            "function" => TokenKind::PoundFunction,
            "dsohandle" => TokenKind::PoundDsohandle,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for whitespace and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        self <= TokenKind::Underscore
    }

    /// Returns true for `#`-directives.
    pub fn is_directive(self) -> bool {
        (TokenKind::PoundIf..=TokenKind::PoundDsohandle).contains(&self)
    }

    /// Returns true for operator-shaped tokens.
    pub fn is_operator(self) -> bool {
        (TokenKind::Equal..=TokenKind::OperPrefix).contains(&self)
    }

    /// Returns true for literals.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral | TokenKind::FloatingLiteral | TokenKind::StringLiteral
        )
    }

    /// The name used when printing tokens.
    ///
    /// Keywords print as their spelling; everything else uses a lower camel
    /// case name.
    pub fn name(self) -> &'static str {
        use TokenKind::*;

        match self {
            Associatedtype => "associatedtype",
            Class => "class",
            Deinit => "deinit",
            Enum => "enum",
            Extension => "extension",
            Func => "func",
            Import => "import",
            Init => "init",
            Inout => "inout",
            Let => "let",
            Operator => "operator",
            Precedencegroup => "precedencegroup",
            Protocol => "protocol",
            Struct => "struct",
            Subscript => "subscript",
            Typealias => "typealias",
            Var => "var",
            Shared => "__shared",
            Owned => "__owned",
            Fileprivate => "fileprivate",
            Internal => "internal",
            Private => "private",
            Public => "public",
            Static => "static",
            Defer => "defer",
            If => "if",
            Guard => "guard",
            Do => "do",
            Repeat => "repeat",
            Else => "else",
            For => "for",
            In => "in",
            While => "while",
            Return => "return",
            Break => "break",
            Continue => "continue",
            Fallthrough => "fallthrough",
            Switch => "switch",
            Case => "case",
            Default => "default",
            Where => "where",
            Catch => "catch",
            As => "as",
            Any => "Any",
            False => "false",
            Is => "is",
            Nil => "nil",
            Rethrows => "rethrows",
            Super => "super",
            SelfValue => "self",
            SelfType => "Self",
            Throw => "throw",
            True => "true",
            Try => "try",
            Throws => "throws",
            MagicFile => "__FILE__",
            MagicLine => "__LINE__",
            MagicColumn => "__COLUMN__",
            MagicFunction => "__FUNCTION__",
            MagicDsoHandle => "__DSO_HANDLE__",
            Underscore => "_",
            Whitespace => "whitespace",
            Comment => "comment",
            PoundIf => "poundIf",
            PoundElse => "poundElse",
            PoundElseif => "poundElseif",
            PoundEndif => "poundEndif",
            PoundKeyPath => "poundKeyPath",
            PoundLine => "poundLine",
            PoundSourceLocation => "poundSourceLocation",
            PoundSelector => "poundSelector",
            PoundFile => "poundFile",
            PoundColumn => "poundColumn",
            PoundFunction => "poundFunction",
            PoundDsohandle => "poundDsohandle",
            LParen => "lParen",
            RParen => "rParen",
            LBrace => "lBrace",
            RBrace => "rBrace",
            LSquare => "lSquare",
            RSquare => "rSquare",
            Comma => "comma",
            Colon => "colon",
            Semi => "semi",
            AtSign => "atSign",
            Pound => "pound",
            Backslash => "backslash",
            Backtick => "backtick",
            Equal => "equal",
            AmpPrefix => "ampPrefix",
            Period => "period",
            PeriodPrefix => "periodPrefix",
            ExclaimPostfix => "exclaimPostfix",
            QuestionPostfix => "questionPostfix",
            QuestionInfix => "questionInfix",
            Arrow => "arrow",
            OperBinaryUnspaced => "operBinaryUnspaced",
            OperBinarySpaced => "operBinarySpaced",
            OperPostfix => "operPostfix",
            OperPrefix => "operPrefix",
            IntegerLiteral => "integerLiteral",
            FloatingLiteral => "floatingLiteral",
            StringLiteral => "stringLiteral",
            Identifier => "identifier",
            DollarIdent => "dollarIdent",
            Eof => "eof",
            Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: a kind plus the exact text it covers.
///
/// # Example
///
/// ```
/// use sparrow_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let answer = 42");
/// let token = lexer.next_token();
///
/// assert_eq!(token.kind, TokenKind::Let);
/// assert_eq!(token.text, "let");
/// assert!(token.is_first_in_line);
/// assert_eq!(token.to_string(), "let(\"let\")");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// What the token is.
    pub kind: TokenKind,
    /// The source slice the token was formed from.
    pub text: &'a str,
    /// True if no non-trivia token precedes this one on its line.
    pub is_first_in_line: bool,
    /// Scalar range of `text` in the source.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: &'a str, is_first_in_line: bool, span: Span) -> Self {
        Self {
            kind,
            text,
            is_first_in_line,
            span,
        }
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true for whitespace and comment tokens.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
