use super::pattern::NamedPattern;
use super::types::NamedType;
use super::NamedFormalParam;
use crate::common::{BinaryOp, Ident, NativeRef, QName, UnaryOp};
use crate::symbol::VarSym;
use crate::types::TypeVar;
use miette::SourceSpan;

/// An expression as produced by the naming phase.
///
/// Local variables are already bound to [`VarSym`]s. References to
/// definitions (`Ref`), enum tags (`Tag`), and types (in `Ascribe`) still
/// carry textual names; the resolver binds them.
#[derive(Debug, Clone, PartialEq)]
pub enum NamedExpr {
    Wild { tvar: TypeVar, span: SourceSpan },
    Var { sym: VarSym, span: SourceSpan },
    /// A reference to a definition or hook, by possibly-qualified name.
    Ref { name: QName, tvar: TypeVar, span: SourceSpan },
    Unit { span: SourceSpan },
    True { span: SourceSpan },
    False { span: SourceSpan },
    Char { lit: char, span: SourceSpan },
    Float32 { lit: f32, span: SourceSpan },
    Float64 { lit: f64, span: SourceSpan },
    Int8 { lit: i8, span: SourceSpan },
    Int16 { lit: i16, span: SourceSpan },
    Int32 { lit: i32, span: SourceSpan },
    Int64 { lit: i64, span: SourceSpan },
    /// An arbitrary-precision integer literal, kept as its digit string.
    BigInt { lit: String, span: SourceSpan },
    Str { lit: String, span: SourceSpan },
    Apply {
        exp: Box<NamedExpr>,
        args: Vec<NamedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Lambda {
        fparams: Vec<NamedFormalParam>,
        exp: Box<NamedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Unary {
        op: UnaryOp,
        exp: Box<NamedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Binary {
        op: BinaryOp,
        exp1: Box<NamedExpr>,
        exp2: Box<NamedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    IfThenElse {
        exp1: Box<NamedExpr>,
        exp2: Box<NamedExpr>,
        exp3: Box<NamedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Let {
        sym: VarSym,
        exp1: Box<NamedExpr>,
        exp2: Box<NamedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Match {
        exp: Box<NamedExpr>,
        rules: Vec<NamedMatchRule>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    /// An ordered sequence of (condition, body) pairs.
    Switch {
        rules: Vec<(NamedExpr, NamedExpr)>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    /// A tag application, optionally qualified by the enum it belongs to.
    Tag {
        enum_name: Option<QName>,
        tag: Ident,
        exp: Box<NamedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Tuple {
        elms: Vec<NamedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    /// A type ascription `e : t`.
    Ascribe {
        exp: Box<NamedExpr>,
        tpe: NamedType,
        span: SourceSpan,
    },
    Existential {
        fparam: NamedFormalParam,
        exp: Box<NamedExpr>,
        span: SourceSpan,
    },
    Universal {
        fparam: NamedFormalParam,
        exp: Box<NamedExpr>,
        span: SourceSpan,
    },
    NativeConstructor {
        native: NativeRef,
        args: Vec<NamedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    NativeField {
        native: NativeRef,
        tvar: TypeVar,
        span: SourceSpan,
    },
    NativeMethod {
        native: NativeRef,
        args: Vec<NamedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    /// The `???` placeholder that aborts evaluation.
    UserError { tvar: TypeVar, span: SourceSpan },
}

/// A single rule of a match expression.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedMatchRule {
    pub pat: NamedPattern,
    pub guard: NamedExpr,
    pub exp: NamedExpr,
}

impl NamedExpr {
    pub fn span(&self) -> SourceSpan {
        match self {
            NamedExpr::Wild { span, .. }
            | NamedExpr::Var { span, .. }
            | NamedExpr::Ref { span, .. }
            | NamedExpr::Unit { span }
            | NamedExpr::True { span }
            | NamedExpr::False { span }
            | NamedExpr::Char { span, .. }
            | NamedExpr::Float32 { span, .. }
            | NamedExpr::Float64 { span, .. }
            | NamedExpr::Int8 { span, .. }
            | NamedExpr::Int16 { span, .. }
            | NamedExpr::Int32 { span, .. }
            | NamedExpr::Int64 { span, .. }
            | NamedExpr::BigInt { span, .. }
            | NamedExpr::Str { span, .. }
            | NamedExpr::Apply { span, .. }
            | NamedExpr::Lambda { span, .. }
            | NamedExpr::Unary { span, .. }
            | NamedExpr::Binary { span, .. }
            | NamedExpr::IfThenElse { span, .. }
            | NamedExpr::Let { span, .. }
            | NamedExpr::Match { span, .. }
            | NamedExpr::Switch { span, .. }
            | NamedExpr::Tag { span, .. }
            | NamedExpr::Tuple { span, .. }
            | NamedExpr::Ascribe { span, .. }
            | NamedExpr::Existential { span, .. }
            | NamedExpr::Universal { span, .. }
            | NamedExpr::NativeConstructor { span, .. }
            | NamedExpr::NativeField { span, .. }
            | NamedExpr::NativeMethod { span, .. }
            | NamedExpr::UserError { span, .. } => *span,
        }
    }
}
