use super::pattern::ResolvedPattern;
use super::ResolvedFormalParam;
use crate::common::{BinaryOp, Ident, NativeRef, UnaryOp};
use crate::hook::Hook;
use crate::symbol::{DefnSym, EnumSym, VarSym};
use crate::types::{Type, TypeVar};
use miette::SourceSpan;

/// An expression with every reference bound.
///
/// `Ref` holds the symbol of a user definition; references that resolved
/// to a host hook become the distinct `Hook` node. Spans and the type
/// variables assigned during naming are preserved unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedExpr {
    Wild { tvar: TypeVar, span: SourceSpan },
    Var { sym: VarSym, span: SourceSpan },
    Ref { sym: DefnSym, tvar: TypeVar, span: SourceSpan },
    Hook { hook: Hook, tvar: TypeVar, span: SourceSpan },
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
    BigInt { lit: String, span: SourceSpan },
    Str { lit: String, span: SourceSpan },
    Apply {
        exp: Box<ResolvedExpr>,
        args: Vec<ResolvedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Lambda {
        fparams: Vec<ResolvedFormalParam>,
        exp: Box<ResolvedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Unary {
        op: UnaryOp,
        exp: Box<ResolvedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Binary {
        op: BinaryOp,
        exp1: Box<ResolvedExpr>,
        exp2: Box<ResolvedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    IfThenElse {
        exp1: Box<ResolvedExpr>,
        exp2: Box<ResolvedExpr>,
        exp3: Box<ResolvedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Let {
        sym: VarSym,
        exp1: Box<ResolvedExpr>,
        exp2: Box<ResolvedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Match {
        exp: Box<ResolvedExpr>,
        rules: Vec<ResolvedMatchRule>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Switch {
        rules: Vec<(ResolvedExpr, ResolvedExpr)>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Tag {
        sym: EnumSym,
        tag: Ident,
        exp: Box<ResolvedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Tuple {
        elms: Vec<ResolvedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    Ascribe {
        exp: Box<ResolvedExpr>,
        tpe: Type,
        span: SourceSpan,
    },
    Existential {
        fparam: ResolvedFormalParam,
        exp: Box<ResolvedExpr>,
        span: SourceSpan,
    },
    Universal {
        fparam: ResolvedFormalParam,
        exp: Box<ResolvedExpr>,
        span: SourceSpan,
    },
    NativeConstructor {
        native: NativeRef,
        args: Vec<ResolvedExpr>,
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
        args: Vec<ResolvedExpr>,
        tvar: TypeVar,
        span: SourceSpan,
    },
    UserError { tvar: TypeVar, span: SourceSpan },
}

/// A single rule of a resolved match expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMatchRule {
    pub pat: ResolvedPattern,
    pub guard: ResolvedExpr,
    pub exp: ResolvedExpr,
}
