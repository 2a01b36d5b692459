use crate::{resource::PropertyId, value::Value};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fmt,
    ops::{BitAnd, BitOr},
};

///
/// Predicate AST
///
/// Pure, backend-agnostic representation of resource query predicates.
/// This layer carries no knowledge of which properties a backend can
/// filter on. All interpretation occurs in later passes:
///
/// - simplification (equality pushdown)
/// - request extraction
/// - evaluation (post-filter)
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Contains,
}

impl CompareOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Contains => ".contains",
        }
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ComparePredicate {
    pub property: PropertyId,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(property: impl Into<PropertyId>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            property: property.into(),
            op,
            value: value.into(),
        }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn compare(property: impl Into<PropertyId>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(property, op, value))
    }

    #[must_use]
    pub fn eq(property: impl Into<PropertyId>, value: impl Into<Value>) -> Self {
        Self::compare(property, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn ne(property: impl Into<PropertyId>, value: impl Into<Value>) -> Self {
        Self::compare(property, CompareOp::Ne, value)
    }

    #[must_use]
    pub fn lt(property: impl Into<PropertyId>, value: impl Into<Value>) -> Self {
        Self::compare(property, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(property: impl Into<PropertyId>, value: impl Into<Value>) -> Self {
        Self::compare(property, CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(property: impl Into<PropertyId>, value: impl Into<Value>) -> Self {
        Self::compare(property, CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(property: impl Into<PropertyId>, value: impl Into<Value>) -> Self {
        Self::compare(property, CompareOp::Gte, value)
    }

    #[must_use]
    pub fn contains(property: impl Into<PropertyId>, value: impl Into<Value>) -> Self {
        Self::compare(property, CompareOp::Contains, value)
    }

    #[must_use]
    pub const fn is_or(&self) -> bool {
        matches!(self, Self::Or(_))
    }

    /// Every property id referenced anywhere in the tree.
    #[must_use]
    pub fn property_ids(&self) -> BTreeSet<PropertyId> {
        let mut out = BTreeSet::new();
        collect_property_ids(self, &mut out);
        out
    }
}

fn collect_property_ids(predicate: &Predicate, out: &mut BTreeSet<PropertyId>) {
    match predicate {
        Predicate::True | Predicate::False => {}
        Predicate::And(children) | Predicate::Or(children) => {
            for child in children {
                collect_property_ids(child, out);
            }
        }
        Predicate::Not(inner) => collect_property_ids(inner, out),
        Predicate::Compare(cmp) => {
            out.insert(cmp.property.clone());
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("TRUE"),
            Self::False => f.write_str("FALSE"),
            Self::And(children) => write_joined(f, children, " AND "),
            Self::Or(children) => write_joined(f, children, " OR "),
            Self::Not(inner) => write!(f, "NOT {inner}"),
            Self::Compare(cmp) => match cmp.op {
                CompareOp::Contains => write!(f, "{}.contains({})", cmp.property, cmp.value),
                op => write!(f, "{}{}{}", cmp.property, op.symbol(), cmp.value),
            },
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[Predicate], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (idx, child) in children.iter().enumerate() {
        if idx > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{child}")?;
    }
    f.write_str(")")
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitAnd for &Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Self) -> Self::Output {
        Predicate::And(vec![self.clone(), rhs.clone()])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl BitOr for &Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Self) -> Self::Output {
        Predicate::Or(vec![self.clone(), rhs.clone()])
    }
}

///
/// TESTS
///
