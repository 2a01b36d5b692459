//! Module: predicate::builder
//! Responsibility: fluent infix construction of predicate trees.
//! Does not own: evaluation or simplification.
//! Boundary: user-facing ergonomic builder layer.

use crate::{
    error::BuilderError,
    predicate::{CompareOp, Predicate},
    resource::PropertyId,
    value::Value,
};

///
/// Expect
///
/// What the builder accepts next within the current block.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Expect {
    Operand,
    Operator,
}

///
/// Block
///
/// One `begin`/`end` group. Completed conjunctions accumulate in
/// `disjuncts`; the conjunction under construction lives in `conjuncts`.
///

#[derive(Debug)]
struct Block {
    disjuncts: Vec<Predicate>,
    conjuncts: Vec<Predicate>,
    negated: bool,
    negate_next: bool,
    expect: Expect,
}

impl Block {
    const fn new(negated: bool) -> Self {
        Self {
            disjuncts: Vec::new(),
            conjuncts: Vec::new(),
            negated,
            negate_next: false,
            expect: Expect::Operand,
        }
    }

    fn close_conjunction(&mut self) {
        let conjuncts = std::mem::take(&mut self.conjuncts);
        if let Some(conjunction) = collapse(conjuncts, Predicate::And) {
            self.disjuncts.push(conjunction);
        }
    }

    fn finish(mut self) -> Option<Predicate> {
        self.close_conjunction();
        let predicate = collapse(self.disjuncts, Predicate::Or)?;

        Some(if self.negated {
            Predicate::not(predicate)
        } else {
            predicate
        })
    }
}

// Single-element groups collapse to their only member.
fn collapse(mut items: Vec<Predicate>, wrap: fn(Vec<Predicate>) -> Predicate) -> Option<Predicate> {
    match items.len() {
        0 => None,
        1 => items.pop(),
        _ => Some(wrap(items)),
    }
}

///
/// PredicateBuilder
///
/// Infix predicate builder. `and` binds tighter than `or`; `begin`/`end`
/// group; `not` negates the following comparison or block.
///
/// ```text
/// // (p1 = "foo" AND p2 = "bar") OR p3 = "cat"
/// PredicateBuilder::new()
///     .property("p1").equals("foo").and()
///     .property("p2").equals("bar").or()
///     .property("p3").equals("cat")
///     .build()?;
/// ```
///
/// Misuse is recorded and reported by `build`; the first error wins and
/// later calls are ignored.
///

#[derive(Debug)]
pub struct PredicateBuilder {
    blocks: Vec<Block>,
    error: Option<BuilderError>,
}

impl Default for PredicateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PredicateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::new(false)],
            error: None,
        }
    }

    /// Start a comparison on `property`.
    #[must_use]
    pub fn property(self, property: impl Into<PropertyId>) -> PropertyComparison {
        PropertyComparison {
            builder: self,
            property: property.into(),
        }
    }

    #[must_use]
    pub fn and(self) -> Self {
        self.operator(|_| {})
    }

    #[must_use]
    pub fn or(self) -> Self {
        self.operator(Block::close_conjunction)
    }

    #[must_use]
    pub fn not(mut self) -> Self {
        if let Some(block) = self.current(Expect::Operand) {
            block.negate_next = !block.negate_next;
        }
        self
    }

    /// Open a nested block.
    #[must_use]
    pub fn begin(mut self) -> Self {
        let negated = match self.current(Expect::Operand) {
            Some(block) => std::mem::take(&mut block.negate_next),
            None => return self,
        };
        self.blocks.push(Block::new(negated));
        self
    }

    /// Close the innermost block and use it as an operand.
    #[must_use]
    pub fn end(mut self) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.blocks.len() < 2 {
            return self.fail(BuilderError::UnmatchedEnd);
        }
        if self.current(Expect::Operator).is_none() {
            return self;
        }

        match self.blocks.pop().and_then(Block::finish) {
            Some(predicate) => self.operand(predicate),
            None => self.fail(BuilderError::ExpectedOperand),
        }
    }

    /// Finish building.
    pub fn build(mut self) -> Result<Predicate, BuilderError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.blocks.len() > 1 {
            return Err(BuilderError::UnclosedBlock(self.blocks.len() - 1));
        }

        let block = self.blocks.pop().ok_or(BuilderError::Empty)?;
        if block.negate_next {
            return Err(BuilderError::DanglingNot);
        }
        if block.expect == Expect::Operand {
            let empty = block.conjuncts.is_empty() && block.disjuncts.is_empty();
            return Err(if empty {
                BuilderError::Empty
            } else {
                BuilderError::ExpectedOperand
            });
        }

        block.finish().ok_or(BuilderError::Empty)
    }

    fn operand(mut self, predicate: Predicate) -> Self {
        if let Some(block) = self.current(Expect::Operand) {
            let predicate = if std::mem::take(&mut block.negate_next) {
                Predicate::not(predicate)
            } else {
                predicate
            };
            block.conjuncts.push(predicate);
            block.expect = Expect::Operator;
        }
        self
    }

    fn operator(mut self, apply: impl FnOnce(&mut Block)) -> Self {
        if let Some(block) = self.current(Expect::Operator) {
            apply(block);
            block.expect = Expect::Operand;
        }
        self
    }

    // Innermost block, if the builder is healthy and `token` is what the
    // block accepts next. On mismatch the error names what it wanted.
    fn current(&mut self, token: Expect) -> Option<&mut Block> {
        if self.error.is_some() {
            return None;
        }

        let wanted = self.blocks.last().map(|block| block.expect)?;
        if wanted != token {
            self.error = Some(match wanted {
                Expect::Operand => BuilderError::ExpectedOperand,
                Expect::Operator => BuilderError::ExpectedOperator,
            });
            return None;
        }

        self.blocks.last_mut()
    }

    fn fail(mut self, err: BuilderError) -> Self {
        self.error.get_or_insert(err);
        self
    }
}

///
/// PropertyComparison
///
/// Pending comparison returned by `PredicateBuilder::property`.
///

#[derive(Debug)]
pub struct PropertyComparison {
    builder: PredicateBuilder,
    property: PropertyId,
}

impl PropertyComparison {
    fn compare(self, op: CompareOp, value: impl Into<Value>) -> PredicateBuilder {
        let predicate = Predicate::compare(self.property, op, value);
        self.builder.operand(predicate)
    }

    #[must_use]
    pub fn equals(self, value: impl Into<Value>) -> PredicateBuilder {
        self.compare(CompareOp::Eq, value)
    }

    #[must_use]
    pub fn not_equals(self, value: impl Into<Value>) -> PredicateBuilder {
        self.compare(CompareOp::Ne, value)
    }

    #[must_use]
    pub fn greater_than(self, value: impl Into<Value>) -> PredicateBuilder {
        self.compare(CompareOp::Gt, value)
    }

    #[must_use]
    pub fn greater_than_equal_to(self, value: impl Into<Value>) -> PredicateBuilder {
        self.compare(CompareOp::Gte, value)
    }

    #[must_use]
    pub fn less_than(self, value: impl Into<Value>) -> PredicateBuilder {
        self.compare(CompareOp::Lt, value)
    }

    #[must_use]
    pub fn less_than_equal_to(self, value: impl Into<Value>) -> PredicateBuilder {
        self.compare(CompareOp::Lte, value)
    }

    #[must_use]
    pub fn contains(self, value: impl Into<Value>) -> PredicateBuilder {
        self.compare(CompareOp::Contains, value)
    }
}

///
/// TESTS
///
