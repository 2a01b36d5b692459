//! Module: predicate::simplify
//! Responsibility: rewrite a predicate into OR-free, equality-only
//! conjunctions a backend can answer directly.
//! Does not own: request construction or post-filtering.
//! Boundary: output may overmatch the input, never undermatch it.

use crate::{
    config::QueryConfig,
    obs::sink::{self, MetricsEvent},
    predicate::{CompareOp, ComparePredicate, Predicate, SupportedProperties},
};
use tracing::debug;

///
/// Simplifier
///
/// Pushes equality on supported properties down to the backend and widens
/// everything else to `Predicate::True`. AND nodes over OR-shaped children
/// are distributed so ORs only ever appear at the root, where callers split
/// them into one backend request per branch.
///
/// The simplifier holds no per-walk state; one instance may simplify any
/// number of trees.
///

pub struct Simplifier<'a, S: SupportedProperties + ?Sized> {
    supported: &'a S,
    config: QueryConfig,
}

impl<'a, S: SupportedProperties + ?Sized> Simplifier<'a, S> {
    #[must_use]
    pub fn new(supported: &'a S) -> Self {
        Self {
            supported,
            config: QueryConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    /// Simplify a predicate into a list of OR-free predicates.
    ///
    /// The list is a logical OR: the union of each entry's matches covers
    /// every resource `root` matches.
    #[must_use]
    pub fn simplify(&self, root: &Predicate) -> Vec<Predicate> {
        self.run(Some(root))
    }

    /// Like [`Self::simplify`], but an absent root yields an empty list.
    #[must_use]
    pub fn run(&self, root: Option<&Predicate>) -> Vec<Predicate> {
        let Some(root) = root else {
            return Vec::new();
        };

        let simplified = match self.simplify_node(root) {
            Predicate::Or(branches) => branches,
            other => vec![other],
        };

        sink::record(MetricsEvent::Simplify {
            branches: u64::try_from(simplified.len()).unwrap_or(u64::MAX),
        });
        debug!(
            predicate = %root,
            branches = simplified.len(),
            "simplified predicate"
        );

        simplified
    }

    fn simplify_node(&self, predicate: &Predicate) -> Predicate {
        match predicate {
            Predicate::Compare(cmp) => self.simplify_compare(cmp),
            Predicate::And(children) => self.simplify_and(children),
            Predicate::Or(children) => self.simplify_or(children),

            // opaque to pushdown; the post-filter evaluates them exactly
            Predicate::Not(_) | Predicate::True | Predicate::False => predicate.clone(),
        }
    }

    fn simplify_compare(&self, cmp: &ComparePredicate) -> Predicate {
        if cmp.op == CompareOp::Eq && self.supported.supports(&cmp.property) {
            Predicate::Compare(cmp.clone())
        } else {
            Predicate::True
        }
    }

    ///
    /// Simplify an AND node.
    ///
    /// Rules:
    /// - AND()                    → TRUE
    /// - AND(OR(..))              → OR(..)
    /// - AND(x, y, ..) no OR      → AND(x', y', ..)
    /// - AND(.., OR(..), ..)      → OR(distribute(c_i, c_j) for every i < j)
    ///
    fn simplify_and(&self, children: &[Predicate]) -> Predicate {
        if children.is_empty() {
            return Predicate::True;
        }

        let mut simplified: Vec<Predicate> =
            children.iter().map(|child| self.simplify_node(child)).collect();

        if !simplified.iter().any(Predicate::is_or) {
            return Predicate::And(simplified);
        }

        // pairwise distribution would drop a lone child
        if simplified.len() == 1 {
            return simplified.swap_remove(0);
        }

        let mut out = Vec::new();
        for (i, left) in simplified.iter().enumerate() {
            for right in &simplified[i + 1..] {
                if !self.distribute(left, right, &mut out) {
                    return self.exceeded_budget(out.len());
                }
            }
        }

        Predicate::Or(out)
    }

    ///
    /// Simplify an OR node.
    ///
    /// Children that simplify to OR are flattened into this node so the
    /// result holds no OR below its own level.
    ///
    fn simplify_or(&self, children: &[Predicate]) -> Predicate {
        let mut out = Vec::with_capacity(children.len());

        for child in children {
            match self.simplify_node(child) {
                Predicate::Or(branches) => out.extend(branches),
                other => out.push(other),
            }
        }

        Predicate::Or(out)
    }

    ///
    /// Distribute AND over OR for one pair of simplified operands.
    ///
    /// An OR on the left expands first, then an OR on the right, so the
    /// cross product is emitted left branch outer, right branch inner.
    /// Operand order is preserved in every emitted conjunction.
    ///
    /// Returns `false` as soon as `out` grows past `max_branches`; the
    /// partial output is then discarded by the caller.
    ///
    fn distribute(&self, left: &Predicate, right: &Predicate, out: &mut Vec<Predicate>) -> bool {
        if let Predicate::Or(branches) = left {
            branches
                .iter()
                .all(|branch| self.distribute(branch, right, out))
        } else if let Predicate::Or(branches) = right {
            branches
                .iter()
                .all(|branch| self.distribute(left, branch, out))
        } else {
            out.push(self.combine(left, right));
            out.len() <= self.config.max_branches
        }
    }

    // AND of two OR-free operands; identical operands collapse to one.
    fn combine(&self, left: &Predicate, right: &Predicate) -> Predicate {
        if self.config.fold_always_true {
            if *left == Predicate::True {
                return right.clone();
            }
            if *right == Predicate::True {
                return left.clone();
            }
        }

        if left == right {
            left.clone()
        } else {
            Predicate::And(vec![left.clone(), right.clone()])
        }
    }

    fn exceeded_budget(&self, branches: usize) -> Predicate {
        let limit = self.config.max_branches;

        sink::record(MetricsEvent::BranchBudgetExceeded {
            branches: u64::try_from(branches).unwrap_or(u64::MAX),
            limit: u64::try_from(limit).unwrap_or(u64::MAX),
        });
        debug!(branches, limit, "branch budget exceeded; widening AND to TRUE");

        Predicate::True
    }
}

/// Simplify `root` against `supported` with the default configuration.
#[must_use]
pub fn simplify<S: SupportedProperties + ?Sized>(root: &Predicate, supported: &S) -> Vec<Predicate> {
    Simplifier::new(supported).simplify(root)
}

///
/// TESTS
///
