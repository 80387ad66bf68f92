//! Symbolic expression graphs.
//!
//! [`Expr`] is a reference-counted expression tree. Building arithmetic on it
//! records operations instead of computing them, so a torque curve evaluated
//! with `Expr` inputs yields a graph that can later be evaluated numerically
//! or differentiated with respect to any named variable.
//!
//! Comparisons return boolean-valued nodes (`1.0` or `0.0` when evaluated) and
//! [`TorqueScalar::select`] produces an `if_else` node. Constant sub-graphs
//! are folded as they are built.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use torquelimits_errors::ScalarError;

use crate::traits::TorqueScalar;

/// A node in a symbolic expression graph.
///
/// Cloning is cheap: sub-graphs are shared, never copied.
#[derive(Clone, PartialEq)]
pub struct Expr {
    node: Rc<Node>,
}

#[derive(Debug, PartialEq)]
enum Node {
    Constant(f64),
    Variable(String),
    Neg(Expr),
    Add(Expr, Expr),
    Sub(Expr, Expr),
    Mul(Expr, Expr),
    Div(Expr, Expr),
    Exp(Expr),
    Less(Expr, Expr),
    GreaterEqual(Expr, Expr),
    IfElse {
        condition: Expr,
        if_true: Expr,
        if_false: Expr,
    },
}

/// Numeric values bound to the variables of an expression.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<String, f64>,
}

impl Bindings {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Builder form of [`bind`](Self::bind).
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.bind(name, value);
        self
    }

    /// Look up the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

impl Expr {
    fn from_node(node: Node) -> Self {
        Self {
            node: Rc::new(node),
        }
    }

    /// A constant leaf.
    pub fn constant(value: f64) -> Self {
        Self::from_node(Node::Constant(value))
    }

    /// A named variable leaf.
    pub fn var(name: impl Into<String>) -> Self {
        Self::from_node(Node::Variable(name.into()))
    }

    /// The constant value of this node, if it is a constant leaf.
    pub fn as_constant(&self) -> Option<f64> {
        match *self.node {
            Node::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// True if this node is a constant leaf.
    pub fn is_constant(&self) -> bool {
        self.as_constant().is_some()
    }

    /// Bitwise match, so `-0.0` is not taken for `0.0`.
    fn is_exactly(&self, value: f64) -> bool {
        self.as_constant().is_some_and(|c| c.to_bits() == value.to_bits())
    }

    /// Natural exponential node.
    pub fn exp(self) -> Self {
        match self.as_constant() {
            Some(c) => Self::constant(c.exp()),
            None => Self::from_node(Node::Exp(self)),
        }
    }

    /// Boolean-valued `self < other` node.
    pub fn lt(&self, other: &Self) -> Self {
        match (self.as_constant(), other.as_constant()) {
            (Some(a), Some(b)) => Self::constant(bool_to_f64(a < b)),
            _ => Self::from_node(Node::Less(self.clone(), other.clone())),
        }
    }

    /// Boolean-valued `self >= other` node.
    pub fn ge(&self, other: &Self) -> Self {
        match (self.as_constant(), other.as_constant()) {
            (Some(a), Some(b)) => Self::constant(bool_to_f64(a >= b)),
            _ => Self::from_node(Node::GreaterEqual(self.clone(), other.clone())),
        }
    }

    /// Conditional node: `if_true` where `condition` is non-zero, else `if_false`.
    pub fn if_else(condition: Self, if_true: Self, if_false: Self) -> Self {
        if let Some(c) = condition.as_constant() {
            return if c != 0.0 { if_true } else { if_false };
        }
        if if_true == if_false {
            return if_true;
        }
        Self::from_node(Node::IfElse {
            condition,
            if_true,
            if_false,
        })
    }

    /// Names of every variable reachable from this node.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match &*self.node {
            Node::Constant(_) => {}
            Node::Variable(name) => {
                names.insert(name.clone());
            }
            Node::Neg(a) | Node::Exp(a) => a.collect_variables(names),
            Node::Add(a, b)
            | Node::Sub(a, b)
            | Node::Mul(a, b)
            | Node::Div(a, b)
            | Node::Less(a, b)
            | Node::GreaterEqual(a, b) => {
                a.collect_variables(names);
                b.collect_variables(names);
            }
            Node::IfElse {
                condition,
                if_true,
                if_false,
            } => {
                condition.collect_variables(names);
                if_true.collect_variables(names);
                if_false.collect_variables(names);
            }
        }
    }

    /// Evaluate the graph numerically.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::UnboundVariable`] if a variable on the taken
    /// path has no value in `bindings`. Only the selected branch of an
    /// `if_else` node is evaluated.
    pub fn evaluate(&self, bindings: &Bindings) -> Result<f64, ScalarError> {
        Ok(match &*self.node {
            Node::Constant(value) => *value,
            Node::Variable(name) => bindings
                .get(name)
                .ok_or_else(|| ScalarError::UnboundVariable(name.clone()))?,
            Node::Neg(a) => -a.evaluate(bindings)?,
            Node::Add(a, b) => a.evaluate(bindings)? + b.evaluate(bindings)?,
            Node::Sub(a, b) => a.evaluate(bindings)? - b.evaluate(bindings)?,
            Node::Mul(a, b) => a.evaluate(bindings)? * b.evaluate(bindings)?,
            Node::Div(a, b) => a.evaluate(bindings)? / b.evaluate(bindings)?,
            Node::Exp(a) => a.evaluate(bindings)?.exp(),
            Node::Less(a, b) => bool_to_f64(a.evaluate(bindings)? < b.evaluate(bindings)?),
            Node::GreaterEqual(a, b) => {
                bool_to_f64(a.evaluate(bindings)? >= b.evaluate(bindings)?)
            }
            Node::IfElse {
                condition,
                if_true,
                if_false,
            } => {
                if condition.evaluate(bindings)? != 0.0 {
                    if_true.evaluate(bindings)?
                } else {
                    if_false.evaluate(bindings)?
                }
            }
        })
    }

    /// Symbolic partial derivative with respect to the variable `name`.
    ///
    /// Comparisons are piecewise constant and differentiate to zero; an
    /// `if_else` node differentiates each branch under the same condition.
    pub fn derivative(&self, name: &str) -> Self {
        match &*self.node {
            Node::Constant(_) => Self::constant(0.0),
            Node::Variable(v) => Self::constant(if v == name { 1.0 } else { 0.0 }),
            Node::Neg(a) => -a.derivative(name),
            Node::Add(a, b) => a.derivative(name) + b.derivative(name),
            Node::Sub(a, b) => a.derivative(name) - b.derivative(name),
            Node::Mul(a, b) => {
                a.derivative(name) * b.clone() + a.clone() * b.derivative(name)
            }
            Node::Div(a, b) => {
                (a.derivative(name) * b.clone() - a.clone() * b.derivative(name))
                    / (b.clone() * b.clone())
            }
            Node::Exp(a) => self.clone() * a.derivative(name),
            Node::Less(..) | Node::GreaterEqual(..) => Self::constant(0.0),
            Node::IfElse {
                condition,
                if_true,
                if_false,
            } => Self::if_else(
                condition.clone(),
                if_true.derivative(name),
                if_false.derivative(name),
            ),
        }
    }

    /// Number of distinct node visits in the graph, shared nodes counted per use.
    pub fn size(&self) -> usize {
        1 + match &*self.node {
            Node::Constant(_) | Node::Variable(_) => 0,
            Node::Neg(a) | Node::Exp(a) => a.size(),
            Node::Add(a, b)
            | Node::Sub(a, b)
            | Node::Mul(a, b)
            | Node::Div(a, b)
            | Node::Less(a, b)
            | Node::GreaterEqual(a, b) => a.size() + b.size(),
            Node::IfElse {
                condition,
                if_true,
                if_false,
            } => condition.size() + if_true.size() + if_false.size(),
        }
    }
}

fn bool_to_f64(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        match self.as_constant() {
            Some(c) => Expr::constant(-c),
            None => Expr::from_node(Node::Neg(self)),
        }
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        match (self.as_constant(), rhs.as_constant()) {
            (Some(a), Some(b)) => Expr::constant(a + b),
            _ if self.is_exactly(0.0) => rhs,
            _ if rhs.is_exactly(0.0) => self,
            _ => Expr::from_node(Node::Add(self, rhs)),
        }
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        match (self.as_constant(), rhs.as_constant()) {
            (Some(a), Some(b)) => Expr::constant(a - b),
            _ if rhs.is_exactly(0.0) => self,
            _ if self.is_exactly(0.0) => -rhs,
            _ => Expr::from_node(Node::Sub(self, rhs)),
        }
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        match (self.as_constant(), rhs.as_constant()) {
            (Some(a), Some(b)) => Expr::constant(a * b),
            _ if self.is_exactly(0.0) || rhs.is_exactly(0.0) => Expr::constant(0.0),
            _ if self.is_exactly(1.0) => rhs,
            _ if rhs.is_exactly(1.0) => self,
            _ => Expr::from_node(Node::Mul(self, rhs)),
        }
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        match (self.as_constant(), rhs.as_constant()) {
            (Some(a), Some(b)) => Expr::constant(a / b),
            _ if rhs.is_exactly(1.0) => self,
            _ => Expr::from_node(Node::Div(self, rhs)),
        }
    }
}

impl TorqueScalar for Expr {
    type Condition = Expr;

    fn from_f64(value: f64) -> Self {
        Expr::constant(value)
    }

    fn exp(self) -> Self {
        Expr::exp(self)
    }

    fn less_than(&self, other: &Self) -> Expr {
        self.lt(other)
    }

    fn greater_or_equal(&self, other: &Self) -> Expr {
        self.ge(other)
    }

    fn select(condition: Expr, if_true: Self, if_false: Self) -> Self {
        Expr::if_else(condition, if_true, if_false)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.node {
            Node::Constant(value) => write!(f, "{value}"),
            Node::Variable(name) => f.write_str(name),
            Node::Neg(a) => write!(f, "(-{a})"),
            Node::Add(a, b) => write!(f, "({a} + {b})"),
            Node::Sub(a, b) => write!(f, "({a} - {b})"),
            Node::Mul(a, b) => write!(f, "({a} * {b})"),
            Node::Div(a, b) => write!(f, "({a} / {b})"),
            Node::Exp(a) => write!(f, "exp({a})"),
            Node::Less(a, b) => write!(f, "({a} < {b})"),
            Node::GreaterEqual(a, b) => write!(f, "({a} >= {b})"),
            Node::IfElse {
                condition,
                if_true,
                if_false,
            } => write!(f, "if_else({condition}, {if_true}, {if_false})"),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_constant_folding() {
        let folded = Expr::constant(2.0) * Expr::constant(3.0) + Expr::constant(1.0);
        assert_eq!(folded.as_constant(), Some(7.0));
        assert_eq!(folded.size(), 1);
    }

    #[test]
    fn test_identity_folding() {
        let x = Expr::var("x");
        assert_eq!(x.clone() * Expr::constant(1.0), x);
        assert_eq!(x.clone() + Expr::constant(0.0), x);
        assert!((x.clone() * Expr::constant(0.0)).is_exactly(0.0));
        assert_eq!(x.clone() / Expr::constant(1.0), x);
    }

    #[test]
    fn test_only_exact_identities_fold() {
        let x = Expr::var("x");
        let near_one = x.clone() * Expr::constant(1.0 + f64::EPSILON);
        assert_ne!(near_one, x);
        assert_eq!(near_one.variables().len(), 1);

        let negative_zero = x.clone() * Expr::constant(-0.0);
        assert!(!negative_zero.is_constant());
        let value = must(negative_zero.evaluate(&Bindings::new().with("x", 2.0)));
        assert_eq!(value.to_bits(), (-0.0_f64).to_bits());
    }

    #[test]
    fn test_evaluate_with_bindings() {
        let x = Expr::var("x");
        let y = Expr::var("y");
        let expr = (x.clone() * y.clone() - Expr::constant(1.0)) / y;
        let bindings = Bindings::new().with("x", 3.0).with("y", 2.0);
        let value = must(expr.evaluate(&bindings));
        assert!((value - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_unbound_variable_is_reported() {
        let expr = Expr::var("q") + Expr::constant(1.0);
        match expr.evaluate(&Bindings::new()) {
            Err(ScalarError::UnboundVariable(name)) => assert_eq!(name, "q"),
            other => panic!("expected unbound variable, got {:?}", other),
        }
    }

    #[test]
    fn test_if_else_only_evaluates_taken_branch() {
        let a = Expr::var("a");
        let expr =
            Expr::if_else(a.ge(&Expr::constant(0.0)), Expr::constant(1.0), Expr::var("never"));
        let value = must(expr.evaluate(&Bindings::new().with("a", 0.5)));
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_if_else_folds_constant_condition() {
        let expr = Expr::if_else(Expr::constant(0.0), Expr::var("a"), Expr::var("b"));
        assert_eq!(expr, Expr::var("b"));
        let same = Expr::if_else(Expr::var("c"), Expr::var("a"), Expr::var("a"));
        assert_eq!(same, Expr::var("a"));
    }

    #[test]
    fn test_derivative_of_product_and_exp() {
        let x = Expr::var("x");
        let expr = x.clone() * x.clone().exp();
        let d = expr.derivative("x");
        let at = 0.7_f64;
        let value = must(d.evaluate(&Bindings::new().with("x", at)));
        let expected = at.exp() + at * at.exp();
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_derivative_of_quotient() {
        let x = Expr::var("x");
        let expr = Expr::constant(1.0) / (Expr::constant(2.0) + x);
        let d = expr.derivative("x");
        let value = must(d.evaluate(&Bindings::new().with("x", 1.0)));
        assert!((value + 1.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_derivative_through_if_else() {
        let x = Expr::var("x");
        let abs = Expr::if_else(x.lt(&Expr::constant(0.0)), -x.clone(), x);
        let d = abs.derivative("x");
        let left = must(d.evaluate(&Bindings::new().with("x", -2.0)));
        let right = must(d.evaluate(&Bindings::new().with("x", 2.0)));
        assert!((left + 1.0).abs() < 1e-12);
        assert!((right - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_derivative_wrt_other_variable_is_zero() {
        let expr = Expr::var("x").exp();
        assert_eq!(expr.derivative("y").as_constant(), Some(0.0));
    }

    #[test]
    fn test_variables_are_collected() {
        let expr = Expr::if_else(
            Expr::var("a").lt(&Expr::constant(0.0)),
            Expr::var("b"),
            Expr::var("c").exp(),
        );
        let names: Vec<String> = expr.variables().into_iter().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_display() {
        let expr = Expr::if_else(
            Expr::var("a").ge(&Expr::constant(0.0)),
            Expr::var("b"),
            -Expr::var("b"),
        );
        assert_eq!(expr.to_string(), "if_else((a >= 0), b, (-b))");
    }
}
