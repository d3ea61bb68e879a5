// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{BiExpression, BiOperator, Bindings, EvalError, Expression};

impl Expression {
    /// Computes the value of this expression. Operands are evaluated left
    /// to right and nothing is modified.
    pub fn evaluate(&self, bindings: &impl Bindings) -> Result<i64, EvalError> {
        match self {
            Self::Constant(value) => Ok(*value),

            Self::Variable(name) => bindings.lookup(name)
                .ok_or_else(|| EvalError::UnboundVariable { name: name.clone() }),

            Self::BiExpression(expression) => expression.evaluate(bindings),
        }
    }
}

impl BiExpression {
    pub fn evaluate(&self, bindings: &impl Bindings) -> Result<i64, EvalError> {
        let lhs = self.lhs.evaluate(bindings)?;
        let rhs = self.rhs.evaluate(bindings)?;
        self.operator.apply(lhs, rhs)
    }
}

impl BiOperator {
    /// Checked integer arithmetic. Division truncates toward zero.
    pub fn apply(&self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }

                lhs.checked_div(rhs)
            }
        };

        result.ok_or(EvalError::Overflow { lhs, operator: *self, rhs })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use rstest::rstest;

    fn constant(value: i64) -> Expression {
        Expression::Constant(value)
    }

    #[rstest]
    #[case(BiOperator::Add, 2, 3, 5)]
    #[case(BiOperator::Subtract, 2, 3, -1)]
    #[case(BiOperator::Multiply, -4, 3, -12)]
    #[case(BiOperator::Divide, 7, 2, 3)]
    #[case(BiOperator::Divide, -7, 2, -3)]
    #[case(BiOperator::Divide, 7, -2, -3)]
    fn arithmetic(#[case] operator: BiOperator, #[case] lhs: i64, #[case] rhs: i64, #[case] expected: i64) {
        assert_eq!(operator.apply(lhs, rhs), Ok(expected));
    }

    #[rstest]
    #[case(BiOperator::Add, i64::MAX, 1)]
    #[case(BiOperator::Subtract, i64::MIN, 1)]
    #[case(BiOperator::Multiply, i64::MAX, 2)]
    #[case(BiOperator::Divide, i64::MIN, -1)]
    fn overflow(#[case] operator: BiOperator, #[case] lhs: i64, #[case] rhs: i64) {
        assert_eq!(operator.apply(lhs, rhs), Err(EvalError::Overflow { lhs, operator, rhs }));
    }

    #[test]
    fn division_by_zero() {
        let expression = Expression::binary(BiOperator::Divide, constant(1), constant(0));
        assert_eq!(expression.evaluate(&HashMap::new()), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn unbound_variable() {
        let expression = Expression::binary(BiOperator::Add, Expression::variable("X"), constant(1));

        assert_eq!(
            expression.evaluate(&HashMap::new()),
            Err(EvalError::UnboundVariable { name: "X".into() })
        );
    }

    #[test]
    fn left_operand_fails_first() {
        let expression = Expression::binary(BiOperator::Add, Expression::variable("A"), Expression::variable("B"));

        assert_eq!(
            expression.evaluate(&HashMap::new()),
            Err(EvalError::UnboundVariable { name: "A".into() })
        );
    }

    #[test]
    fn variables_are_looked_up() {
        let bindings = HashMap::from([("X".to_string(), 6), ("Y".to_string(), 7)]);
        let expression = Expression::binary(BiOperator::Multiply, Expression::variable("X"), Expression::variable("Y"));

        assert_eq!(expression.evaluate(&bindings), Ok(42));
    }
}
