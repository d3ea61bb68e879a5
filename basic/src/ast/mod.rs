// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod expression;
mod statement;

pub use self::{
    expression::{
        BiExpression,
        BiOperator,
        Expression,
    },
    statement::{
        AssignStatement,
        Comparison,
        IfStatement,
        Statement,
    },
};
