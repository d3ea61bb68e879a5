// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{Console, EvalState, RunErrorKind, Statement};

impl Statement {
    /// Performs the effect of this statement. Jumps and `END` overwrite the
    /// current line register of `state`; every other statement leaves it
    /// alone.
    pub fn execute<C>(&self, state: &mut EvalState, console: &mut C) -> Result<(), RunErrorKind>
            where C: Console + ?Sized {
        match self {
            Self::Comment => (),

            Self::Assign(statement) => {
                let value = statement.expression.evaluate(state.variables())?;
                state.variables_mut().set(statement.name.clone(), value);
            }

            Self::Print(expression) => {
                let value = expression.evaluate(state.variables())?;
                console.print_value(value)?;
            }

            Self::Input(name) => {
                let Some(value) = console.read_integer(name)? else {
                    return Err(RunErrorKind::InputClosed { variable: name.clone() });
                };

                state.variables_mut().set(name.clone(), value);
            }

            Self::Goto(target) => {
                state.set_current_line(*target);
            }

            Self::If(statement) => {
                let lhs = statement.lhs.evaluate(state.variables())?;
                let rhs = statement.rhs.evaluate(state.variables())?;

                if statement.comparison.holds(lhs, rhs) {
                    state.set_current_line(statement.target);
                }
            }

            Self::Halt => state.halt(),
        }

        Ok(())
    }
}
