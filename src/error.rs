use thiserror::Error;

use crate::formula::Operator;

/// Failure of a lowering pass.
///
/// Well-formed input never produces an error through the top-level reducers. The only
/// way to get one is to feed a lowering pass a tree containing an operator outside the
/// vocabulary that pass accepts, i.e. skipping the stage that should have removed it.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RewriteError {
    #[error("unrecognized operator `{operator}` in pass `{pass}`")]
    UnrecognizedOperator { operator: Operator, pass: &'static str },
}

impl RewriteError {
    pub(crate) fn unrecognized(operator: impl Into<Operator>, pass: &'static str) -> Self {
        RewriteError::UnrecognizedOperator {
            operator: operator.into(),
            pass,
        }
    }
}

pub type Result<T, E = RewriteError> = std::result::Result<T, E>;
