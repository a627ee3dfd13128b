/// Broad category of a [`LimbAddError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

/// Errors returned by the addition entry points.
///
/// The arithmetic itself is total; only a call whose lengths or output capacity break the
/// documented preconditions is rejected, before anything is written. Variants carry plain
/// numbers so that building an error never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LimbAddError {
    #[error("Invalid argument: operand lengths differ ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("Invalid argument: greater operand is shorter than lesser ({greater} < {lesser})")]
    OperandOrder { greater: usize, lesser: usize },

    #[error("Invalid argument: output capacity {capacity} is below the required {required}")]
    OutputCapacity { capacity: usize, required: usize },

    #[error("Invalid argument: {name} has negative length {len}")]
    NegativeLength { name: &'static str, len: i64 },

    #[error("Invalid argument: {name} is a null pointer")]
    NullPointer { name: &'static str },
}

impl LimbAddError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LimbAddError::LengthMismatch { .. }
            | LimbAddError::OperandOrder { .. }
            | LimbAddError::OutputCapacity { .. }
            | LimbAddError::NegativeLength { .. }
            | LimbAddError::NullPointer { .. } => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_is_an_invalid_argument() {
        let errors = [
            LimbAddError::LengthMismatch { left: 2, right: 1 },
            LimbAddError::OperandOrder { greater: 1, lesser: 2 },
            LimbAddError::OutputCapacity { capacity: 2, required: 3 },
            LimbAddError::NegativeLength { name: "left", len: -1 },
            LimbAddError::NullPointer { name: "out" },
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(err.to_string().starts_with("Invalid argument: "));
        }
    }

    #[test]
    fn message_carries_lengths() {
        let err = LimbAddError::OutputCapacity { capacity: 2, required: 3 };
        assert_eq!(err.to_string(), "Invalid argument: output capacity 2 is below the required 3");
    }
}
