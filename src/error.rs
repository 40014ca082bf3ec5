use thiserror::Error;

/// Errors raised while constructing an integer range.
///
/// Every variant is an invalid-argument condition reported synchronously at
/// construction time. A successfully constructed range cannot fail later:
/// iteration always terminates after exactly `count` steps.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// A zero step would never make progress toward `stop`.
    #[error("range step must not be zero")]
    ZeroStep,

    /// The step is the minimum value of a signed type; its magnitude is not
    /// representable, so descending count derivation would overflow.
    #[error("range step is the minimum value of its type and cannot be negated")]
    StepNegationOverflow,

    /// The distance between `start` and `stop` does not fit in the element
    /// type, so no exact element count exists.
    #[error("distance between start and stop does not fit in the element type")]
    SpanOverflow,

    /// A step supplied in a different integer type did not convert losslessly
    /// into the element type.
    #[error("step value is not representable in the element type")]
    StepNotRepresentable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_problem() {
        assert!(RangeError::ZeroStep.to_string().contains("zero"));
        assert!(RangeError::StepNegationOverflow.to_string().contains("negated"));
        assert!(RangeError::SpanOverflow.to_string().contains("element type"));
        assert!(RangeError::StepNotRepresentable
            .to_string()
            .contains("not representable"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<RangeError>();
        assert_sync::<RangeError>();
    }
}
