// =============================================================================
// Parameter-Shift Hessian - Weight Input Parsing
// =============================================================================

use crate::error::InvalidInputError;
use crate::gradient_hessian::NUMBER_OF_WEIGHTS;

/// Parses comma-separated decimal weights. Whitespace around each value,
/// including a trailing newline, is ignored.
pub fn parse_weights(text: &str) -> Result<Vec<f64>, InvalidInputError> {
    let weights = text
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            let value: f64 = token
                .parse()
                .map_err(|_| InvalidInputError::MalformedWeight {
                    position,
                    token: token.to_string(),
                })?;
            if !value.is_finite() {
                return Err(InvalidInputError::NonFiniteWeight { position, value });
            }
            Ok(value)
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if weights.len() != NUMBER_OF_WEIGHTS {
        return Err(InvalidInputError::WrongWeightCount {
            expected: NUMBER_OF_WEIGHTS,
            actual: weights.len(),
        });
    }

    Ok(weights)
}
