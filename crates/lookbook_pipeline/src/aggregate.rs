//! Outcome aggregation.

use crate::outcome::UnitOutcome;
use lookbook_core::GeneratedImage;
use lookbook_error::{GenerationError, GenerationErrorKind};

/// Aggregated result for one garment (or one single-garment request).
#[derive(Debug, Clone, Default)]
pub struct GarmentOutput {
    /// Successful images in unit expansion order.
    pub images: Vec<GeneratedImage>,
    /// One warning per failed unit.
    pub warnings: Vec<String>,
}

/// Collapse unit outcomes into images plus warnings.
///
/// Partial success is success: failed units surface as warnings alongside
/// the surviving images.
///
/// # Errors
///
/// Returns `GenerationFailed` when zero units succeeded.
pub fn aggregate(outcomes: Vec<UnitOutcome>) -> Result<GarmentOutput, GenerationError> {
    let mut output = GarmentOutput::default();
    for outcome in outcomes {
        match outcome {
            UnitOutcome::Succeeded(image) => output.images.push(image),
            UnitOutcome::Failed { reason, .. } => output.warnings.push(reason),
        }
    }
    if output.images.is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::GenerationFailed(
            "no images were generated; check provider configuration and availability".to_string(),
        )));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookbook_core::{GenerationSettings, GenerationUnit, ImageRef, Pose};

    fn success() -> UnitOutcome {
        UnitOutcome::Succeeded(GeneratedImage::new(
            ImageRef::Url("https://replicate.delivery/out.png".to_string()),
            Pose::Front,
            GenerationSettings::default(),
            "replicate-flux + idm-vton",
        ))
    }

    fn failure(reason: &str) -> UnitOutcome {
        UnitOutcome::Failed {
            unit: GenerationUnit {
                garment_index: 0,
                pose: Pose::Front,
                shot_index: 0,
                derived_seed: None,
            },
            reason: reason.to_string(),
        }
    }

    #[test]
    fn partial_success_yields_images_and_warnings() {
        let output = aggregate(vec![success(), failure("front timed out"), success()]).unwrap();
        assert_eq!(output.images.len(), 2);
        assert_eq!(output.warnings, vec!["front timed out".to_string()]);
    }

    #[test]
    fn zero_successes_is_an_error() {
        let err = aggregate(vec![failure("a"), failure("b")]).unwrap_err();
        assert!(matches!(err.kind, GenerationErrorKind::GenerationFailed(_)));
        assert!(!err.is_user_error());
    }
}
