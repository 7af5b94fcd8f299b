//! Request expansion into generation units.

use crate::seed::{MAX_BATCH_GARMENTS, MAX_SEED_SPAN, MAX_SHOTS_PER_POSE, SeedAllocator};
use lookbook_core::{GenerationUnit, Pose};
use lookbook_error::{GenerationError, GenerationErrorKind};

/// Expand a request's shape into the flat unit list the executor walks.
///
/// Units come out garment-major, pose-major, shot-minor: all units of
/// garment 0 before any unit of garment 1, and within a garment all shots
/// of one pose before the next pose. Seeds derive from that same order.
///
/// # Errors
///
/// Fails fast, before any provider call, when poses are empty, shot or
/// garment counts are zero, `shots_per_pose` exceeds [`MAX_SHOTS_PER_POSE`],
/// the base seed sits within [`MAX_SEED_SPAN`] of `u64::MAX`, or the
/// garment count exceeds [`MAX_BATCH_GARMENTS`].
pub fn expand_units(
    poses: &[Pose],
    shots_per_pose: u32,
    garment_count: usize,
    seeds: &SeedAllocator,
) -> Result<Vec<GenerationUnit>, GenerationError> {
    if poses.is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::Validation(
            "at least one pose is required".to_string(),
        )));
    }
    if shots_per_pose == 0 {
        return Err(GenerationError::new(GenerationErrorKind::Validation(
            "shots_per_pose must be at least 1".to_string(),
        )));
    }
    if shots_per_pose > MAX_SHOTS_PER_POSE {
        return Err(GenerationError::new(GenerationErrorKind::Validation(
            format!("shots_per_pose must be at most {MAX_SHOTS_PER_POSE}"),
        )));
    }
    if seeds.exceeds_seed_range() {
        return Err(GenerationError::new(GenerationErrorKind::Validation(
            format!("base seed must be at most {}", u64::MAX - MAX_SEED_SPAN),
        )));
    }
    if garment_count == 0 {
        return Err(GenerationError::new(GenerationErrorKind::Validation(
            "at least one garment image is required".to_string(),
        )));
    }
    if garment_count > MAX_BATCH_GARMENTS {
        return Err(GenerationError::new(GenerationErrorKind::BatchTooLarge {
            count: garment_count,
            max: MAX_BATCH_GARMENTS,
        }));
    }

    let mut units = Vec::with_capacity(garment_count * poses.len() * shots_per_pose as usize);
    for garment_index in 0..garment_count {
        for pose in poses {
            for shot_index in 0..shots_per_pose {
                units.push(GenerationUnit {
                    garment_index,
                    pose: *pose,
                    shot_index,
                    derived_seed: seeds.derive(garment_index, shot_index),
                });
            }
        }
    }
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_in_garment_pose_shot_order() {
        let seeds = SeedAllocator::new(Some(42));
        let units = expand_units(&[Pose::Front, Pose::Side], 2, 2, &seeds).unwrap();

        assert_eq!(units.len(), 8);
        // Garment 0: front/0, front/1, side/0, side/1.
        assert_eq!(units[0].pose, Pose::Front);
        assert_eq!(units[0].shot_index, 0);
        assert_eq!(units[0].derived_seed, Some(42));
        assert_eq!(units[1].derived_seed, Some(43));
        assert_eq!(units[2].pose, Pose::Side);
        // Seeds are keyed on (garment, shot); the pose varies the prompt.
        assert_eq!(units[2].derived_seed, Some(42));
        assert_eq!(units[3].derived_seed, Some(43));
        // Garment 1 starts at base + stride.
        assert_eq!(units[4].garment_index, 1);
        assert_eq!(units[4].pose, Pose::Front);
        assert_eq!(units[4].derived_seed, Some(142));
        assert_eq!(units[7].derived_seed, Some(143));
    }

    #[test]
    fn unit_count_is_poses_times_shots_times_garments() {
        let seeds = SeedAllocator::new(None);
        let units = expand_units(&[Pose::Front, Pose::Back, Pose::Detail], 3, 4, &seeds).unwrap();
        assert_eq!(units.len(), 3 * 3 * 4);
        assert!(units.iter().all(|u| u.derived_seed.is_none()));
    }

    #[test]
    fn rejects_empty_poses() {
        let seeds = SeedAllocator::new(None);
        let err = expand_units(&[], 1, 1, &seeds).unwrap_err();
        assert!(matches!(err.kind, GenerationErrorKind::Validation(_)));
    }

    #[test]
    fn rejects_zero_shots() {
        let seeds = SeedAllocator::new(None);
        let err = expand_units(&[Pose::Front], 0, 1, &seeds).unwrap_err();
        assert!(matches!(err.kind, GenerationErrorKind::Validation(_)));
    }

    #[test]
    fn rejects_shot_counts_that_would_collide_across_garments() {
        let seeds = SeedAllocator::new(Some(7));
        let err = expand_units(&[Pose::Front], 100, 2, &seeds).unwrap_err();
        assert!(matches!(err.kind, GenerationErrorKind::Validation(_)));
    }

    #[test]
    fn rejects_base_seeds_that_would_overflow() {
        let seeds = SeedAllocator::new(Some(u64::MAX - 50));
        let err = expand_units(&[Pose::Front], 1, 2, &seeds).unwrap_err();
        assert!(matches!(err.kind, GenerationErrorKind::Validation(_)));

        // The largest in-range base still expands.
        let seeds = SeedAllocator::new(Some(u64::MAX - MAX_SEED_SPAN));
        let units = expand_units(&[Pose::Front], 1, 10, &seeds).unwrap();
        assert!(units.iter().all(|u| u.derived_seed.is_some()));
    }

    #[test]
    fn rejects_oversized_batches() {
        let seeds = SeedAllocator::new(None);
        let err = expand_units(&[Pose::Front], 1, 11, &seeds).unwrap_err();
        assert!(matches!(
            err.kind,
            GenerationErrorKind::BatchTooLarge { count: 11, max: 10 }
        ));
    }
}
