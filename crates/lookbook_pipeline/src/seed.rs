//! Deterministic per-unit seed derivation.

/// Maximum garments accepted per batch request.
pub const MAX_BATCH_GARMENTS: usize = 10;

/// Maximum shots per pose accepted per request.
///
/// Keeping shot indices under [`GARMENT_SEED_STRIDE`] guarantees derived
/// seeds never collide across garments.
pub const MAX_SHOTS_PER_POSE: u32 = 99;

/// Seed offset between consecutive garments.
pub const GARMENT_SEED_STRIDE: u64 = 100;

/// Largest per-unit offset the expander's caps allow.
///
/// Base seeds above `u64::MAX - MAX_SEED_SPAN` cannot derive every in-cap
/// unit without overflowing and are rejected up front.
pub const MAX_SEED_SPAN: u64 = MAX_BATCH_GARMENTS as u64 * GARMENT_SEED_STRIDE - 1;

/// Derives per-unit seeds from an optional base seed.
///
/// `derived = base + garment_index * 100 + shot_index`. Distinct
/// (garment, shot) pairs never collide while the expander's caps hold; the
/// same shot index across two poses reuses the seed, which is harmless
/// since the pose changes the prompt. Without a base seed every unit stays
/// unseeded and providers supply their own entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedAllocator {
    base: Option<u64>,
}

impl SeedAllocator {
    /// Create an allocator over an optional base seed.
    pub fn new(base: Option<u64>) -> Self {
        Self { base }
    }

    /// Seed for the given garment and shot index, or `None` when no base
    /// seed was supplied or the derivation would overflow.
    pub fn derive(&self, garment_index: usize, shot_index: u32) -> Option<u64> {
        let offset = garment_index as u64 * GARMENT_SEED_STRIDE + u64::from(shot_index);
        self.base.and_then(|base| base.checked_add(offset))
    }

    /// Whether the base seed is too large to derive every in-cap offset
    /// without overflow.
    pub fn exceeds_seed_range(&self) -> bool {
        self.base.is_some_and(|base| base > u64::MAX - MAX_SEED_SPAN)
    }
}
