use super::scenes::{self, MaskScene};
use super::{curves, mask, shapes, TargetConfiguration, TargetKind};
use crate::raster::Rasterizer;
use crate::state::Pattern;
use fnv::FnvHashMap;
use rand::prelude::*;

/// Session-wide target tables.
///
/// Curve and raster tables are built once in [`TargetLibrary::new`] and
/// never touched again; the procedural pattern table is rebuilt whenever the
/// selected pattern changes.
pub struct TargetLibrary {
    count: usize,
    pattern: Pattern,
    pattern_target: TargetConfiguration,
    pattern_rng: StdRng,
    fixed: FnvHashMap<TargetKind, TargetConfiguration>,
}

fn table_rng(seed: u64, slot: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ slot.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

impl TargetLibrary {
    pub fn new(count: usize, seed: u64, rasterizer: &mut dyn Rasterizer) -> Self {
        let mut fixed = FnvHashMap::default();
        for (slot, kind) in TargetKind::FIXED.into_iter().enumerate() {
            let mut rng = table_rng(seed, slot as u64 + 1);
            let table = match kind {
                TargetKind::HollowHeart => curves::hollow_heart(count, &mut rng),
                TargetKind::LayeredHeart => curves::layered_heart(count, &mut rng),
                TargetKind::Saturn => curves::saturn(count, &mut rng),
                TargetKind::LoveText => sample_scene(rasterizer, scenes::love_text(), count, &mut rng),
                TargetKind::BirthdayText => {
                    sample_scene(rasterizer, scenes::birthday_text(), count, &mut rng)
                }
                TargetKind::Characters => {
                    sample_scene(rasterizer, scenes::characters(), count, &mut rng)
                }
                TargetKind::Pattern => continue,
            };
            log::debug!("[targets] built {kind:?} ({} points)", table.len());
            fixed.insert(kind, table);
        }

        let mut pattern_rng = table_rng(seed, 0);
        let pattern = Pattern::default();
        let pattern_target = shapes::pattern_target(pattern, count, &mut pattern_rng);
        Self {
            count,
            pattern,
            pattern_target,
            pattern_rng,
            fixed,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Returns `true` when the pattern changed and its table was rebuilt.
    pub fn set_pattern(&mut self, pattern: Pattern) -> bool {
        if pattern == self.pattern {
            return false;
        }
        self.pattern = pattern;
        self.pattern_target = shapes::pattern_target(pattern, self.count, &mut self.pattern_rng);
        log::debug!("[targets] rebuilt pattern table for {pattern}");
        true
    }

    pub fn get(&self, kind: TargetKind) -> Option<&TargetConfiguration> {
        match kind {
            TargetKind::Pattern => Some(&self.pattern_target),
            other => self.fixed.get(&other),
        }
    }

    /// Like [`TargetLibrary::get`], falling back to the pattern table.
    pub fn resolve(&self, kind: TargetKind) -> &TargetConfiguration {
        self.get(kind).unwrap_or(&self.pattern_target)
    }
}

fn sample_scene(
    rasterizer: &mut dyn Rasterizer,
    mask_scene: MaskScene,
    count: usize,
    rng: &mut StdRng,
) -> TargetConfiguration {
    mask::rasterized_target(
        rasterizer,
        &mask_scene.scene,
        mask_scene.point_scale,
        count,
        rng,
    )
}
