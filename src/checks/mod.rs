//! Quality checks run on translation units.
//!
//! Every check implements [`Check`]. The host enumerates checks through the
//! [`Checks`] enum, which dispatches to the concrete check without boxing.
//!
//! ## Module Structure
//!
//! - `same`: Target identical to source (not translated)

pub mod same;

use enum_dispatch::enum_dispatch;

use crate::cache::{CacheSlot, CheckCache};
use crate::unit::TranslationUnit;

pub use same::SameCheck;

/// Common interface of all checks that compare a source with its translation.
#[enum_dispatch]
pub trait Check {
    /// Stable identifier, also used in `ignore-<id>` unit flags.
    fn check_id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check one source/target pair. `true` means the pair is suspicious.
    fn check_single(
        &self,
        source: &str,
        target: &str,
        unit: &dyn TranslationUnit,
        cache_slot: &mut dyn CacheSlot,
    ) -> bool;

    /// Whether the unit opted out of this check with an `ignore-<id>` flag.
    fn is_ignored(&self, unit: &dyn TranslationUnit) -> bool {
        let flag = format!("ignore-{}", self.check_id());
        unit.flags().contains(&flag)
    }

    /// Check a unit with all of its plural forms.
    ///
    /// The first target is compared with the singular source (cache slot 0).
    /// Remaining targets are compared with the plural source (cache slot 1).
    /// The unit fires if any form fires.
    fn check(
        &self,
        sources: &[&str],
        targets: &[&str],
        unit: &dyn TranslationUnit,
        cache: &CheckCache,
        unit_id: &str,
    ) -> bool {
        if self.is_ignored(unit) {
            return false;
        }

        let (Some(singular), Some(first_target)) = (sources.first(), targets.first()) else {
            return false;
        };

        let mut slot = cache.entry(unit_id, self.check_id(), 0);
        if self.check_single(singular, first_target, unit, &mut slot) {
            return true;
        }

        let Some(plural) = sources.get(1) else {
            return false;
        };

        let mut slot = cache.entry(unit_id, self.check_id(), 1);
        targets[1..]
            .iter()
            .any(|target| self.check_single(plural, target, unit, &mut slot))
    }
}

/// All checks known to the crate.
#[enum_dispatch(Check)]
#[derive(Debug, Clone)]
pub enum Checks {
    Same(SameCheck),
}
