//! The random source consumed by the generation passes.

/// Source of uniform integers for layout generation.
///
/// The passes only need uniform integers in a closed range; percentage
/// rolls and uniform picks are derived from that single primitive so
/// that a scripted source controls every decision the generator makes.
///
/// The trait is object safe: passes receive `&mut dyn RandomSource`.
///
/// # Examples
///
/// ```
/// use plat_core::RandomSource;
///
/// // Always answers with the low end of the requested range.
/// struct Low;
/// impl RandomSource for Low {
///     fn range_inclusive(&mut self, low: u32, _high: u32) -> u32 {
///         low
///     }
/// }
///
/// let mut rng = Low;
/// assert!(rng.roll(1));
/// assert!(!rng.roll(0));
/// assert_eq!(rng.choose(3), Some(0));
/// assert_eq!(rng.choose(0), None);
/// ```
pub trait RandomSource {
    /// A uniform integer in `[low, high]`. Callers guarantee `low <= high`.
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Succeeds with probability `percent / 100`.
    ///
    /// Draws once from `[1, 100]` and succeeds when the draw is at most
    /// `percent`, so `0` never succeeds and `100` always does.
    fn roll(&mut self, percent: u8) -> bool {
        self.range_inclusive(1, 100) <= u32::from(percent)
    }

    /// A uniform index into a sequence of `len` items.
    ///
    /// Returns `None` without drawing when `len` is zero (or too large
    /// to index with a `u32`).
    fn choose(&mut self, len: usize) -> Option<usize> {
        let last = u32::try_from(len.checked_sub(1)?).ok()?;
        Some(self.range_inclusive(0, last) as usize)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        (**self).range_inclusive(low, high)
    }
}
