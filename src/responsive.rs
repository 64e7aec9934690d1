//! Device-size breakpoints.
//!
//! The viewport width is sorted into one of four ordered categories. Each
//! threshold is an *inclusive* upper bound, so a width sitting exactly on a
//! breakpoint belongs to the smaller category.
//!
//! | category | width             |
//! |----------|-------------------|
//! | `Small`  | `..=425`          |
//! | `Medium` | `426..=768`       |
//! | `Large`  | `769..=1200`      |
//! | `XLarge` | `1201..`          |

use std::ops::{Bound, RangeBounds};

use bitflags::bitflags;
use floem_reactive::{Memo, create_memo};
use strum::IntoEnumIterator;

use crate::viewport::Viewport;

/// Inclusive upper bound of [`DeviceSize::Small`].
pub const SMALL: f64 = 425.0;
/// Inclusive upper bound of [`DeviceSize::Medium`].
pub const MEDIUM: f64 = 768.0;
/// Inclusive upper bound of [`DeviceSize::Large`].
pub const LARGE: f64 = 1200.0;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum DeviceSize {
    Small,
    Medium,
    Large,
    XLarge,
}

impl DeviceSize {
    /// Classify a width with the default breakpoints.
    pub fn from_width(width: f64) -> Self {
        Breakpoints::DEFAULT.classify(width)
    }

    /// Classify the viewport's current width with the default breakpoints.
    pub fn classify(viewport: &impl Viewport) -> Self {
        Self::from_width(viewport.inner_width())
    }

    /// Whether the viewport currently falls into this category.
    pub fn matches(self, viewport: &impl Viewport) -> bool {
        Self::classify(viewport) == self
    }

    pub const fn flag(self) -> DeviceSizes {
        match self {
            DeviceSize::Small => DeviceSizes::SMALL,
            DeviceSize::Medium => DeviceSizes::MEDIUM,
            DeviceSize::Large => DeviceSizes::LARGE,
            DeviceSize::XLarge => DeviceSizes::XLARGE,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            DeviceSize::Small => Some(DeviceSize::Medium),
            DeviceSize::Medium => Some(DeviceSize::Large),
            DeviceSize::Large => Some(DeviceSize::XLarge),
            DeviceSize::XLarge => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            DeviceSize::Small => None,
            DeviceSize::Medium => Some(DeviceSize::Small),
            DeviceSize::Large => Some(DeviceSize::Medium),
            DeviceSize::XLarge => Some(DeviceSize::Large),
        }
    }
}

/// Classify the viewport's current width.
///
/// The width is read on every call; nothing is cached.
pub fn classify(viewport: &impl Viewport) -> DeviceSize {
    DeviceSize::classify(viewport)
}

/// Whether [`classify`] would currently return `size`.
pub fn matches(viewport: &impl Viewport, size: DeviceSize) -> bool {
    size.matches(viewport)
}

/// Whether the viewport currently falls into any category of `sizes`.
pub fn matches_any(viewport: &impl Viewport, sizes: DeviceSizes) -> bool {
    sizes.contains_size(classify(viewport))
}

bitflags! {
    /// A set of [`DeviceSize`] categories.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    #[must_use]
    pub struct DeviceSizes: u8 {
        const SMALL = 1;
        const MEDIUM = 2;
        const LARGE = 4;
        const XLARGE = 8;
    }
}

impl DeviceSizes {
    /// All categories covered by `range`, e.g. `DeviceSize::Small..DeviceSize::Large`.
    pub fn range<R: RangeBounds<DeviceSize>>(range: R) -> Self {
        let start = match range.start_bound() {
            Bound::Included(s) => Some(*s),
            Bound::Excluded(s) => s.next(),
            Bound::Unbounded => Some(DeviceSize::Small),
        };
        let end = match range.end_bound() {
            Bound::Included(e) => Some(*e),
            Bound::Excluded(e) => e.prev(),
            Bound::Unbounded => Some(DeviceSize::XLarge),
        };
        let (Some(start), Some(end)) = (start, end) else {
            return Self::empty();
        };

        DeviceSize::iter()
            .filter(|size| *size >= start && *size <= end)
            .fold(Self::empty(), |sizes, size| sizes | size.flag())
    }

    pub const fn not(sizes: DeviceSizes) -> Self {
        Self::all().difference(sizes)
    }

    pub const fn contains_size(&self, size: DeviceSize) -> bool {
        self.contains(size.flag())
    }
}

impl From<DeviceSize> for DeviceSizes {
    fn from(size: DeviceSize) -> Self {
        size.flag()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum BreakpointError {
    #[error("breakpoint {0} is not a finite, non-negative width")]
    Invalid(f64),
    #[error("breakpoints must be strictly increasing, got {small} / {medium} / {large}")]
    NotIncreasing { small: f64, medium: f64, large: f64 },
}

/// Width breakpoints in pixels, each an inclusive upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBreakpoints"))]
pub struct Breakpoints {
    small: f64,
    medium: f64,
    large: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBreakpoints {
    small: f64,
    medium: f64,
    large: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBreakpoints> for Breakpoints {
    type Error = BreakpointError;

    fn try_from(raw: RawBreakpoints) -> Result<Self, Self::Error> {
        Breakpoints::new(raw.small, raw.medium, raw.large)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Breakpoints {
    pub const DEFAULT: Breakpoints = Breakpoints {
        small: SMALL,
        medium: MEDIUM,
        large: LARGE,
    };

    pub fn new(small: f64, medium: f64, large: f64) -> Result<Self, BreakpointError> {
        for bound in [small, medium, large] {
            if !bound.is_finite() || bound < 0.0 {
                return Err(BreakpointError::Invalid(bound));
            }
        }
        if !(small < medium && medium < large) {
            return Err(BreakpointError::NotIncreasing {
                small,
                medium,
                large,
            });
        }
        Ok(Self {
            small,
            medium,
            large,
        })
    }

    pub fn classify(&self, width: f64) -> DeviceSize {
        if width <= self.small {
            DeviceSize::Small
        } else if width <= self.medium {
            DeviceSize::Medium
        } else if width <= self.large {
            DeviceSize::Large
        } else {
            // Also catches NaN, which fails every comparison above.
            DeviceSize::XLarge
        }
    }

    /// The inclusive upper bound of `size`, or `None` for the unbounded
    /// [`DeviceSize::XLarge`].
    pub fn upper_bound(&self, size: DeviceSize) -> Option<f64> {
        match size {
            DeviceSize::Small => Some(self.small),
            DeviceSize::Medium => Some(self.medium),
            DeviceSize::Large => Some(self.large),
            DeviceSize::XLarge => None,
        }
    }
}

/// Create a memo tracking the device size of a reactive viewport with the
/// default breakpoints.
///
/// Dependents of the memo are only notified when the category changes, not
/// on every resize.
pub fn create_device_size<V>(viewport: V) -> Memo<DeviceSize>
where
    V: Viewport + 'static,
{
    create_device_size_with(Breakpoints::DEFAULT, viewport)
}

pub fn create_device_size_with<V>(breakpoints: Breakpoints, viewport: V) -> Memo<DeviceSize>
where
    V: Viewport + 'static,
{
    create_memo(move |prev: Option<&DeviceSize>| {
        let size = breakpoints.classify(viewport.inner_width());
        if let Some(prev) = prev.filter(|prev| **prev != size) {
            tracing::trace!(from = %prev, to = %size, "device size changed");
        }
        size
    })
}

#[cfg(test)]
mod tests {
    use super::{BreakpointError, Breakpoints, DeviceSize, DeviceSizes};

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(DeviceSize::from_width(400.0), DeviceSize::Small);
        assert_eq!(DeviceSize::from_width(425.0), DeviceSize::Small);
        assert_eq!(DeviceSize::from_width(426.0), DeviceSize::Medium);
        assert_eq!(DeviceSize::from_width(768.0), DeviceSize::Medium);
        assert_eq!(DeviceSize::from_width(769.0), DeviceSize::Large);
        assert_eq!(DeviceSize::from_width(1200.0), DeviceSize::Large);
        assert_eq!(DeviceSize::from_width(1201.0), DeviceSize::XLarge);
    }

    #[test]
    fn fractional_widths() {
        assert_eq!(DeviceSize::from_width(425.5), DeviceSize::Medium);
        assert_eq!(DeviceSize::from_width(1200.01), DeviceSize::XLarge);
    }

    #[test]
    fn degenerate_widths() {
        assert_eq!(DeviceSize::from_width(0.0), DeviceSize::Small);
        assert_eq!(DeviceSize::from_width(-10.0), DeviceSize::Small);
        assert_eq!(DeviceSize::from_width(f64::INFINITY), DeviceSize::XLarge);
        assert_eq!(DeviceSize::from_width(f64::NAN), DeviceSize::XLarge);
    }

    #[test]
    fn sizes_are_ordered() {
        assert!(DeviceSize::Small < DeviceSize::Medium);
        assert!(DeviceSize::Medium < DeviceSize::Large);
        assert!(DeviceSize::Large < DeviceSize::XLarge);
    }

    #[test]
    fn display_names() {
        assert_eq!(DeviceSize::Small.to_string(), "SMALL");
        assert_eq!(DeviceSize::XLarge.to_string(), "XLARGE");
        assert_eq!("LARGE".parse::<DeviceSize>(), Ok(DeviceSize::Large));
    }

    #[test]
    fn range_full() {
        assert_eq!(DeviceSizes::range(..), DeviceSizes::all());
        assert_eq!(
            DeviceSizes::range(DeviceSize::Small..=DeviceSize::XLarge),
            DeviceSizes::all()
        );
    }

    #[test]
    fn range_small2large_incl() {
        let sizes = DeviceSizes::range(DeviceSize::Small..=DeviceSize::Large);
        assert!(sizes.contains_size(DeviceSize::Small));
        assert!(sizes.contains_size(DeviceSize::Medium));
        assert!(sizes.contains_size(DeviceSize::Large));
        assert!(!sizes.contains_size(DeviceSize::XLarge));
    }

    #[test]
    fn range_small2large_excl() {
        let sizes = DeviceSizes::range(DeviceSize::Small..DeviceSize::Large);
        assert_eq!(sizes, DeviceSizes::SMALL | DeviceSizes::MEDIUM);
    }

    #[test]
    fn range_open_start() {
        assert_eq!(
            DeviceSizes::range(DeviceSize::Large..),
            DeviceSizes::LARGE | DeviceSizes::XLARGE
        );
    }

    #[test]
    fn range_empty() {
        assert!(DeviceSizes::range(..DeviceSize::Small).is_empty());
        assert!(DeviceSizes::range(DeviceSize::Large..DeviceSize::Medium).is_empty());
    }

    #[test]
    fn negated_union() {
        let sizes = DeviceSizes::not(DeviceSizes::SMALL | DeviceSizes::XLARGE);
        assert!(!sizes.contains_size(DeviceSize::Small));
        assert!(!sizes.contains_size(DeviceSize::XLarge));

        assert!(sizes.contains_size(DeviceSize::Medium));
        assert!(sizes.contains_size(DeviceSize::Large));
    }

    #[test]
    fn custom_breakpoints() {
        let breakpoints = Breakpoints::new(320.0, 640.0, 1024.0).unwrap();
        assert_eq!(breakpoints.classify(320.0), DeviceSize::Small);
        assert_eq!(breakpoints.classify(640.0), DeviceSize::Medium);
        assert_eq!(breakpoints.classify(700.0), DeviceSize::Large);
        assert_eq!(breakpoints.classify(1100.0), DeviceSize::XLarge);
        assert_eq!(breakpoints.upper_bound(DeviceSize::Medium), Some(640.0));
        assert_eq!(breakpoints.upper_bound(DeviceSize::XLarge), None);
    }

    #[test]
    fn rejects_bad_breakpoints() {
        assert_eq!(
            Breakpoints::new(768.0, 425.0, 1200.0),
            Err(BreakpointError::NotIncreasing {
                small: 768.0,
                medium: 425.0,
                large: 1200.0,
            })
        );
        assert_eq!(
            Breakpoints::new(425.0, 425.0, 1200.0),
            Err(BreakpointError::NotIncreasing {
                small: 425.0,
                medium: 425.0,
                large: 1200.0,
            })
        );
        assert_eq!(
            Breakpoints::new(-1.0, 768.0, 1200.0),
            Err(BreakpointError::Invalid(-1.0))
        );
        assert!(matches!(
            Breakpoints::new(425.0, f64::NAN, 1200.0),
            Err(BreakpointError::Invalid(_))
        ));
    }

    #[test]
    fn default_breakpoints() {
        assert_eq!(Breakpoints::default(), Breakpoints::DEFAULT);
        assert_eq!(
            Breakpoints::default(),
            Breakpoints::new(425.0, 768.0, 1200.0).unwrap()
        );
    }
}
