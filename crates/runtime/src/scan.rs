//! Range scans and the forward-sector reduction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One range-scan sample: distance readings ordered across the sensor's
/// angular field.
///
/// JSON has no infinity, so a reading with no return travels as `null` and
/// comes back as `f32::INFINITY`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeScan {
    #[serde(with = "readings")]
    pub ranges: Vec<f32>,
}

mod readings {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ranges: &[f32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(ranges.iter().map(|r| r.is_finite().then_some(*r)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f32>, D::Error> {
        let raw = Vec::<Option<f32>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|r| r.unwrap_or(f32::INFINITY))
            .collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("scan contains no readings")]
    EmptyScan,

    #[error("forward sector of a {len}-reading scan has no usable readings")]
    DegenerateSector { len: usize },
}

/// Index window of a scan treated as "ahead".
///
/// The scan is split into `parts` equal slices and the window covers slices
/// `start..end`. Bounds use integer division, so the default middle third of
/// an `n`-reading scan is exactly `[n/3, 2n/3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardSector {
    pub start: usize,
    pub end: usize,
    pub parts: usize,
}

impl ForwardSector {
    pub const MIDDLE_THIRD: Self = Self {
        start: 1,
        end: 2,
        parts: 3,
    };

    pub const fn new(start: usize, end: usize, parts: usize) -> Self {
        Self { start, end, parts }
    }

    /// Index range of the sector within a scan of `len` readings.
    ///
    /// Computed in `u128` so that no choice of `start`, `end` or `parts`
    /// overflows.
    pub fn bounds(&self, len: usize) -> std::ops::Range<usize> {
        let parts = self.parts.max(1) as u128;
        let scale = |slice: usize| {
            usize::try_from(len as u128 * slice as u128 / parts).unwrap_or(usize::MAX)
        };
        scale(self.start)..scale(self.end)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.parts > 0 && self.start < self.end && self.end <= self.parts
    }
}

impl Default for ForwardSector {
    fn default() -> Self {
        Self::MIDDLE_THIRD
    }
}

impl RangeScan {
    pub fn new(ranges: Vec<f32>) -> Self {
        Self { ranges }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Minimum distance inside `sector`.
    ///
    /// NaN readings are skipped; infinite readings ("no return") take part in
    /// the minimum like any other value.
    pub fn forward_min(&self, sector: ForwardSector) -> Result<f32, ScanError> {
        if self.ranges.is_empty() {
            return Err(ScanError::EmptyScan);
        }

        let window = self
            .ranges
            .get(sector.bounds(self.ranges.len()))
            .unwrap_or(&[]);

        window
            .iter()
            .copied()
            .filter(|r| !r.is_nan())
            .reduce(f32::min)
            .ok_or(ScanError::DegenerateSector {
                len: self.ranges.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_third_bounds_match_integer_division() {
        let sector = ForwardSector::MIDDLE_THIRD;
        assert_eq!(sector.bounds(9), 3..6);
        assert_eq!(sector.bounds(10), 3..6);
        assert_eq!(sector.bounds(360), 120..240);
        assert_eq!(sector.bounds(2), 0..1);
        assert_eq!(sector.bounds(1), 0..0);
    }

    #[test]
    fn huge_sector_parts_do_not_overflow() {
        let sector = ForwardSector::new(usize::MAX - 1, usize::MAX, usize::MAX);
        assert!(sector.is_valid());
        assert_eq!(sector.bounds(9), 8..9);
        assert_eq!(sector.bounds(usize::MAX), (usize::MAX - 1)..usize::MAX);

        let scan = RangeScan::new(vec![2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 0.4]);
        assert_eq!(scan.forward_min(sector), Ok(0.4));
    }

    #[test]
    fn obstacle_at_sector_midpoint() {
        let mut ranges = vec![2.0; 9];
        ranges[4] = 0.3;
        let scan = RangeScan::new(ranges);
        assert_eq!(scan.forward_min(ForwardSector::default()), Ok(0.3));
    }

    #[test]
    fn readings_outside_sector_are_ignored() {
        let mut ranges = vec![2.0; 9];
        ranges[0] = 0.1;
        ranges[8] = 0.1;
        let scan = RangeScan::new(ranges);
        assert_eq!(scan.forward_min(ForwardSector::default()), Ok(2.0));
    }

    #[test]
    fn empty_scan_is_reported() {
        let scan = RangeScan::default();
        assert_eq!(
            scan.forward_min(ForwardSector::default()),
            Err(ScanError::EmptyScan)
        );
    }

    #[test]
    fn single_reading_leaves_sector_empty() {
        let scan = RangeScan::new(vec![0.2]);
        assert_eq!(
            scan.forward_min(ForwardSector::default()),
            Err(ScanError::DegenerateSector { len: 1 })
        );
    }

    #[test]
    fn nan_readings_are_skipped() {
        let scan = RangeScan::new(vec![1.0, 1.0, 1.0, f32::NAN, 0.8, f32::NAN, 1.0, 1.0, 1.0]);
        assert_eq!(scan.forward_min(ForwardSector::default()), Ok(0.8));

        let blind = RangeScan::new(vec![1.0, 1.0, 1.0, f32::NAN, f32::NAN, f32::NAN, 1.0, 1.0, 1.0]);
        assert_eq!(
            blind.forward_min(ForwardSector::default()),
            Err(ScanError::DegenerateSector { len: 9 })
        );
    }

    #[test]
    fn deserializes_from_json() {
        let scan: RangeScan = serde_json::from_str(r#"{"ranges":[1.0,0.5,2.0]}"#).unwrap();
        assert_eq!(scan.ranges, vec![1.0, 0.5, 2.0]);
    }

    #[test]
    fn no_return_readings_survive_json() {
        let mut ranges = vec![2.0; 9];
        ranges[0] = f32::INFINITY;
        ranges[3] = 0.3;
        ranges[4] = f32::INFINITY;
        let scan = RangeScan::new(ranges);

        let json = serde_json::to_string(&scan).unwrap();
        assert!(json.starts_with(r#"{"ranges":[null,2.0,2.0,0.3,null,"#));

        let back: RangeScan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scan);
        assert_eq!(back.forward_min(ForwardSector::default()), Ok(0.3));
    }

    #[test]
    fn null_readings_count_as_far_away() {
        let scan: RangeScan =
            serde_json::from_str(r#"{"ranges":[1.0,1.0,1.0,null,null,null,1.0,1.0,1.0]}"#).unwrap();
        assert_eq!(
            scan.forward_min(ForwardSector::default()),
            Ok(f32::INFINITY)
        );
    }
}
