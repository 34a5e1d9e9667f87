//! Advanced overflow buckets.
//!
//! Categories marked "advanced" are grouped below the main tree into one of
//! ten fixed buckets: a default bucket for untagged categories plus nine
//! explicitly tagged ones. The set is closed; an unknown tag falls back to
//! the default bucket.

use serde::{Deserialize, Serialize};

/// One of the ten fixed overflow groupings for advanced categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvancedBucket {
    Advanced,
    Board,
    ClickboardSensors,
    ClickboardButtons,
    ClickboardWireless,
    ClickboardMotors,
    ClickboardDisplay,
    ClickboardPower,
    Cybersecurity,
    ExternalSensors,
}

impl AdvancedBucket {
    /// All buckets in tree display order. The default bucket renders first.
    pub const ALL: [AdvancedBucket; 10] = [
        AdvancedBucket::Advanced,
        AdvancedBucket::Board,
        AdvancedBucket::ClickboardSensors,
        AdvancedBucket::ClickboardButtons,
        AdvancedBucket::ClickboardWireless,
        AdvancedBucket::ClickboardMotors,
        AdvancedBucket::ClickboardDisplay,
        AdvancedBucket::ClickboardPower,
        AdvancedBucket::Cybersecurity,
        AdvancedBucket::ExternalSensors,
    ];

    /// Wire tag carried on category metadata. The default bucket is "0".
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            AdvancedBucket::Advanced => "0",
            AdvancedBucket::Board => "1001",
            AdvancedBucket::ClickboardSensors => "1002",
            AdvancedBucket::ClickboardButtons => "1003",
            AdvancedBucket::ClickboardWireless => "1004",
            AdvancedBucket::ClickboardMotors => "1005",
            AdvancedBucket::ClickboardDisplay => "1006",
            AdvancedBucket::ClickboardPower => "1007",
            AdvancedBucket::Cybersecurity => "1008",
            AdvancedBucket::ExternalSensors => "1009",
        }
    }

    /// Resolve a raw group tag to a bucket. Anything unrecognized (including
    /// a missing tag) lands in the default bucket.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> AdvancedBucket {
        match tag {
            Some("1001") => AdvancedBucket::Board,
            Some("1002") => AdvancedBucket::ClickboardSensors,
            Some("1003") => AdvancedBucket::ClickboardButtons,
            Some("1004") => AdvancedBucket::ClickboardWireless,
            Some("1005") => AdvancedBucket::ClickboardMotors,
            Some("1006") => AdvancedBucket::ClickboardDisplay,
            Some("1007") => AdvancedBucket::ClickboardPower,
            Some("1008") => AdvancedBucket::Cybersecurity,
            Some("1009") => AdvancedBucket::ExternalSensors,
            _ => AdvancedBucket::Advanced,
        }
    }

    /// Header label shown on the bucket's toggle row.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            AdvancedBucket::Advanced => "Advanced",
            AdvancedBucket::Board => "b.Board",
            AdvancedBucket::ClickboardSensors => "Clickboards: Sensors",
            AdvancedBucket::ClickboardButtons => "Clickboards: Buttons & Switches",
            AdvancedBucket::ClickboardWireless => "Clickboards: Wireless",
            AdvancedBucket::ClickboardMotors => "Clickboards: Motors",
            AdvancedBucket::ClickboardDisplay => "Clickboards: Display & LED",
            AdvancedBucket::ClickboardPower => "Clickboards: Power",
            AdvancedBucket::Cybersecurity => "Cybersecurity",
            AdvancedBucket::ExternalSensors => "External Sensors",
        }
    }

    /// Header row color, hex.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            AdvancedBucket::Advanced => "#3c3c3c",
            AdvancedBucket::Board => "#9e4894",
            AdvancedBucket::ClickboardSensors => "#33bebb",
            AdvancedBucket::ClickboardButtons => "#f4b820",
            AdvancedBucket::ClickboardWireless => "#ff2f92",
            AdvancedBucket::ClickboardMotors => "#ff2f92",
            AdvancedBucket::ClickboardDisplay => "#d400d4",
            AdvancedBucket::ClickboardPower => "#ff2f92",
            AdvancedBucket::Cybersecurity => "#ff2f92",
            AdvancedBucket::ExternalSensors => "#0fbc11",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }
}

/// Independent show/hide toggles, one per bucket. All hidden by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvancedVisibility {
    shown: [bool; 10],
}

impl AdvancedVisibility {
    #[must_use]
    pub fn is_visible(&self, bucket: AdvancedBucket) -> bool {
        self.shown[bucket.index()]
    }

    /// Flip one bucket, leaving the other nine untouched. Returns the new
    /// visibility.
    pub fn toggle(&mut self, bucket: AdvancedBucket) -> bool {
        let slot = &mut self.shown[bucket.index()];
        *slot = !*slot;
        *slot
    }

    pub fn reset(&mut self) {
        self.shown = [false; 10];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for bucket in AdvancedBucket::ALL {
            assert_eq!(AdvancedBucket::from_tag(Some(bucket.tag())), bucket);
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default_bucket() {
        assert_eq!(AdvancedBucket::from_tag(None), AdvancedBucket::Advanced);
        assert_eq!(AdvancedBucket::from_tag(Some("1234")), AdvancedBucket::Advanced);
        assert_eq!(AdvancedBucket::from_tag(Some("")), AdvancedBucket::Advanced);
    }

    #[test]
    fn test_toggle_is_independent_per_bucket() {
        let mut vis = AdvancedVisibility::default();
        assert!(!vis.is_visible(AdvancedBucket::Board));

        assert!(vis.toggle(AdvancedBucket::Board));
        assert!(vis.is_visible(AdvancedBucket::Board));

        // Every other bucket is untouched
        for bucket in AdvancedBucket::ALL {
            if bucket != AdvancedBucket::Board {
                assert!(!vis.is_visible(bucket));
            }
        }

        assert!(!vis.toggle(AdvancedBucket::Board));
        assert!(!vis.is_visible(AdvancedBucket::Board));
    }
}
