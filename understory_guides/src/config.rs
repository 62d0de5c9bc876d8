// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning knobs for controllers and renderers.

/// Errors from building a [`GuideConfig`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GuideConfigError {
    /// A value was NaN or infinite.
    #[error("{field} must be finite; got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The match distance was negative.
    #[error("match distance must be non-negative; got {0}")]
    NegativeMatchDistance(f64),
    /// The chrome tick length was negative.
    #[error("chrome tick length must be non-negative; got {0}")]
    NegativeTickLength(f64),
}

/// Presentation tuning shared by the moving and resizing guide engines.
///
/// Both values are in scene units. The defaults are a match distance of
/// `6.0` and end caps of `4.0`.
///
/// ```rust
/// use understory_guides::GuideConfig;
///
/// let config = GuideConfig::default().with_match_distance(8.0).unwrap();
/// assert_eq!(config.match_distance(), 8.0);
/// assert_eq!(config.chrome_tick_length(), 4.0);
///
/// assert!(GuideConfig::new(-1.0, 4.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideConfig {
    match_distance: f64,
    chrome_tick_length: f64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            match_distance: Self::DEFAULT_MATCH_DISTANCE,
            chrome_tick_length: Self::DEFAULT_CHROME_TICK_LENGTH,
        }
    }
}

impl GuideConfig {
    /// Default maximum distance (exclusive) at which a candidate snaps.
    pub const DEFAULT_MATCH_DISTANCE: f64 = 6.0;
    /// Default length of the end caps drawn on resize guides.
    pub const DEFAULT_CHROME_TICK_LENGTH: f64 = 4.0;

    /// Build a validated configuration.
    pub fn new(match_distance: f64, chrome_tick_length: f64) -> Result<Self, GuideConfigError> {
        Self::default()
            .with_match_distance(match_distance)?
            .with_chrome_tick_length(chrome_tick_length)
    }

    /// Replace the match distance.
    pub fn with_match_distance(mut self, match_distance: f64) -> Result<Self, GuideConfigError> {
        check_finite("match_distance", match_distance)?;
        if match_distance < 0.0 {
            return Err(GuideConfigError::NegativeMatchDistance(match_distance));
        }
        self.match_distance = match_distance;
        Ok(self)
    }

    /// Replace the chrome tick length.
    pub fn with_chrome_tick_length(
        mut self,
        chrome_tick_length: f64,
    ) -> Result<Self, GuideConfigError> {
        check_finite("chrome_tick_length", chrome_tick_length)?;
        if chrome_tick_length < 0.0 {
            return Err(GuideConfigError::NegativeTickLength(chrome_tick_length));
        }
        self.chrome_tick_length = chrome_tick_length;
        Ok(self)
    }

    /// Maximum distance (exclusive) at which a candidate snaps.
    pub fn match_distance(&self) -> f64 {
        self.match_distance
    }

    /// Length of the perpendicular end caps on resize guides.
    pub fn chrome_tick_length(&self) -> f64 {
        self.chrome_tick_length
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), GuideConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GuideConfigError::NonFinite { field, value })
    }
}

bitflags::bitflags! {
    /// Dimensions a resizing gesture matches against sibling sizes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SizeAxes: u8 {
        /// Match widths.
        const WIDTH  = 0b0000_0001;
        /// Match heights.
        const HEIGHT = 0b0000_0010;
    }
}

impl Default for SizeAxes {
    fn default() -> Self {
        Self::WIDTH | Self::HEIGHT
    }
}
