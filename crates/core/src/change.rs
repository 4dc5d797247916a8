//! Structured change notifications.
//!
//! Instead of lifecycle callbacks, the host hands each symbol one
//! [`ChangeSet`] per notification, with a field set for every input that
//! changed. Unset fields mean "unchanged" and must leave the symbol's
//! state alone.

use crate::data::DataEnvelope;

/// Diff of host-side symbol inputs.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    /// New data payload.
    pub data: Option<DataEnvelope>,
    /// New histogram bucket count.
    pub buckets: Option<usize>,
    /// Vertical axis visibility toggle.
    pub y_axis_visible: Option<bool>,
    /// Foreground colour as a hex string.
    pub color: Option<String>,
    /// Background colour as a hex string.
    pub back_color: Option<String>,
    /// New container size `(width, height)` in logical pixels.
    pub size: Option<(f32, f32)>,
}

impl ChangeSet {
    /// `true` when no input changed.
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
            && self.buckets.is_none()
            && self.y_axis_visible.is_none()
            && self.color.is_none()
            && self.back_color.is_none()
            && self.size.is_none()
    }

    /// Change-set carrying only a data payload.
    pub fn data(data: DataEnvelope) -> Self {
        Self { data: Some(data), ..Self::default() }
    }

    /// Change-set carrying only a bucket count.
    pub fn buckets(buckets: usize) -> Self {
        Self { buckets: Some(buckets), ..Self::default() }
    }

    /// Change-set carrying only an axis visibility toggle.
    pub fn y_axis(visible: bool) -> Self {
        Self { y_axis_visible: Some(visible), ..Self::default() }
    }

    /// Change-set carrying only a container resize.
    pub fn resize(width: f32, height: f32) -> Self {
        Self { size: Some((width, height)), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(ChangeSet::default().is_empty());
    }

    #[test]
    fn constructors_set_exactly_one_field() {
        let change = ChangeSet::buckets(4);
        assert_eq!(change.buckets, Some(4));
        assert!(change.data.is_none());
        assert!(change.size.is_none());
        assert!(!change.is_empty());

        let change = ChangeSet::resize(640.0, 480.0);
        assert_eq!(change.size, Some((640.0, 480.0)));
        assert!(change.buckets.is_none());
    }
}
