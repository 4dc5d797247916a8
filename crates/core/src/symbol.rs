use vizlet_surface::Scene;

use crate::change::ChangeSet;

/// Every shipped (and future plugin) symbol must implement this trait.
///
/// Symbols are purely reactive: the host delivers a [`ChangeSet`] for the
/// inputs that changed and the symbol mutates its retained [`Scene`] in
/// response. One notification is processed to completion before the next
/// arrives; there is no concurrency inside a symbol.
pub trait Symbol: Send + Sync + std::fmt::Debug {
    /// Symbol kind identifier, e.g. `"histogram"` or `"label"`.
    fn kind(&self) -> &'static str;

    /// Apply one change notification.
    ///
    /// Never fails: unusable or missing data degrades to the "no content"
    /// state rather than crossing this boundary as an error.
    fn apply_change(&mut self, change: &ChangeSet);

    /// The retained surface this symbol draws into.
    fn scene(&self) -> &Scene;

    /// Current layout size `(width, height)` in logical pixels.
    fn size(&self) -> (f32, f32);
}
