//! One-shot lazy-load state machine for a deferred image.
//!
//! Tracks a single observed element through its only transition,
//! `Deferred -> Loaded`, and tells the caller what to apply to the element
//! when that transition fires.

/// Class added to the element once its source has been promoted.
pub const LOADED_CLASS: &str = "loaded";

/// Load state of an observed image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// The active source is still empty; the deferred value is waiting.
    Deferred,
    /// The transition has fired. Terminal.
    Loaded,
}

/// Side effects to apply to the observed element on its first visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadAction {
    /// Deferred value to promote into the active source attribute.
    ///
    /// `None` when the element never carried a deferred source; the
    /// transition still completes, but nothing is written.
    pub source: Option<String>,
}

/// State machine for one lazily loaded image.
///
/// Feed it visibility notifications with [`DeferredImage::on_intersection`];
/// it answers with a [`LoadAction`] exactly once, on the first notification
/// that reports the element visible. Every later notification is ignored,
/// so a watcher that fires again before it is deregistered cannot cause a
/// second mutation.
#[derive(Clone, Debug)]
pub struct DeferredImage {
    source: Option<String>,
    state: LoadState,
}

impl DeferredImage {
    /// Creates the machine with the element's deferred-source value, if any.
    pub fn new(source: Option<String>) -> Self {
        Self {
            source,
            state: LoadState::Deferred,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Feeds one visibility notification.
    ///
    /// Returns the swap to apply when the element first becomes visible
    /// (at least one pixel inside the viewport), `None` otherwise and on
    /// every notification after the transition.
    pub fn on_intersection(&mut self, visible: bool) -> Option<LoadAction> {
        if !visible || self.state == LoadState::Loaded {
            return None;
        }
        self.state = LoadState::Loaded;
        log::debug!("deferred image promoted to loaded");
        Some(LoadAction {
            source: self.source.take(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invisible_notifications_do_nothing() {
        let mut image = DeferredImage::new(Some("hero.webp".into()));

        assert_eq!(image.on_intersection(false), None);
        assert_eq!(image.on_intersection(false), None);
        assert_eq!(image.state(), LoadState::Deferred);
    }

    #[test]
    fn test_first_visibility_promotes_the_source() {
        let mut image = DeferredImage::new(Some("hero.webp".into()));

        let action = image.on_intersection(true).expect("transition fires");
        assert_eq!(action.source.as_deref(), Some("hero.webp"));
        assert_eq!(image.state(), LoadState::Loaded);
    }

    #[test]
    fn test_transition_is_one_shot() {
        let mut image = DeferredImage::new(Some("hero.webp".into()));

        assert!(image.on_intersection(true).is_some());
        assert_eq!(image.on_intersection(true), None);
        assert_eq!(image.on_intersection(false), None);
    }

    #[test]
    fn test_missing_deferred_source_still_completes() {
        let mut image = DeferredImage::new(None);

        let action = image.on_intersection(true).expect("transition fires");
        assert_eq!(action.source, None);
        assert_eq!(image.state(), LoadState::Loaded);
    }
}
