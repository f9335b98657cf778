/// Stable handle for an image asset interned in the `ImageRegistry`.
/// Entities hold handles, never paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u32);

/// One-shot notifications produced by the scene for the host page.
/// Drained by the bridge after every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// The unlock sequence just fired (click or external `unlock()`).
    UnlockStarted,
    /// The deferred reveal delay elapsed: show the scrollable interface.
    InterfaceRevealed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_ids_order_by_index() {
        assert!(ImageId(1) < ImageId(2));
        assert_eq!(ImageId(7), ImageId(7));
    }
}
