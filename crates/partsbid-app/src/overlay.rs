// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Overlay;

/// One independent toggle per modal dialog. Opening one never closes another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    open: [bool; Overlay::ALL.len()],
}

impl OverlayState {
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.open[overlay.index()]
    }

    /// Returns whether the toggle changed.
    pub fn open(&mut self, overlay: Overlay) -> bool {
        let slot = &mut self.open[overlay.index()];
        let changed = !*slot;
        *slot = true;
        changed
    }

    /// Returns whether the toggle changed.
    pub fn close(&mut self, overlay: Overlay) -> bool {
        let slot = &mut self.open[overlay.index()];
        let changed = *slot;
        *slot = false;
        changed
    }

    pub fn open_overlays(&self) -> Vec<Overlay> {
        Overlay::ALL
            .into_iter()
            .filter(|overlay| self.is_open(*overlay))
            .collect()
    }

    pub fn any_open(&self) -> bool {
        self.open.iter().any(|open| *open)
    }

    /// The overlay drawn last, and therefore the one receiving input.
    pub fn topmost(&self) -> Option<Overlay> {
        Overlay::ALL
            .into_iter()
            .rev()
            .find(|overlay| self.is_open(*overlay))
    }
}

#[cfg(test)]
mod tests {
    use super::OverlayState;
    use crate::Overlay;

    #[test]
    fn overlays_are_independent() {
        let mut overlays = OverlayState::default();
        assert!(overlays.open(Overlay::SignUp));
        assert!(overlays.open(Overlay::SignIn));

        assert_eq!(
            overlays.open_overlays(),
            vec![Overlay::SignUp, Overlay::SignIn]
        );
        assert_eq!(overlays.topmost(), Some(Overlay::SignIn));
    }

    #[test]
    fn repeated_open_and_close_are_no_ops() {
        let mut overlays = OverlayState::default();
        assert!(!overlays.close(Overlay::Profile));
        assert!(overlays.open(Overlay::Profile));
        assert!(!overlays.open(Overlay::Profile));
        assert!(overlays.close(Overlay::Profile));
        assert!(!overlays.any_open());
    }
}
