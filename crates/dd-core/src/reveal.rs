//! Staggered one-shot reveal of sibling elements
//!
//! A [`RevealGroup`] starts `Hidden` and moves to `Visible` exactly once,
//! either on mount or the first time its region intersects the viewport.
//! Children then enter one after another with a fixed stagger.

use crate::MotionConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealTrigger {
    /// Reveal as soon as the group mounts (above-the-fold content)
    Immediate,
    /// Reveal the first time the group enters the viewport
    ViewportEntry,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup {
    trigger: RevealTrigger,
    phase: RevealPhase,
    children: usize,
    base_delay: Duration,
    stagger: Duration,
}

impl RevealGroup {
    pub fn new(trigger: RevealTrigger, children: usize, stagger: Duration) -> Self {
        Self {
            trigger,
            phase: RevealPhase::Hidden,
            children,
            base_delay: Duration::ZERO,
            stagger,
        }
    }

    pub fn with_motion(trigger: RevealTrigger, children: usize, motion: &MotionConfig) -> Self {
        Self::new(trigger, children, motion.stagger()).with_base_delay(motion.base_delay())
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn trigger(&self) -> RevealTrigger {
        self.trigger
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Visible
    }

    pub fn children(&self) -> usize {
        self.children
    }

    /// Whether viewport observations can still change the group
    pub fn is_watching(&self) -> bool {
        self.trigger == RevealTrigger::ViewportEntry && self.phase == RevealPhase::Hidden
    }

    /// Group has mounted. Returns true if this call revealed it.
    pub fn mount(&mut self) -> bool {
        match self.trigger {
            RevealTrigger::Immediate => self.reveal(),
            RevealTrigger::ViewportEntry => false,
        }
    }

    /// Visibility observation for the group's region. Returns true if
    /// this call revealed it; later observations are ignored.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match self.trigger {
            RevealTrigger::ViewportEntry if intersecting => self.reveal(),
            _ => false,
        }
    }

    fn reveal(&mut self) -> bool {
        if self.phase == RevealPhase::Visible {
            return false;
        }
        self.phase = RevealPhase::Visible;
        tracing::trace!(trigger = ?self.trigger, children = self.children, "reveal group fired");
        true
    }

    /// Entrance delay of the child at `index` (declaration order)
    pub fn child_delay(&self, index: usize) -> Duration {
        self.base_delay + self.stagger * index as u32
    }

    /// Delays for every child, in declaration order
    pub fn schedule(&self) -> impl Iterator<Item = Duration> + '_ {
        (0..self.children).map(|i| self.child_delay(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAGGER: Duration = Duration::from_millis(100);

    #[test]
    fn test_immediate_reveals_on_mount() {
        let mut group = RevealGroup::new(RevealTrigger::Immediate, 3, STAGGER);
        assert_eq!(group.phase(), RevealPhase::Hidden);
        assert!(group.mount());
        assert!(group.is_visible());
        assert!(!group.mount());
    }

    #[test]
    fn test_immediate_ignores_viewport() {
        let mut group = RevealGroup::new(RevealTrigger::Immediate, 1, STAGGER);
        assert!(!group.observe(true));
        assert!(!group.is_visible());
    }

    #[test]
    fn test_viewport_entry_fires_once() {
        let mut group = RevealGroup::new(RevealTrigger::ViewportEntry, 4, STAGGER);
        assert!(!group.mount());
        assert!(!group.observe(false));
        assert!(!group.is_visible());

        let fired = (0..10).filter(|_| group.observe(true)).count();
        assert_eq!(fired, 1);
        assert!(group.is_visible());
    }

    #[test]
    fn test_stops_watching_after_reveal() {
        let mut group = RevealGroup::new(RevealTrigger::ViewportEntry, 2, STAGGER);
        group.mount();
        assert!(group.is_watching());
        group.observe(false);
        assert!(group.is_watching());
        assert!(group.observe(true));
        assert!(!group.is_watching());

        let immediate = RevealGroup::new(RevealTrigger::Immediate, 2, STAGGER);
        assert!(!immediate.is_watching());
    }

    #[test]
    fn test_never_reverts() {
        let mut group = RevealGroup::new(RevealTrigger::ViewportEntry, 2, STAGGER);
        group.observe(true);
        group.observe(false);
        assert_eq!(group.phase(), RevealPhase::Visible);
    }

    #[test]
    fn test_untriggered_stays_hidden() {
        let group = RevealGroup::new(RevealTrigger::ViewportEntry, 2, STAGGER);
        assert_eq!(group.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn test_stagger_schedule() {
        let group = RevealGroup::new(RevealTrigger::Immediate, 3, STAGGER)
            .with_base_delay(Duration::from_millis(200));
        let delays: Vec<u128> = group.schedule().map(|d| d.as_millis()).collect();
        assert_eq!(delays, [200, 300, 400]);
    }

    #[test]
    fn test_with_motion() {
        let motion = MotionConfig {
            stagger_ms: 150,
            ..MotionConfig::default()
        };
        let group = RevealGroup::with_motion(RevealTrigger::ViewportEntry, 2, &motion);
        assert_eq!(group.child_delay(1), Duration::from_millis(150));
        assert_eq!(group.children(), 2);
    }
}
