//! Section reveal: one-shot enter/leave-back triggers plus eased tweens.

use crate::math::{apply_easing, lerp, Easing};

/// Viewport band a section travels through. `start` is where the section's
/// top edge must reach (fraction of viewport height from the top), `end`
/// where its center must reach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBand {
    pub start: f64,
    pub end: f64,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            start: 0.8,
            end: 0.5,
        }
    }
}

/// Measured position of a section relative to the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Before,
    Active,
    After,
}

impl TriggerBand {
    pub fn phase(&self, geom: &SectionGeometry) -> RevealPhase {
        if geom.top > geom.viewport_height * self.start {
            return RevealPhase::Before;
        }
        let center = geom.top + geom.height / 2.0;
        if center > geom.viewport_height * self.end {
            RevealPhase::Active
        } else {
            RevealPhase::After
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    Enter,
    LeaveBack,
}

/// Tracks which side of the band a section is on. Fires `Enter` when it
/// crosses the start going forward and `LeaveBack` when it crosses back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    band: TriggerBand,
    phase: RevealPhase,
}

impl RevealTrigger {
    pub fn new(band: TriggerBand) -> Self {
        Self {
            band,
            phase: RevealPhase::Before,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn update(&mut self, geom: &SectionGeometry) -> Option<RevealEvent> {
        let next = self.band.phase(geom);
        let prev = std::mem::replace(&mut self.phase, next);
        match (prev, next) {
            (RevealPhase::Before, RevealPhase::Active | RevealPhase::After) => {
                Some(RevealEvent::Enter)
            }
            (RevealPhase::Active | RevealPhase::After, RevealPhase::Before) => {
                Some(RevealEvent::LeaveBack)
            }
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    /// Downward offset in CSS pixels.
    pub offset_y: f64,
}

impl RevealStyle {
    pub const VISIBLE: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub fn transform(&self) -> String {
        format!("translateY({}px)", crate::math::round(self.offset_y))
    }
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self::VISIBLE
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTween {
    from: RevealStyle,
    to: RevealStyle,
    duration_sec: f64,
    easing: Easing,
    elapsed_sec: f64,
}

impl RevealTween {
    /// Tween for `event`, starting wherever the section currently is.
    pub fn for_event(event: RevealEvent, from: RevealStyle, reduced_motion: bool) -> Self {
        let (to, duration_sec, easing) = match event {
            RevealEvent::Enter => (
                RevealStyle::VISIBLE,
                if reduced_motion { 0.5 } else { 1.0 },
                Easing::EaseOut,
            ),
            RevealEvent::LeaveBack => (
                RevealStyle {
                    opacity: 0.5,
                    offset_y: if reduced_motion { 10.0 } else { 20.0 },
                },
                if reduced_motion { 0.3 } else { 0.5 },
                Easing::EaseIn,
            ),
        };
        Self {
            from,
            to,
            duration_sec,
            easing,
            elapsed_sec: 0.0,
        }
    }

    pub fn target(&self) -> RevealStyle {
        self.to
    }

    pub fn duration_sec(&self) -> f64 {
        self.duration_sec
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_sec >= self.duration_sec
    }

    pub fn advance(&mut self, dt_sec: f64) -> RevealStyle {
        self.elapsed_sec = (self.elapsed_sec + dt_sec.max(0.0)).min(self.duration_sec);
        self.sample()
    }

    pub fn sample(&self) -> RevealStyle {
        let t = if self.duration_sec > 0.0 {
            self.elapsed_sec / self.duration_sec
        } else {
            1.0
        };
        let e = apply_easing(t, self.easing);
        RevealStyle {
            opacity: lerp(self.from.opacity, self.to.opacity, e),
            offset_y: lerp(self.from.offset_y, self.to.offset_y, e),
        }
    }
}

/// Trigger, current style and running tween of one section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionReveal {
    pub id: String,
    trigger: RevealTrigger,
    style: RevealStyle,
    tween: Option<RevealTween>,
}

impl SectionReveal {
    pub fn new(id: impl Into<String>, band: TriggerBand) -> Self {
        Self {
            id: id.into(),
            trigger: RevealTrigger::new(band),
            style: RevealStyle::VISIBLE,
            tween: None,
        }
    }

    pub fn style(&self) -> RevealStyle {
        self.style
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Feed a new measurement; a crossing replaces any running tween.
    pub fn observe(&mut self, geom: &SectionGeometry, reduced_motion: bool) -> Option<RevealEvent> {
        let event = self.trigger.update(geom)?;
        self.tween = Some(RevealTween::for_event(event, self.style, reduced_motion));
        Some(event)
    }

    /// Step the running tween. Returns the new style when it changed.
    pub fn tick(&mut self, dt_sec: f64) -> Option<RevealStyle> {
        let tween = self.tween.as_mut()?;
        self.style = tween.advance(dt_sec);
        if tween.is_finished() {
            self.tween = None;
        }
        Some(self.style)
    }
}

/// Reveal state for the ordered page sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealCoordinator {
    sections: Vec<SectionReveal>,
}

impl RevealCoordinator {
    pub fn new<I, S>(ids: I, band: TriggerBand) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: ids
                .into_iter()
                .map(|id| SectionReveal::new(id, band))
                .collect(),
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, index: usize) -> Option<&SectionReveal> {
        self.sections.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Measurements for sections without a mounted element are simply never
    /// passed in; those sections keep their current style.
    pub fn observe(
        &mut self,
        index: usize,
        geom: &SectionGeometry,
        reduced_motion: bool,
    ) -> Option<RevealEvent> {
        self.sections.get_mut(index)?.observe(geom, reduced_motion)
    }

    /// Step every running tween; returns `(index, style)` for those that moved.
    pub fn tick(&mut self, dt_sec: f64) -> Vec<(usize, RevealStyle)> {
        self.sections
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.tick(dt_sec).map(|style| (i, style)))
            .collect()
    }
}
