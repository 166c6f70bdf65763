use tracing::{debug, instrument, Level};

use crate::section::Section;

// the detection line sits this far down the viewport
pub const DETECTION_RATIO: f64 = 0.25;

// distance from either end of the document at which the first/last section is forced
pub const EDGE_MARGIN: f64 = 100.0;

// past this offset the navbar switches to its compact look
pub const SCROLLED_THRESHOLD: f64 = 50.0;

// how long a navigation click freezes the tracker, in milliseconds
pub const COOL_DOWN_MS: f64 = 1000.0;

// clearance left above a section when scrolling to it, so the fixed navbar
// does not cover the heading
pub const HEADER_OFFSET: f64 = 100.0;

// viewport geometry sampled once per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    pub fn detection_line(&self) -> f64 {
        self.height * DETECTION_RATIO
    }

    pub fn at_top(&self) -> bool {
        self.scroll_y < EDGE_MARGIN
    }

    pub fn at_bottom(&self) -> bool {
        self.scroll_y + self.height >= self.document_height - EDGE_MARGIN
    }

    pub fn scrolled(&self) -> bool {
        self.scroll_y > SCROLLED_THRESHOLD
    }
}

// pick the active section for one frame
//
// tops[i] is the viewport-relative top edge of registry[i], or None if the element
// could not be found; missing sections simply cannot be candidates.
//
// a section is a candidate once its top has reached the detection line, and the
// winner is the candidate closest to the line from above, i.e. the one crossed most
// recently.  equal distances go to the later section.  the bottom of the document
// forces the last section and the top forces the first, with the bottom taking
// precedence on pages too short to have both
pub fn detect_active(registry: &[Section], viewport: &Viewport, tops: &[Option<f64>]) -> Section {
    let first = registry.first().copied().unwrap_or_default();

    if viewport.at_bottom() {
        return registry.last().copied().unwrap_or(first);
    }

    if viewport.at_top() {
        return first;
    }

    let line = viewport.detection_line();

    registry
        .iter()
        .zip(tops.iter())
        .filter_map(|(section, top)| {
            let top = (*top)?;
            (top <= line).then_some((*section, line - top))
        })
        .fold(None, |best: Option<(Section, f64)>, (section, distance)| match best {
            Some((_, best_distance)) if best_distance < distance => best,
            _ => Some((section, distance)),
        })
        .map(|(section, _)| section)
        .unwrap_or(first)
}

// target offset for a programmatic scroll to an element whose viewport-relative
// top is element_top
pub fn scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y - HEADER_OFFSET).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackerState {
    Tracking,
    Suspended { target: Section, until: f64 },
}

// ScrollTracker
//
// keeps the active section in step with the viewport.  a navigation click suspends
// it at the clicked section until the cool-down has passed, so the sections that
// fly past during the smooth scroll never show up as active.  timestamps are in
// milliseconds from whatever clock the caller uses, as long as it is monotonic
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    registry: &'static [Section],
    state: TrackerState,
    active: Section,
}

impl ScrollTracker {
    pub fn new(registry: &'static [Section]) -> Self {
        ScrollTracker {
            registry,
            state: TrackerState::Tracking,
            active: registry.first().copied().unwrap_or_default(),
        }
    }

    pub fn registry(&self) -> &'static [Section] {
        self.registry
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self.state, TrackerState::Suspended { .. })
    }

    #[instrument(level = Level::DEBUG, skip(self))]
    pub fn suspend(&mut self, target: Section, now: f64) {
        self.active = target;
        self.state = TrackerState::Suspended {
            target,
            until: now + COOL_DOWN_MS,
        };
    }

    pub fn resume(&mut self) {
        if self.is_suspended() {
            debug!("scroll tracker resumed");
        }
        self.state = TrackerState::Tracking;
    }

    // recompute for one (coalesced) frame and return the active section
    pub fn on_frame(&mut self, viewport: &Viewport, tops: &[Option<f64>], now: f64) -> Section {
        if let TrackerState::Suspended { target, until } = self.state {
            if now < until {
                return target;
            }
            self.resume();
        }

        self.active = detect_active(self.registry, viewport, tops);
        self.active
    }
}

// FrameGate
//
// scroll and resize fire far more often than the screen refreshes.  the first
// request after a frame has run asks the caller to schedule a new one; the rest
// are absorbed until complete() is called from inside that frame
#[derive(Clone, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SECTIONS;

    const SHORT: [Section; 3] = [Section::Home, Section::About, Section::Skills];

    fn mid_page(height: f64) -> Viewport {
        Viewport {
            scroll_y: 1000.0,
            height,
            document_height: 6000.0,
        }
    }

    #[test]
    fn last_crossed_section_wins() {
        let tops = [Some(-50.0), Some(150.0), Some(900.0)];

        assert_eq!(detect_active(&SHORT, &mid_page(800.0), &tops), Section::About);
    }

    #[test]
    fn section_exactly_on_the_line_is_a_candidate() {
        let tops = [Some(-500.0), Some(200.0), Some(900.0)];

        assert_eq!(detect_active(&SHORT, &mid_page(800.0), &tops), Section::About);
    }

    #[test]
    fn nothing_crossed_falls_back_to_first() {
        let tops = [Some(300.0), Some(900.0), Some(1500.0)];

        assert_eq!(detect_active(&SHORT, &mid_page(800.0), &tops), Section::Home);
    }

    #[test]
    fn missing_elements_are_skipped() {
        let tops = [Some(-400.0), None, Some(900.0)];

        assert_eq!(detect_active(&SHORT, &mid_page(800.0), &tops), Section::Home);
    }

    #[test]
    fn equal_distance_goes_to_later_section() {
        let tops = [Some(100.0), Some(100.0), Some(900.0)];

        assert_eq!(detect_active(&SHORT, &mid_page(800.0), &tops), Section::About);
    }

    #[test]
    fn bottom_of_document_forces_last() {
        // skills has not crossed the line, but we are within the margin of the end
        let viewport = Viewport {
            scroll_y: 5150.0,
            height: 800.0,
            document_height: 6000.0,
        };
        let tops = [Some(-5000.0), Some(-100.0), Some(400.0)];

        assert_eq!(detect_active(&SHORT, &viewport, &tops), Section::Skills);
    }

    #[test]
    fn top_of_document_forces_first() {
        let viewport = Viewport {
            scroll_y: 99.0,
            height: 800.0,
            document_height: 6000.0,
        };
        let tops = [Some(-99.0), Some(0.0), Some(150.0)];

        assert_eq!(detect_active(&SHORT, &viewport, &tops), Section::Home);
    }

    #[test]
    fn short_page_prefers_bottom_rule() {
        let viewport = Viewport {
            scroll_y: 0.0,
            height: 800.0,
            document_height: 850.0,
        };

        assert_eq!(detect_active(&SHORT, &viewport, &[None, None, None]), Section::Skills);
    }

    #[test]
    fn scroll_target_clears_the_header() {
        assert_eq!(scroll_target(600.0, 1200.0), 1700.0);
        assert_eq!(scroll_target(20.0, 0.0), 0.0);
    }

    #[test]
    fn tracker_starts_tracking_at_first_section() {
        let tracker = ScrollTracker::new(&SECTIONS);

        assert_eq!(tracker.active(), Section::Home);
        assert_eq!(tracker.state(), TrackerState::Tracking);
    }

    #[test]
    fn click_freezes_tracker_for_the_cool_down() {
        let mut tracker = ScrollTracker::new(&SHORT);
        let viewport = mid_page(800.0);

        tracker.suspend(Section::Skills, 10_000.0);
        assert_eq!(tracker.active(), Section::Skills);

        // about is passing the line mid-animation
        let passing = [Some(-900.0), Some(180.0), Some(700.0)];
        assert_eq!(tracker.on_frame(&viewport, &passing, 10_300.0), Section::Skills);
        assert_eq!(tracker.on_frame(&viewport, &passing, 10_999.0), Section::Skills);
        assert!(tracker.is_suspended());

        // cool-down over, normal detection takes over again
        assert_eq!(tracker.on_frame(&viewport, &passing, 11_000.0), Section::About);
        assert_eq!(tracker.state(), TrackerState::Tracking);
    }

    #[test]
    fn explicit_resume_ends_suspension() {
        let mut tracker = ScrollTracker::new(&SHORT);
        let tops = [Some(-900.0), Some(-300.0), Some(120.0)];

        tracker.suspend(Section::About, 0.0);
        tracker.resume();

        assert_eq!(tracker.on_frame(&mid_page(800.0), &tops, 1.0), Section::Skills);
    }

    #[test]
    fn second_click_restarts_the_window() {
        let mut tracker = ScrollTracker::new(&SHORT);
        let tops = [Some(-900.0), Some(150.0), Some(700.0)];

        tracker.suspend(Section::Skills, 0.0);
        tracker.suspend(Section::Home, 800.0);

        assert_eq!(tracker.on_frame(&mid_page(800.0), &tops, 1500.0), Section::Home);
        assert_eq!(tracker.on_frame(&mid_page(800.0), &tops, 1800.0), Section::About);
    }

    #[test]
    fn frame_gate_coalesces_requests() {
        let mut gate = FrameGate::default();

        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());

        gate.complete();
        assert!(gate.request());
    }

    #[test]
    fn scrolled_flag_follows_offset() {
        assert!(!mid_page(800.0).at_top());
        assert!(mid_page(800.0).scrolled());
        assert!(
            !Viewport {
                scroll_y: 50.0,
                height: 800.0,
                document_height: 6000.0
            }
            .scrolled()
        );
    }
}
