use crate::section::Section;

// animation timelines as plain functions of time and geometry
//
// the web app samples these on a timer and writes the results into styles and
// text nodes; nothing in here knows about the DOM

// a slot on a timeline, in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub duration: f64,
}

impl Segment {
    pub const fn new(start: f64, duration: f64) -> Self {
        Segment { start, duration }
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    // linear progress through the segment, clamped to [0, 1]
    pub fn progress(&self, t: f64) -> f64 {
        if self.duration <= 0.0 {
            return if t >= self.start { 1.0 } else { 0.0 };
        }
        ((t - self.start) / self.duration).clamp(0.0, 1.0)
    }

    // segment starting when this one ends
    pub const fn then(&self, duration: f64) -> Segment {
        Segment::new(self.start + self.duration, duration)
    }
}

// quadratic ease-out
pub fn ease_out(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p) * (1.0 - p)
}

// the prefix of text revealed at the given progress, counted in characters so that
// multi-byte text (the arabic copy) is never cut mid-character
pub fn typewriter(text: &str, progress: f64) -> &str {
    let progress = progress.clamp(0.0, 1.0);
    let total = text.chars().count();
    let shown = (total as f64 * progress).floor() as usize;

    match text.char_indices().nth(shown) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

const START_DELAY: f64 = 0.1;
const ORB_FADE: f64 = 1.0;
const ORB_STAGGER: f64 = 0.2;

// hero timeline, back to back: orbs, greeting, name, title, underline, bio, with
// the scroll indicator overlapping the last 0.2s of the bio
pub const ORB_SEGMENTS: [Segment; 2] = [
    Segment::new(START_DELAY, ORB_FADE),
    Segment::new(START_DELAY + ORB_STAGGER, ORB_FADE),
];
pub const GREETING: Segment = Segment::new(START_DELAY + ORB_STAGGER + ORB_FADE, 0.4);
pub const NAME: Segment = GREETING.then(1.2);
pub const TITLE: Segment = NAME.then(1.0);
pub const UNDERLINE: Segment = TITLE.then(0.6);
pub const BIO: Segment = UNDERLINE.then(3.5);
pub const SCROLL_INDICATOR: Segment = Segment::new(BIO.start + BIO.duration - 0.2, 0.6);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTexts<'a> {
    pub greeting: &'a str,
    pub name: &'a str,
    pub title: &'a str,
    pub bio: &'a str,
}

// what the hero shows at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame<'a> {
    pub orbs: [f64; 2],
    pub greeting: &'a str,
    pub name: &'a str,
    pub title: &'a str,
    pub underline: f64,
    pub bio: &'a str,
    pub scroll_indicator: f64,
}

pub fn hero_frame<'a>(texts: &HeroTexts<'a>, elapsed: f64) -> HeroFrame<'a> {
    HeroFrame {
        orbs: ORB_SEGMENTS.map(|s| ease_out(s.progress(elapsed))),
        greeting: typewriter(texts.greeting, GREETING.progress(elapsed)),
        name: typewriter(texts.name, NAME.progress(elapsed)),
        title: typewriter(texts.title, TITLE.progress(elapsed)),
        underline: ease_out(UNDERLINE.progress(elapsed)),
        bio: typewriter(texts.bio, BIO.progress(elapsed)),
        scroll_indicator: ease_out(SCROLL_INDICATOR.progress(elapsed)),
    }
}

pub fn hero_duration() -> f64 {
    BIO.end().max(SCROLL_INDICATOR.end())
}

// entrance reveal
//
// sections reveal their children once the section top reaches a fraction of the
// viewport height ("top 80%"), and never hide them again
pub const ENTRANCE_START: f64 = 0.8;
pub const TIMELINE_ENTRANCE_START: f64 = 0.75;

// the experience timeline waits a little longer before sliding in
pub fn entrance_start(section: Section) -> f64 {
    match section {
        Section::Experience => TIMELINE_ENTRANCE_START,
        _ => ENTRANCE_START,
    }
}

pub fn entrance_triggered(section_top: f64, viewport_height: f64, start: f64) -> bool {
    section_top <= viewport_height * start
}

pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTS: HeroTexts<'static> = HeroTexts {
        greeting: "Hello, I'm",
        name: "Jane Doe",
        title: "Engineer",
        bio: "Builds things.",
    };

    #[test]
    fn typewriter_counts_characters() {
        assert_eq!(typewriter("abcd", 0.0), "");
        assert_eq!(typewriter("abcd", 0.5), "ab");
        assert_eq!(typewriter("abcd", 0.99), "abc");
        assert_eq!(typewriter("abcd", 1.0), "abcd");
        assert_eq!(typewriter("abcd", 7.0), "abcd");
    }

    #[test]
    fn typewriter_keeps_multibyte_text_whole() {
        let text = "مرحبًا";
        for step in 0..=20 {
            let shown = typewriter(text, step as f64 / 20.0);
            assert!(text.starts_with(shown));
        }
        assert_eq!(typewriter(text, 0.5).chars().count(), 3);
    }

    #[test]
    fn timeline_runs_in_order() {
        assert!(GREETING.start >= ORB_SEGMENTS[1].start);
        assert_eq!(NAME.start, GREETING.end());
        assert_eq!(TITLE.start, NAME.end());
        assert_eq!(UNDERLINE.start, TITLE.end());
        assert_eq!(BIO.start, UNDERLINE.end());
        assert!(SCROLL_INDICATOR.start < BIO.end());
    }

    #[test]
    fn hero_starts_blank() {
        let frame = hero_frame(&TEXTS, 0.0);

        assert_eq!(frame.greeting, "");
        assert_eq!(frame.name, "");
        assert_eq!(frame.bio, "");
        assert_eq!(frame.orbs, [0.0, 0.0]);
        assert_eq!(frame.scroll_indicator, 0.0);
    }

    #[test]
    fn hero_types_one_line_at_a_time() {
        let frame = hero_frame(&TEXTS, NAME.start + NAME.duration * 0.55);

        assert_eq!(frame.greeting, TEXTS.greeting);
        assert_eq!(frame.name, "Jane");
        assert_eq!(frame.title, "");
        assert_eq!(frame.underline, 0.0);
    }

    #[test]
    fn hero_ends_fully_written() {
        let frame = hero_frame(&TEXTS, hero_duration());

        assert_eq!(frame.greeting, TEXTS.greeting);
        assert_eq!(frame.name, TEXTS.name);
        assert_eq!(frame.title, TEXTS.title);
        assert_eq!(frame.bio, TEXTS.bio);
        assert_eq!(frame.underline, 1.0);
        assert_eq!(frame.scroll_indicator, 1.0);
        assert_eq!(frame.orbs, [1.0, 1.0]);
    }

    #[test]
    fn entrance_fires_at_eighty_percent() {
        assert!(!entrance_triggered(700.0, 800.0, ENTRANCE_START));
        assert!(entrance_triggered(600.0, 800.0, ENTRANCE_START));
        assert!(entrance_triggered(-300.0, 800.0, ENTRANCE_START));
        assert_eq!(stagger_delay(3, 0.1), 3.0 * 0.1);
    }

    #[test]
    fn timeline_section_starts_later() {
        assert_eq!(entrance_start(Section::Experience), TIMELINE_ENTRANCE_START);
        assert_eq!(entrance_start(Section::Skills), ENTRANCE_START);
        assert!(!entrance_triggered(620.0, 800.0, entrance_start(Section::Experience)));
    }
}
