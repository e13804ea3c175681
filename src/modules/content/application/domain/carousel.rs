/// Renderer-independent model of the auto-scrolling project strip.
///
/// The strip renders the project list twice back to back so that scrolling
/// past the first copy shows the start of the second. The offset therefore
/// wraps after one copy, which is half of the doubled track.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    offset: f64,
    copy_length: f64,
    speed: f64,
    paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Share of the viewport a manual scroll moves by.
const MANUAL_SCROLL_RATIO: f64 = 0.8;

impl Carousel {
    /// `doubled_length` is the full width of the rendered track (both copies);
    /// `speed` is the distance advanced per tick.
    pub fn new(doubled_length: f64, speed: f64) -> Self {
        Self {
            offset: 0.0,
            copy_length: (doubled_length / 2.0).max(0.0),
            speed,
            paused: false,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// One frame. Advances unless the pointer is over the strip.
    pub fn tick(&mut self) -> f64 {
        if !self.paused {
            self.offset = self.wrap(self.offset + self.speed);
        }
        self.offset
    }

    pub fn pointer_enter(&mut self) {
        self.paused = true;
    }

    pub fn pointer_leave(&mut self) {
        self.paused = false;
    }

    /// Arrow-button scroll: jumps most of a viewport, wrapping both ways.
    pub fn scroll_by(&mut self, direction: ScrollDirection, viewport_width: f64) -> f64 {
        let step = viewport_width * MANUAL_SCROLL_RATIO;
        let delta = match direction {
            ScrollDirection::Left => -step,
            ScrollDirection::Right => step,
        };
        self.offset = self.wrap(self.offset + delta);
        self.offset
    }

    /// Content changed size (projects added or removed).
    pub fn resize(&mut self, doubled_length: f64) {
        self.copy_length = (doubled_length / 2.0).max(0.0);
        self.offset = self.wrap(self.offset);
    }

    fn wrap(&self, offset: f64) -> f64 {
        if self.copy_length <= 0.0 {
            return 0.0;
        }
        offset.rem_euclid(self.copy_length)
    }
}
