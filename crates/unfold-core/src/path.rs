use glam::DVec2;
use std::fmt::Write;

/// Incremental writer for SVG path data.
///
/// Coordinates are written with the shortest round-trip representation, so
/// values that went through [`crate::math::round`] print with at most three
/// decimals.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    data: String,
}

impl PathBuilder {
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            data: String::with_capacity(bytes),
        }
    }

    pub fn move_to(&mut self, p: DVec2) {
        self.separator();
        _ = write!(self.data, "M {},{}", coord(p.x), coord(p.y));
    }

    pub fn quad_to(&mut self, ctrl: DVec2, to: DVec2) {
        self.separator();
        _ = write!(
            self.data,
            "Q {},{} {},{}",
            coord(ctrl.x),
            coord(ctrl.y),
            coord(to.x),
            coord(to.y)
        );
    }

    pub fn cubic_to(&mut self, c1: DVec2, c2: DVec2, to: DVec2) {
        self.separator();
        _ = write!(
            self.data,
            "C {},{} {},{} {},{}",
            coord(c1.x),
            coord(c1.y),
            coord(c2.x),
            coord(c2.y),
            coord(to.x),
            coord(to.y)
        );
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn finish(self) -> String {
        self.data
    }

    fn separator(&mut self) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
    }
}

// -0 prints as "-0"; collapse it so equal geometry yields equal strings.
#[inline]
fn coord(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Parse the absolute endpoints (`M`, `Q`, `C`) out of path data produced by
/// [`PathBuilder`]. Used to inspect generated threads.
pub fn endpoints(data: &str) -> Vec<DVec2> {
    let mut out = Vec::new();
    let mut tokens = data.split_whitespace().peekable();
    while let Some(cmd) = tokens.next() {
        let pairs = match cmd {
            "M" => 1,
            "Q" => 2,
            "C" => 3,
            _ => continue,
        };
        let mut last = None;
        for _ in 0..pairs {
            last = tokens.next().and_then(parse_pair);
        }
        if let Some(p) = last {
            out.push(p);
        }
    }
    out
}

fn parse_pair(token: &str) -> Option<DVec2> {
    let (x, y) = token.split_once(',')?;
    Some(DVec2::new(x.parse().ok()?, y.parse().ok()?))
}
