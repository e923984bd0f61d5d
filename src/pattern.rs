use rgb::RGB8;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single control flag a stitch may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StitchFlag {
    Normal,
    Jump,
    Trim,
    Stop,
    End,
}

/// The set of control flags on a stitch. An empty set is a normal stitch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<StitchFlag>", into = "Vec<StitchFlag>")]
pub struct StitchFlags {
    jump: bool,
    trim: bool,
    stop: bool,
    end: bool,
}

impl StitchFlags {
    pub const fn normal() -> Self {
        Self {
            jump: false,
            trim: false,
            stop: false,
            end: false,
        }
    }

    pub const fn jump() -> Self {
        Self::normal().with(StitchFlag::Jump)
    }

    pub const fn trim() -> Self {
        Self::normal().with(StitchFlag::Trim)
    }

    pub const fn stop() -> Self {
        Self::normal().with(StitchFlag::Stop)
    }

    pub const fn end() -> Self {
        Self::normal().with(StitchFlag::End)
    }

    /// Adds `flag` to the set. Adding `Normal` is a no-op.
    pub const fn with(mut self, flag: StitchFlag) -> Self {
        match flag {
            StitchFlag::Normal => {}
            StitchFlag::Jump => self.jump = true,
            StitchFlag::Trim => self.trim = true,
            StitchFlag::Stop => self.stop = true,
            StitchFlag::End => self.end = true,
        }
        self
    }

    pub const fn contains(self, flag: StitchFlag) -> bool {
        match flag {
            StitchFlag::Normal => self.is_normal(),
            StitchFlag::Jump => self.jump,
            StitchFlag::Trim => self.trim,
            StitchFlag::Stop => self.stop,
            StitchFlag::End => self.end,
        }
    }

    pub const fn is_normal(self) -> bool {
        !(self.jump || self.trim || self.stop || self.end)
    }

    /// Needle moves without laying thread (JUMP or TRIM).
    pub const fn is_travel(self) -> bool {
        self.jump || self.trim
    }

    /// Closes the current colour block (STOP or END).
    pub const fn is_boundary(self) -> bool {
        self.stop || self.end
    }

    /// Nothing after this stitch is part of the pattern.
    pub const fn is_terminal(self) -> bool {
        self.end
    }
}

impl From<Vec<StitchFlag>> for StitchFlags {
    fn from(flags: Vec<StitchFlag>) -> Self {
        flags
            .into_iter()
            .fold(StitchFlags::normal(), |set, flag| set.with(flag))
    }
}

impl From<StitchFlags> for Vec<StitchFlag> {
    fn from(set: StitchFlags) -> Self {
        [
            StitchFlag::Jump,
            StitchFlag::Trim,
            StitchFlag::Stop,
            StitchFlag::End,
        ]
        .into_iter()
        .filter(|&flag| set.contains(flag))
        .collect()
    }
}

/// One recorded needle position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stitch {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub flags: StitchFlags,
    /// Index into the pattern's thread table. Not guaranteed to be valid.
    #[serde(default)]
    pub color: i32,
}

impl Stitch {
    pub const fn new(x: f64, y: f64, flags: StitchFlags, color: i32) -> Self {
        Self { x, y, flags, color }
    }

    pub const fn normal(x: f64, y: f64, color: i32) -> Self {
        Self::new(x, y, StitchFlags::normal(), color)
    }

    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub color: RGB8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_number: Option<String>,
}

impl Thread {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: RGB8 { r, g, b },
            description: None,
            catalog_number: None,
        }
    }
}

/// A decoded embroidery design: stitches in sewing order plus the thread table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub stitches: Vec<Stitch>,
    #[serde(default)]
    pub threads: Vec<Thread>,
}

impl Pattern {
    pub fn new(stitches: Vec<Stitch>, threads: Vec<Thread>) -> Self {
        Self { stitches, threads }
    }

    /// Looks up a thread colour, returning `None` for any index outside the table.
    pub fn thread_color(&self, index: i32) -> Option<RGB8> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.threads.get(i))
            .map(|thread| thread.color)
    }
}

#[cfg(test)]
mod tests {
    include!("pattern_tests.rs");
}
