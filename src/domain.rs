use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_TASK_TITLE: &str = "New task";
pub const DEFAULT_LISTING_TITLE: &str = "New listing";
pub const DEFAULT_MINUTES: u64 = 60;

const MINUTE: u64 = 60;
const HOUR: u64 = MINUTE * 60;

/// Fixed palette a task or listing can be tinted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    Red,
    Orange,
    Yellow,
    Green,
    #[default]
    Cyan,
    Blue,
    Purple,
    Brown,
    Gray,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 9] = [
        PaletteColor::Red,
        PaletteColor::Orange,
        PaletteColor::Yellow,
        PaletteColor::Green,
        PaletteColor::Cyan,
        PaletteColor::Blue,
        PaletteColor::Purple,
        PaletteColor::Brown,
        PaletteColor::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Orange => "orange",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Green => "green",
            PaletteColor::Cyan => "cyan",
            PaletteColor::Blue => "blue",
            PaletteColor::Purple => "purple",
            PaletteColor::Brown => "brown",
            PaletteColor::Gray => "gray",
        }
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|color| *color == self)
            .unwrap_or_default()
    }

    /// Steps through the palette, wrapping at either end.
    pub fn cycle(self, delta: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let next = (self.position() as i32 + delta).rem_euclid(len);
        Self::ALL[next as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskControl {
    Start,
    Pause,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub index: usize,
    pub title: String,
    pub color: PaletteColor,
    /// Seconds.
    pub duration: u64,
    /// Elapsed seconds, never above `duration`.
    pub progress: u64,
    pub active: bool,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        self.progress == self.duration
    }

    pub fn control(&self) -> TaskControl {
        if self.is_complete() {
            TaskControl::Done
        } else if self.active {
            TaskControl::Pause
        } else {
            TaskControl::Start
        }
    }

    pub fn progress_ratio(&self) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        self.progress as f64 / self.duration as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub index: usize,
    pub title: String,
    pub color: PaletteColor,
    pub complete: bool,
}

/// Working copy of the fields being created or configured in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub index: usize,
    pub title: String,
    pub duration_text: String,
    pub color: PaletteColor,
}

impl Draft {
    pub fn new(color: PaletteColor) -> Self {
        Self {
            index: 0,
            title: String::new(),
            duration_text: String::new(),
            color,
        }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            index: task.index,
            title: task.title.clone(),
            duration_text: (task.duration / MINUTE).to_string(),
            color: task.color,
        }
    }

    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            index: listing.index,
            title: listing.title.clone(),
            duration_text: String::new(),
            color: listing.color,
        }
    }

    /// Only ASCII digits make it into the duration text.
    pub fn push_duration_char(&mut self, value: char) -> bool {
        if value.is_ascii_digit() {
            self.duration_text.push(value);
            true
        } else {
            false
        }
    }

    pub fn title_or(&self, fallback: &str) -> String {
        if self.title.is_empty() {
            fallback.to_string()
        } else {
            self.title.clone()
        }
    }
}

/// Parses minutes typed by the user, substituting `default_minutes` when the
/// text is empty or not a number.
pub fn parse_minutes(text: &str, default_minutes: u64) -> u64 {
    if text.is_empty() {
        return default_minutes;
    }

    match text.parse::<u64>() {
        Ok(minutes) => minutes,
        Err(err) => {
            warn!(input = text, %err, default_minutes, "invalid duration entry, using default");
            default_minutes
        }
    }
}

pub fn minutes_to_seconds(minutes: u64) -> u64 {
    minutes.saturating_mul(MINUTE)
}

/// Renders elapsed seconds as `1h 2m 3s`. Hours appear from one hour up, minutes
/// whenever the remainder after hours is non-zero, seconds only on request.
pub fn format_time(seconds: u64, include_seconds: bool) -> String {
    if seconds == 0 {
        return "0m".to_string();
    }

    let hours = if seconds >= HOUR {
        format!("{}h ", seconds / HOUR)
    } else {
        String::new()
    };
    let minutes = if seconds % HOUR > 0 {
        format!("{}m ", seconds % HOUR / MINUTE)
    } else {
        String::new()
    };
    let secs = if include_seconds {
        format!("{}s", seconds % MINUTE)
    } else {
        String::new()
    };
    format!("{hours}{minutes}{secs}")
}

#[cfg(test)]
mod tests {
    use super::{Draft, PaletteColor, Task, TaskControl, format_time, parse_minutes};

    fn task(duration: u64, progress: u64, active: bool) -> Task {
        Task {
            index: 0,
            title: "Read".to_string(),
            color: PaletteColor::Blue,
            duration,
            progress,
            active,
        }
    }

    #[test]
    fn formats_elapsed_time() {
        assert_eq!(format_time(0, true), "0m");
        assert_eq!(format_time(0, false), "0m");
        assert_eq!(format_time(90, true), "1m 30s");
        assert_eq!(format_time(3661, true), "1h 1m 1s");
        assert_eq!(format_time(120, false), "2m ");
        assert_eq!(format_time(3600, false), "1h ");
        assert_eq!(format_time(7200, true), "2h 0s");
    }

    #[test]
    fn parses_minutes_with_fallback() {
        assert_eq!(parse_minutes("", 60), 60);
        assert_eq!(parse_minutes("25", 60), 25);
        assert_eq!(parse_minutes("99999999999999999999999", 60), 60);
        assert_eq!(parse_minutes("abc", 45), 45);
    }

    #[test]
    fn duration_entry_accepts_digits_only() {
        let mut draft = Draft::new(PaletteColor::Cyan);
        for value in "1a5-".chars() {
            draft.push_duration_char(value);
        }
        assert_eq!(draft.duration_text, "15");
    }

    #[test]
    fn draft_from_task_uses_minutes() {
        let mut source = task(1500, 30, true);
        source.index = 2;
        let draft = Draft::from_task(&source);
        assert_eq!(draft.index, 2);
        assert_eq!(draft.duration_text, "25");
        assert_eq!(draft.title, "Read");
        assert_eq!(draft.color, PaletteColor::Blue);
    }

    #[test]
    fn control_reflects_state() {
        assert_eq!(task(60, 0, false).control(), TaskControl::Start);
        assert_eq!(task(60, 10, true).control(), TaskControl::Pause);
        assert_eq!(task(60, 60, true).control(), TaskControl::Done);
    }

    #[test]
    fn palette_cycles_with_wraparound() {
        assert_eq!(PaletteColor::Red.cycle(-1), PaletteColor::Gray);
        assert_eq!(PaletteColor::Gray.cycle(1), PaletteColor::Red);
        assert_eq!(PaletteColor::Cyan.cycle(2), PaletteColor::Purple);
    }
}
