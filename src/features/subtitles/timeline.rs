//! Subtitle timeline lookup

/// Text published when no entry covers the current time
pub const DEFAULT_SUBTITLE: &str = "no active subtitle";

/// A single timed subtitle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubtitleEntry {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds (inclusive)
    pub end: f64,
    /// Display text, multi-line sources joined with spaces
    pub text: String,
}

impl SubtitleEntry {
    /// Whether `time` falls inside `[start, end]`
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }
}

/// Ordered, immutable list of subtitle entries
///
/// Entries are kept in source order and may overlap; the first match wins.
#[derive(Debug, Clone, Default)]
pub struct SubtitleTimeline {
    entries: Vec<SubtitleEntry>,
}

impl SubtitleTimeline {
    pub fn new(entries: Vec<SubtitleEntry>) -> Self {
        Self { entries }
    }

    /// Swap in a whole new entry list
    pub fn replace(&mut self, entries: Vec<SubtitleEntry>) {
        tracing::info!("Subtitle timeline replaced: {} entries", entries.len());
        self.entries = entries;
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first entry covering `time`, in list order
    pub fn find(&self, time: f64) -> Option<&SubtitleEntry> {
        self.entries.iter().find(|entry| entry.contains(time))
    }

    /// Text to display at `time`, or [`DEFAULT_SUBTITLE`]
    pub fn lookup(&self, time: f64) -> &str {
        self.find(time)
            .map(|entry| entry.text.as_str())
            .unwrap_or(DEFAULT_SUBTITLE)
    }
}
