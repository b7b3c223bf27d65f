//! Which speakers an operation targets.

/// Word the HTTP API uses to mean "every speaker"
pub const ALL_SPEAKERS: &str = "all";

/// Target of a grouping, transport or volume operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakerSelection {
    /// Every cached speaker, in name order
    All,
    /// Speakers by alias or name, in the given order
    Named(Vec<String>),
}

impl SpeakerSelection {
    /// Interpret a list of names, where exactly `["all"]` means every speaker
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() == 1 && names[0] == ALL_SPEAKERS {
            SpeakerSelection::All
        } else {
            SpeakerSelection::Named(names)
        }
    }

    /// Interpret an optional single target, where absent or "all" means every speaker
    pub fn from_target(target: Option<&str>) -> Self {
        match target {
            None | Some(ALL_SPEAKERS) => SpeakerSelection::All,
            Some(name) => SpeakerSelection::Named(vec![name.to_string()]),
        }
    }

    pub fn one(name: impl Into<String>) -> Self {
        SpeakerSelection::Named(vec![name.into()])
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SpeakerSelection::All)
    }
}
