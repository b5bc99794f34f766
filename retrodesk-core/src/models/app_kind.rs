use crate::errors::DeskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of applications the desktop can present. An instance of
/// one of these is at most a single open window at a time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    AboutMe,
    Blog,
    Terminal,
    Calculator,
    Notepad,
    Browser,
    MediaPlayer,
}

impl AppKind {
    /// All kinds, in the order the dock lists them.
    pub const ALL: [Self; 7] = [
        Self::AboutMe,
        Self::Blog,
        Self::Terminal,
        Self::Calculator,
        Self::Notepad,
        Self::Browser,
        Self::MediaPlayer,
    ];

    /// The title a window gets when the caller did not pick one.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::AboutMe => "About Me",
            Self::Blog => "Blog",
            Self::Terminal => "Terminal",
            Self::Calculator => "Calculator",
            Self::Notepad => "Notepad",
            Self::Browser => "Internet Browser",
            Self::MediaPlayer => "QuickTime Player",
        }
    }

    /// Slot in the fixed mobile stacking order. Distinct per kind so the
    /// mobile layout never lands two windows at the same offset.
    #[must_use]
    pub const fn stack_slot(self) -> i32 {
        match self {
            Self::AboutMe => 0,
            Self::Blog => 1,
            Self::Terminal => 2,
            Self::Calculator => 3,
            Self::Notepad => 4,
            Self::Browser => 5,
            Self::MediaPlayer => 6,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AboutMe => "aboutme",
            Self::Blog => "blog",
            Self::Terminal => "terminal",
            Self::Calculator => "calculator",
            Self::Notepad => "notepad",
            Self::Browser => "browser",
            Self::MediaPlayer => "mediaplayer",
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AppKind {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aboutme" => Ok(Self::AboutMe),
            "blog" => Ok(Self::Blog),
            "terminal" => Ok(Self::Terminal),
            "calculator" => Ok(Self::Calculator),
            "notepad" => Ok(Self::Notepad),
            "browser" => Ok(Self::Browser),
            "mediaplayer" => Ok(Self::MediaPlayer),
            _ => Err(DeskError::UnknownAppKind(s.to_string())),
        }
    }
}
