use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Navigate,      // Browse and copy
    FilePrompt,    // Typing a local file path
    UrlPrompt,     // Typing a spreadsheet URL
    ConfirmClear,  // Waiting for y/n
    Alert,         // Blocking message, any key dismisses
}

impl Mode {
    pub fn is_prompt(self) -> bool {
        matches!(self, Mode::FilePrompt | Mode::UrlPrompt)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Navigate => write!(f, "NAVIGATE"),
            Mode::FilePrompt => write!(f, "FILE"),
            Mode::UrlPrompt => write!(f, "URL"),
            Mode::ConfirmClear => write!(f, "CONFIRM"),
            Mode::Alert => write!(f, "ALERT"),
        }
    }
}
