//! Button presses captured by the view and forwarded to registered listeners.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPress {
    Click,
    Reset,
}

impl ButtonPress {
    pub fn label(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Reset => "reset",
        }
    }
}
