/// Color pair applied to a panel and its action buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub panel: &'static str,
    pub button: &'static str,
}

const DEFAULT_THEME: Theme = Theme {
    panel: "bg-gray-200",
    button: "bg-gray-500",
};

/// Known backend flavors, each carrying its own color pair. Names the app
/// does not recognize render with the default pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Flask,
    Rust,
    Go,
    Other,
}

impl Backend {
    pub fn from_name(name: &str) -> Self {
        match name {
            "flask" => Self::Flask,
            "rust" => Self::Rust,
            "go" => Self::Go,
            _ => Self::Other,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Self::Flask => Theme {
                panel: "bg-slate-950",
                button: "bg-lime-700",
            },
            Self::Rust => Theme {
                panel: "bg-orange-950",
                button: "bg-orange-700",
            },
            Self::Go => Theme {
                panel: "bg-cyan-950",
                button: "bg-cyan-700",
            },
            Self::Other => DEFAULT_THEME,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Flask => "Flask",
            Self::Rust => "Rust",
            Self::Go => "Go",
            Self::Other => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_their_pair() {
        let theme = Backend::from_name("flask").theme();
        assert_eq!(theme.panel, "bg-slate-950");
        assert_eq!(theme.button, "bg-lime-700");
    }

    #[test]
    fn unrecognized_names_fall_back_to_the_default_pair() {
        for name in ["", "django", "FLASK"] {
            assert_eq!(Backend::from_name(name), Backend::Other);
            assert_eq!(Backend::from_name(name).theme(), DEFAULT_THEME);
        }
    }
}
