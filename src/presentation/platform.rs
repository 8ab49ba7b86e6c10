//! Terminal capabilities, resolved once at startup.

/// What the hosting terminal can do.
///
/// Built once in `main` and handed to the app; nothing else probes the
/// environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Mouse capture (clicks, motion, wheel)
    pub mouse: bool,
    /// Window title updates (`OSC 2`)
    pub window_title: bool,
    /// 24-bit color output
    pub truecolor: bool,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            mouse: true,
            window_title: true,
            truecolor: false,
        }
    }
}

impl Platform {
    /// Detect capabilities from the process environment.
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok())
    }

    /// Detect capabilities from an environment lookup.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let term = lookup("TERM").unwrap_or_default().to_ascii_lowercase();
        let dumb = term.is_empty() || term == "dumb";
        // The Linux VT has no title and ignores motion tracking.
        let console = term == "linux";

        let truecolor = match lookup("HPK_TRUECOLOR") {
            Some(force) => matches!(
                force.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ),
            None => {
                let colorterm = lookup("COLORTERM").unwrap_or_default().to_ascii_lowercase();
                colorterm.contains("truecolor")
                    || colorterm.contains("24bit")
                    || term.contains("direct")
                    || term.contains("truecolor")
            }
        };

        Self {
            mouse: !dumb,
            window_title: !dumb && !console,
            truecolor,
        }
    }

    #[must_use]
    pub const fn without_mouse(mut self) -> Self {
        self.mouse = false;
        self
    }
}
