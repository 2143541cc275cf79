use crate::core::fractals::errors::UnknownFractalError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Tricorn,
    BurningShip,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Tricorn, Self::BurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Tricorn => "Tricorn",
            Self::BurningShip => "Burning Ship",
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKinds {
    type Err = UnknownFractalError;

    /// Accepts display names case-insensitively, ignoring spaces, dashes and
    /// underscores, so "Burning Ship", "burning-ship" and "burning_ship" all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalise = |name: &str| -> String {
            name.chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_'))
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = normalise(s);

        Self::ALL
            .iter()
            .copied()
            .find(|kind| normalise(kind.display_name()) == wanted)
            .ok_or_else(|| UnknownFractalError { name: s.to_owned() })
    }
}
