use crate::core::constants::ENVIRONMENT_COUNT;

/// Three-stop color ramp used to generate one texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub low: [f32; 3],
    pub high: [f32; 3],
    pub accent: [f32; 3],
}

/// A background/surface texture pairing. Textures are generated from the
/// palettes at start-up; `seed` picks the noise field they are built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub name: &'static str,
    pub sky: Palette,
    pub surface: Palette,
    pub seed: u64,
}

pub const ENVIRONMENTS: [Environment; ENVIRONMENT_COUNT] = [
    Environment {
        name: "Dusk",
        sky: Palette {
            low: [0.92, 0.55, 0.38],
            high: [0.10, 0.08, 0.25],
            accent: [0.98, 0.80, 0.62],
        },
        surface: Palette {
            low: [0.55, 0.22, 0.45],
            high: [0.98, 0.70, 0.52],
            accent: [1.00, 0.92, 0.80],
        },
        seed: 7,
    },
    Environment {
        name: "Glacier",
        sky: Palette {
            low: [0.78, 0.90, 0.96],
            high: [0.12, 0.30, 0.52],
            accent: [1.00, 1.00, 1.00],
        },
        surface: Palette {
            low: [0.20, 0.45, 0.70],
            high: [0.85, 0.95, 1.00],
            accent: [0.60, 0.85, 0.95],
        },
        seed: 19,
    },
    Environment {
        name: "Ember",
        sky: Palette {
            low: [0.35, 0.06, 0.04],
            high: [0.02, 0.01, 0.02],
            accent: [1.00, 0.45, 0.10],
        },
        surface: Palette {
            low: [0.10, 0.04, 0.03],
            high: [0.95, 0.35, 0.08],
            accent: [1.00, 0.85, 0.30],
        },
        seed: 31,
    },
];

/// Index of the current environment in a fixed-size set; moves wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvironmentCycle {
    index: usize,
    len: usize,
}

impl Default for EnvironmentCycle {
    fn default() -> Self {
        Self::new(ENVIRONMENT_COUNT)
    }
}

impl EnvironmentCycle {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn with_index(len: usize, index: usize) -> Self {
        let mut c = Self::new(len);
        c.index = index % c.len;
        c
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    pub fn environment(&self) -> &'static Environment {
        &ENVIRONMENTS[self.index % ENVIRONMENTS.len()]
    }
}
