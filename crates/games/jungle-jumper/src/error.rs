/// Setup-time configuration failures.
///
/// Everything here is detected while building a level from its
/// configuration. Once a level exists, updates and resets cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An animation key has no frames.
    EmptyAnimation { entity: &'static str, key: String },
    /// A configured rectangle has a non-positive width or height.
    InvalidRect {
        what: String,
        width: f32,
        height: f32,
    },
    /// An enemy's patrol start lies to the right of its end.
    InvalidPatrol { start_x: f32, end_x: f32 },
    /// The configuration text could not be parsed.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAnimation { entity, key } => {
                write!(f, "{entity} animation {key} has no frames")
            },
            Self::InvalidRect {
                what,
                width,
                height,
            } => write!(f, "{what} must have positive size, got {width}x{height}"),
            Self::InvalidPatrol { start_x, end_x } => {
                write!(f, "patrol start {start_x} is right of patrol end {end_x}")
            },
            Self::Parse(m) => write!(f, "invalid config: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {}
