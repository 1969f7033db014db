use crate::constants::DEFAULT_INTERACTIVE_SELECTORS;
use crate::core::fade::FadeParams;
use crate::core::render::InkStyle;
use std::time::Duration;

/// Everything page-specific the overlay can be tuned with.
///
/// - `fade`: hold and ramp timing for committed strokes
/// - `style`: ink colour, alpha and width
/// - `interactive_selectors`: CSS selectors for controls that keep
///   receiving clicks through the ink surface (an element matches when it or
///   an ancestor matches one of them)
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    pub fade: FadeParams,
    pub style: InkStyle,
    pub interactive_selectors: Vec<String>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            fade: FadeParams::default(),
            style: InkStyle::default(),
            interactive_selectors: DEFAULT_INTERACTIVE_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown overlay setting `{0}`")]
    UnknownKey(String),
    #[error("`{key}` expects a whole number of milliseconds, got `{value}`")]
    InvalidMillis { key: String, value: String },
    #[error("`{key}` expects {expected}, got `{value}`")]
    OutOfRange {
        key: String,
        value: String,
        expected: &'static str,
    },
    #[error("`ink-color` is not a CSS colour: {0}")]
    InvalidColor(#[from] csscolorparser::ParseColorError),
    #[error("`ink-interactive` needs at least one selector")]
    NoSelectors,
}

impl OverlayConfig {
    /// Keys accepted by [`OverlayConfig::apply_override`]; on the page they
    /// are spelled as `data-<key>` attributes on the canvas.
    pub const KEYS: &'static [&'static str] = &[
        "fade-delay-ms",
        "fade-duration-ms",
        "ink-color",
        "ink-width",
        "ink-alpha",
        "ink-interactive",
    ];

    /// Applies one textual override. On error the config is left unchanged.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "fade-delay-ms" => self.fade.delay = parse_millis(key, value)?,
            "fade-duration-ms" => self.fade.duration = parse_millis(key, value)?,
            "ink-color" => {
                let [r, g, b, _] = csscolorparser::parse(value)?.to_rgba8();
                self.style.rgb = [r, g, b];
            }
            "ink-width" => {
                self.style.line_width =
                    parse_f32_in(key, value, f32::MIN_POSITIVE, f32::MAX, "a positive width")?;
            }
            "ink-alpha" => {
                self.style.base_alpha = parse_f32_in(key, value, 0.0, 1.0, "a number in [0, 1]")?;
            }
            "ink-interactive" => {
                let selectors: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                if selectors.is_empty() {
                    return Err(ConfigError::NoSelectors);
                }
                self.interactive_selectors = selectors;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Applies every override, collecting the ones that were rejected.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Vec<ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        overrides
            .into_iter()
            .filter_map(|(key, value)| self.apply_override(key, value).err())
            .collect()
    }

    /// Selector list joined for `Element::closest`.
    pub fn interactive_selector(&self) -> String {
        self.interactive_selectors.join(", ")
    }
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidMillis {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn parse_f32_in(
    key: &str,
    value: &str,
    min: f32,
    max: f32,
    expected: &'static str,
) -> Result<f32, ConfigError> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() && (min..=max).contains(&v) => Ok(v),
        _ => Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            expected,
        }),
    }
}
