// ABOUTME: Handlebars helper functions for listing templates
// ABOUTME: Implements the decimal, tip and elapsed presentation helpers and their registration

use handlebars::{
    html_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

use super::error::TemplateError;
use super::humanize::TimeHumanizer;

/// Placement keywords understood by the hint stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl TipPosition {
    pub const ALL: [TipPosition; 8] = [
        TipPosition::Top,
        TipPosition::Bottom,
        TipPosition::Left,
        TipPosition::Right,
        TipPosition::TopLeft,
        TipPosition::TopRight,
        TipPosition::BottomLeft,
        TipPosition::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TipPosition::Top => "top",
            TipPosition::Bottom => "bottom",
            TipPosition::Left => "left",
            TipPosition::Right => "right",
            TipPosition::TopLeft => "top-left",
            TipPosition::TopRight => "top-right",
            TipPosition::BottomLeft => "bottom-left",
            TipPosition::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for TipPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipPosition {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TipPosition::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| TemplateError::InvalidPosition(s.to_string()))
    }
}

/// Format a number with exactly two digits after the decimal point.
///
/// Exact ties round half-to-even; values such as 2.005 that are stored just
/// below the tie round down. Negative zero renders as `0.00`. Non-finite
/// input yields `NaN`, `Infinity` or `-Infinity`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        // -0.0 + 0.0 is +0.0
        format!("{:.2}", value + 0.0)
    }
}

/// Build the tooltip icon markup. The tip text is HTML escaped.
pub fn tip_markup(position: TipPosition, tip: &str) -> String {
    format!(
        "<span class=\"sl-hint hint--{} hint--bounce\" data-hint=\"{}\"><i class=\"fa fa-question-circle\"></i></span>",
        position,
        html_escape(tip)
    )
}

/// Read a parameter as a number, accepting numeric strings
fn numeric_param(h: &Helper, index: usize) -> Option<f64> {
    let value = h.param(index)?.value();
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Decimal helper - `{{decimal price}}` renders the value with two decimals
pub fn decimal_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let formatted = match numeric_param(h, 0) {
        Some(value) => format_decimal(value),
        None => {
            debug!("decimal helper received a non-numeric value");
            format_decimal(f64::NAN)
        }
    };

    out.write(&formatted)?;
    Ok(())
}

/// Tip helper - `{{tip "top" "Price per square inch"}}` renders a hint icon
#[derive(Debug, Clone, Copy, Default)]
pub struct TipHelper {
    default_position: TipPosition,
}

impl TipHelper {
    pub fn new(default_position: TipPosition) -> Self {
        Self { default_position }
    }

    fn position(&self, h: &Helper) -> TipPosition {
        match h.param(0).map(|v| v.value()) {
            Some(JsonValue::String(s)) => match TipPosition::from_str(s) {
                Ok(position) => position,
                Err(e) => {
                    warn!("{}, using '{}'", e, self.default_position);
                    self.default_position
                }
            },
            Some(other) if !other.is_null() => {
                warn!(
                    "tip helper position must be a string, got {}, using '{}'",
                    other, self.default_position
                );
                self.default_position
            }
            _ => {
                warn!(
                    "tip helper called without a position, using '{}'",
                    self.default_position
                );
                self.default_position
            }
        }
    }
}

impl HelperDef for TipHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let position = self.position(h);
        let tip = match h.param(1).map(|v| v.value()) {
            Some(JsonValue::String(s)) => s.clone(),
            Some(JsonValue::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        out.write(&tip_markup(position, &tip))?;
        Ok(())
    }
}

/// Elapsed helper - `{{elapsed updated}}` renders a seconds timestamp as relative time
#[derive(Clone)]
pub struct ElapsedHelper {
    humanizer: Arc<dyn TimeHumanizer>,
}

impl ElapsedHelper {
    pub fn new(humanizer: Arc<dyn TimeHumanizer>) -> Self {
        Self { humanizer }
    }
}

impl HelperDef for ElapsedHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        match numeric_param(h, 0) {
            Some(stamp) => out.write(&self.humanizer.humanize(stamp * 1000.0))?,
            None => debug!("elapsed helper received a non-numeric timestamp"),
        }
        Ok(())
    }
}

/// Register the listing helpers with a Handlebars instance
pub fn register_helpers(
    handlebars: &mut Handlebars,
    humanizer: Arc<dyn TimeHumanizer>,
    default_position: TipPosition,
) {
    handlebars.register_helper("decimal", Box::new(decimal_helper));
    handlebars.register_helper("tip", Box::new(TipHelper::new(default_position)));
    handlebars.register_helper("elapsed", Box::new(ElapsedHelper::new(humanizer)));
    debug!("Registered decimal, tip and elapsed helpers");
}
