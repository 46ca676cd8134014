// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use gax::validation::{self, Errors};
use serde::{Deserialize, Deserializer, Serialize};
use serde::de::Error as _;

/// The staging network.
pub const NETWORK_STAGING: &str = "staging";

/// The production network.
pub const NETWORK_PRODUCTION: &str = "production";

const NETWORKS: &[&str] = &[NETWORK_STAGING, NETWORK_PRODUCTION];

const MIN_ROLLOUT_DURATION: i64 = 3600;
const MAX_ROLLOUT_DURATION: i64 = 604800;

const VARIABLE_TYPES: &[&str] = &[
    "bool",
    "number",
    "url",
    "color",
    "gravity",
    "placement",
    "scaleDimension",
    "grayscaleType",
    "aspectRatio",
    "resizeType",
    "dimension",
    "perceptualQuality",
    "string",
    "focus",
];

const PERCEPTUAL_QUALITIES: &[&str] = &["high", "mediumHigh", "medium", "mediumLow", "low"];

fn policy_errors(policy_id: &str, network: &str, contract_id: &str, policy_set_id: &str) -> Errors {
    Errors::new()
        .field("PolicyID", validation::path_segment(policy_id))
        .field("Network", validation::one_of(network, NETWORKS))
        .field("ContractID", validation::required_str(contract_id))
        .field("PolicySetID", validation::required_str(policy_set_id))
}

fn each<T, F>(values: &[T], f: F) -> Result<(), Errors>
where
    F: Fn(&T) -> Result<(), Errors>,
{
    values
        .iter()
        .enumerate()
        .fold(Errors::new(), |errors, (i, v)| errors.nested(i.to_string(), f(v)))
        .into_result()
}

/// A value that is either a literal or a reference to a policy variable.
///
/// Variables are referenced by name, the service serializes the reference as
/// `{"var": "name"}`.
///
/// # Example
/// ```
/// # use edgegrid_imaging_v2::model::VariableInline;
/// let literal = VariableInline::Value(90_i64);
/// assert_eq!(serde_json::to_value(&literal)?, serde_json::json!(90));
/// let reference = VariableInline::<i64>::var("quality");
/// assert_eq!(serde_json::to_value(&reference)?, serde_json::json!({"var": "quality"}));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VariableInline<T> {
    /// A literal value.
    Value(T),
    /// A reference to a variable defined in the policy.
    Var {
        /// The name of the variable.
        var: String,
    },
}

impl<T> VariableInline<T> {
    /// Creates a reference to the variable `name`.
    pub fn var<V: Into<String>>(name: V) -> Self {
        Self::Var { var: name.into() }
    }

    /// The literal value, if this is not a variable reference.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Var { .. } => None,
        }
    }
}

impl<T> From<T> for VariableInline<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// An integer literal or a variable reference.
pub type IntegerVariableInline = VariableInline<i64>;

/// A number literal or a variable reference.
pub type NumberVariableInline = VariableInline<f64>;

/// A string literal or a variable reference.
pub type StringVariableInline = VariableInline<String>;

/// A boolean literal or a variable reference.
pub type BooleanVariableInline = VariableInline<bool>;

fn literal_one_of(value: &Option<StringVariableInline>, allowed: &[&str]) -> Option<String> {
    value
        .as_ref()
        .and_then(VariableInline::value)
        .and_then(|v| validation::one_of(v, allowed))
}

fn literal_in_range<T>(value: &Option<VariableInline<T>>, min: T, max: T) -> Option<String>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    let value = value.as_ref().and_then(VariableInline::value).copied();
    validation::in_range(value, min, max)
}

/// The image widths that the policy generates derivative images for.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Breakpoints {
    pub widths: Option<Vec<i64>>,
}

impl Breakpoints {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [widths][crate::model::Breakpoints::widths].
    pub fn set_widths<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<i64>,
    {
        use std::iter::Iterator;
        self.widths = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        let widths = self.widths.as_deref().unwrap_or_default();
        Errors::new()
            .field("Widths", validation::each_in_range(widths, 1, 8192))
            .into_result()
    }
}

/// A variable that can be referenced by transformations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Variable {
    /// The name of the variable, also used in query parameters.
    pub name: String,
    /// The type of the variable, e.g. `number` or `gravity`.
    #[serde(rename = "type")]
    pub r#type: String,
    /// The value used when the request does not override the variable.
    pub default_value: String,
    pub enum_options: Option<Vec<EnumOption>>,
    pub postfix: Option<String>,
    pub prefix: Option<String>,
}

impl Variable {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Variable::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [type][crate::model::Variable::r#type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [default_value][crate::model::Variable::default_value].
    pub fn set_default_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.default_value = v.into();
        self
    }

    /// Sets the value of [enum_options][crate::model::Variable::enum_options].
    pub fn set_enum_options<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnumOption>,
    {
        use std::iter::Iterator;
        self.enum_options = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [postfix][crate::model::Variable::postfix].
    pub fn set_postfix<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.postfix = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [prefix][crate::model::Variable::prefix].
    pub fn set_prefix<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.prefix = std::option::Option::Some(v.into());
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("Name", validation::required_str(&self.name))
            .field("Type", validation::one_of(&self.r#type, VARIABLE_TYPES))
            .field("DefaultValue", validation::required_str(&self.default_value))
            .into_result()
    }
}

/// One of the values allowed for an enumerated [Variable].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EnumOption {
    pub id: String,
    pub value: String,
}

impl EnumOption {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::EnumOption::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [value][crate::model::EnumOption::value].
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = v.into();
        self
    }
}

/// The output settings of an image policy.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OutputImage {
    /// The quality of derivative images served over slow connections.
    pub adaptive_quality: Option<i64>,
    /// The formats the policy can output, e.g. `webp` or `avif`.
    pub allowed_formats: Option<Vec<String>>,
    /// The formats the policy always outputs.
    pub forced_formats: Option<Vec<String>>,
    pub perceptual_quality: Option<StringVariableInline>,
    pub quality: Option<IntegerVariableInline>,
}

impl OutputImage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [adaptive_quality][crate::model::OutputImage::adaptive_quality].
    pub fn set_adaptive_quality<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.adaptive_quality = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [allowed_formats][crate::model::OutputImage::allowed_formats].
    pub fn set_allowed_formats<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.allowed_formats = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [forced_formats][crate::model::OutputImage::forced_formats].
    pub fn set_forced_formats<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.forced_formats = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [perceptual_quality][crate::model::OutputImage::perceptual_quality].
    pub fn set_perceptual_quality<T: std::convert::Into<crate::model::StringVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.perceptual_quality = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [quality][crate::model::OutputImage::quality].
    pub fn set_quality<T: std::convert::Into<crate::model::IntegerVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.quality = std::option::Option::Some(v.into());
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("AdaptiveQuality", validation::in_range(self.adaptive_quality, 1, 100))
            .field(
                "PerceptualQuality",
                literal_one_of(&self.perceptual_quality, PERCEPTUAL_QUALITIES),
            )
            .field("Quality", literal_in_range(&self.quality, 1, 100))
            .into_result()
    }
}

/// The output settings of a video policy.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OutputVideo {
    pub perceptual_quality: Option<StringVariableInline>,
    /// The video served while the derivative is being generated.
    pub placeholder_video_url: Option<StringVariableInline>,
    pub video_adaptive_quality: Option<StringVariableInline>,
}

impl OutputVideo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [perceptual_quality][crate::model::OutputVideo::perceptual_quality].
    pub fn set_perceptual_quality<T: std::convert::Into<crate::model::StringVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.perceptual_quality = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [placeholder_video_url][crate::model::OutputVideo::placeholder_video_url].
    pub fn set_placeholder_video_url<T: std::convert::Into<crate::model::StringVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.placeholder_video_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [video_adaptive_quality][crate::model::OutputVideo::video_adaptive_quality].
    pub fn set_video_adaptive_quality<T: std::convert::Into<crate::model::StringVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.video_adaptive_quality = std::option::Option::Some(v.into());
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field(
                "PerceptualQuality",
                literal_one_of(&self.perceptual_quality, PERCEPTUAL_QUALITIES),
            )
            .into_result()
    }
}

/// An image transformation.
///
/// The service identifies each transformation by its `transformation` field.
///
/// # Example
/// ```
/// # use edgegrid_imaging_v2::model::{IntegerVariableInline, Resize, Transformation};
/// let resize = Transformation::Resize(
///     Resize::new()
///         .set_width(IntegerVariableInline::var("width"))
///         .set_height(320_i64),
/// );
/// assert_eq!(
///     serde_json::to_value(&resize)?,
///     serde_json::json!({"transformation": "Resize", "width": {"var": "width"}, "height": 320})
/// );
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "transformation")]
#[non_exhaustive]
pub enum Transformation {
    Blur(Blur),
    Contrast(Contrast),
    Crop(Crop),
    Grayscale(Grayscale),
    MaxColors(MaxColors),
    Resize(Resize),
    Rotate(Rotate),
    Trim(Trim),
}

impl Transformation {
    pub fn validate(&self) -> Result<(), Errors> {
        let errors = match self {
            Self::Blur(t) => Errors::new().field("Sigma", literal_in_range(&t.sigma, 0.0, 500.0)),
            Self::Contrast(t) => Errors::new()
                .field("Brightness", literal_in_range(&t.brightness, -1.0, 1.0))
                .field("Contrast", literal_in_range(&t.contrast, -1.0, 1.0)),
            Self::Crop(t) => Errors::new()
                .field("Width", validation::required_some(&t.width))
                .field("Height", validation::required_some(&t.height)),
            Self::Grayscale(t) => Errors::new().field(
                "Type",
                literal_one_of(&t.r#type, &["Rec601", "Rec709", "Brightness", "Lightness"]),
            ),
            Self::MaxColors(t) => {
                Errors::new().field("Colors", literal_in_range(&t.colors, 2, 256))
            }
            Self::Resize(t) => Errors::new()
                .field("Aspect", literal_one_of(&t.aspect, &["fit", "fill", "ignore"]))
                .field("Type", literal_one_of(&t.r#type, &["normal", "upsize", "downsize"])),
            Self::Rotate(t) => Errors::new().field("Degrees", literal_in_range(&t.degrees, 0.0, 360.0)),
            Self::Trim(t) => Errors::new().field("Fuzz", literal_in_range(&t.fuzz, 0.0, 1.0)),
        };
        errors.into_result()
    }
}

/// Applies a Gaussian blur.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Blur {
    pub sigma: Option<NumberVariableInline>,
}

impl Blur {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [sigma][crate::model::Blur::sigma].
    pub fn set_sigma<T: std::convert::Into<crate::model::NumberVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.sigma = std::option::Option::Some(v.into());
        self
    }
}

/// Adjusts brightness and contrast.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Contrast {
    pub brightness: Option<NumberVariableInline>,
    pub contrast: Option<NumberVariableInline>,
}

impl Contrast {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [brightness][crate::model::Contrast::brightness].
    pub fn set_brightness<T: std::convert::Into<crate::model::NumberVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.brightness = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [contrast][crate::model::Contrast::contrast].
    pub fn set_contrast<T: std::convert::Into<crate::model::NumberVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.contrast = std::option::Option::Some(v.into());
        self
    }
}

/// Crops the image to a region.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Crop {
    pub width: Option<IntegerVariableInline>,
    pub height: Option<IntegerVariableInline>,
    pub x_position: Option<IntegerVariableInline>,
    pub y_position: Option<IntegerVariableInline>,
    pub gravity: Option<StringVariableInline>,
    pub allow_expansion: Option<BooleanVariableInline>,
}

impl Crop {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [width][crate::model::Crop::width].
    pub fn set_width<T: std::convert::Into<crate::model::IntegerVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.width = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [height][crate::model::Crop::height].
    pub fn set_height<T: std::convert::Into<crate::model::IntegerVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.height = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [x_position][crate::model::Crop::x_position].
    pub fn set_x_position<T: std::convert::Into<crate::model::IntegerVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.x_position = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [y_position][crate::model::Crop::y_position].
    pub fn set_y_position<T: std::convert::Into<crate::model::IntegerVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.y_position = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [gravity][crate::model::Crop::gravity].
    pub fn set_gravity<T: std::convert::Into<crate::model::StringVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.gravity = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [allow_expansion][crate::model::Crop::allow_expansion].
    pub fn set_allow_expansion<T: std::convert::Into<crate::model::BooleanVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.allow_expansion = std::option::Option::Some(v.into());
        self
    }
}

/// Removes the color from the image.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Grayscale {
    #[serde(rename = "type")]
    pub r#type: Option<StringVariableInline>,
}

impl Grayscale {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][crate::model::Grayscale::r#type].
    pub fn set_type<T: std::convert::Into<crate::model::StringVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }
}

/// Limits the number of colors in the palette.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MaxColors {
    pub colors: Option<IntegerVariableInline>,
}

impl MaxColors {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [colors][crate::model::MaxColors::colors].
    pub fn set_colors<T: std::convert::Into<crate::model::IntegerVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.colors = std::option::Option::Some(v.into());
        self
    }
}

/// Resizes the image.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Resize {
    /// One of `fit`, `fill` or `ignore`.
    pub aspect: Option<StringVariableInline>,
    pub width: Option<IntegerVariableInline>,
    pub height: Option<IntegerVariableInline>,
    /// One of `normal`, `upsize` or `downsize`.
    #[serde(rename = "type")]
    pub r#type: Option<StringVariableInline>,
}

impl Resize {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [aspect][crate::model::Resize::aspect].
    pub fn set_aspect<T: std::convert::Into<crate::model::StringVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.aspect = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [width][crate::model::Resize::width].
    pub fn set_width<T: std::convert::Into<crate::model::IntegerVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.width = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [height][crate::model::Resize::height].
    pub fn set_height<T: std::convert::Into<crate::model::IntegerVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.height = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::Resize::r#type].
    pub fn set_type<T: std::convert::Into<crate::model::StringVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }
}

/// Rotates the image.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Rotate {
    pub degrees: Option<NumberVariableInline>,
}

impl Rotate {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [degrees][crate::model::Rotate::degrees].
    pub fn set_degrees<T: std::convert::Into<crate::model::NumberVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.degrees = std::option::Option::Some(v.into());
        self
    }
}

/// Removes the uniform border around the image.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Trim {
    pub fuzz: Option<NumberVariableInline>,
    pub padding: Option<IntegerVariableInline>,
}

impl Trim {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [fuzz][crate::model::Trim::fuzz].
    pub fn set_fuzz<T: std::convert::Into<crate::model::NumberVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.fuzz = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [padding][crate::model::Trim::padding].
    pub fn set_padding<T: std::convert::Into<crate::model::IntegerVariableInline>>(
        mut self,
        v: T,
    ) -> Self {
        self.padding = std::option::Option::Some(v.into());
        self
    }
}

/// The settings of an image policy.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PolicyInputImage {
    pub breakpoints: Option<Breakpoints>,
    /// The hosts allowed to serve images for this policy.
    pub hosts: Option<Vec<String>>,
    pub output: Option<OutputImage>,
    /// Transformations applied after the image is resized to a breakpoint.
    pub post_breakpoint_transformations: Option<Vec<Transformation>>,
    /// The number of seconds to roll out the change, between 1 hour and 7
    /// days.
    pub rollout_duration: Option<i64>,
    pub transformations: Option<Vec<Transformation>>,
    pub variables: Option<Vec<Variable>>,
}

impl PolicyInputImage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [breakpoints][crate::model::PolicyInputImage::breakpoints].
    pub fn set_breakpoints<T: std::convert::Into<crate::model::Breakpoints>>(
        mut self,
        v: T,
    ) -> Self {
        self.breakpoints = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [hosts][crate::model::PolicyInputImage::hosts].
    pub fn set_hosts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.hosts = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [output][crate::model::PolicyInputImage::output].
    pub fn set_output<T: std::convert::Into<crate::model::OutputImage>>(mut self, v: T) -> Self {
        self.output = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [post_breakpoint_transformations][crate::model::PolicyInputImage::post_breakpoint_transformations].
    pub fn set_post_breakpoint_transformations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Transformation>,
    {
        use std::iter::Iterator;
        self.post_breakpoint_transformations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [rollout_duration][crate::model::PolicyInputImage::rollout_duration].
    pub fn set_rollout_duration<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.rollout_duration = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [transformations][crate::model::PolicyInputImage::transformations].
    pub fn set_transformations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Transformation>,
    {
        use std::iter::Iterator;
        self.transformations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [variables][crate::model::PolicyInputImage::variables].
    pub fn set_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Variable>,
    {
        use std::iter::Iterator;
        self.variables = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        let mut errors = Errors::new().field(
            "RolloutDuration",
            validation::in_range(
                self.rollout_duration,
                MIN_ROLLOUT_DURATION,
                MAX_ROLLOUT_DURATION,
            ),
        );
        if let Some(b) = &self.breakpoints {
            errors = errors.nested("Breakpoints", b.validate());
        }
        if let Some(o) = &self.output {
            errors = errors.nested("Output", o.validate());
        }
        if let Some(t) = &self.post_breakpoint_transformations {
            errors = errors.nested("PostBreakpointTransformations", each(t, Transformation::validate));
        }
        if let Some(t) = &self.transformations {
            errors = errors.nested("Transformations", each(t, Transformation::validate));
        }
        if let Some(v) = &self.variables {
            errors = errors.nested("Variables", each(v, Variable::validate));
        }
        errors.into_result()
    }
}

/// The settings of a video policy.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PolicyInputVideo {
    pub breakpoints: Option<Breakpoints>,
    pub hosts: Option<Vec<String>>,
    pub output: Option<OutputVideo>,
    pub rollout_duration: Option<i64>,
    pub variables: Option<Vec<Variable>>,
}

impl PolicyInputVideo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [breakpoints][crate::model::PolicyInputVideo::breakpoints].
    pub fn set_breakpoints<T: std::convert::Into<crate::model::Breakpoints>>(
        mut self,
        v: T,
    ) -> Self {
        self.breakpoints = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [hosts][crate::model::PolicyInputVideo::hosts].
    pub fn set_hosts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.hosts = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [output][crate::model::PolicyInputVideo::output].
    pub fn set_output<T: std::convert::Into<crate::model::OutputVideo>>(mut self, v: T) -> Self {
        self.output = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [rollout_duration][crate::model::PolicyInputVideo::rollout_duration].
    pub fn set_rollout_duration<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.rollout_duration = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [variables][crate::model::PolicyInputVideo::variables].
    pub fn set_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Variable>,
    {
        use std::iter::Iterator;
        self.variables = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        let mut errors = Errors::new().field(
            "RolloutDuration",
            validation::in_range(
                self.rollout_duration,
                MIN_ROLLOUT_DURATION,
                MAX_ROLLOUT_DURATION,
            ),
        );
        if let Some(b) = &self.breakpoints {
            errors = errors.nested("Breakpoints", b.validate());
        }
        if let Some(o) = &self.output {
            errors = errors.nested("Output", o.validate());
        }
        if let Some(v) = &self.variables {
            errors = errors.nested("Variables", each(v, Variable::validate));
        }
        errors.into_result()
    }
}

/// The body of [Policies::upsert_policy][crate::client::Policies::upsert_policy].
///
/// The policy set determines whether the policy applies to images or videos.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PolicyInput {
    Image(Box<PolicyInputImage>),
    Video(Box<PolicyInputVideo>),
}

impl PolicyInput {
    pub fn validate(&self) -> Result<(), Errors> {
        match self {
            Self::Image(p) => p.validate(),
            Self::Video(p) => p.validate(),
        }
    }
}

impl From<PolicyInputImage> for PolicyInput {
    fn from(value: PolicyInputImage) -> Self {
        Self::Image(Box::new(value))
    }
}

impl From<PolicyInputVideo> for PolicyInput {
    fn from(value: PolicyInputVideo) -> Self {
        Self::Video(Box::new(value))
    }
}

/// An image policy, as returned by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PolicyOutputImage {
    pub id: String,
    pub version: i64,
    pub previous_version: i64,
    pub date_created: String,
    pub user: String,
    /// Always `false` for image policies.
    pub video: bool,
    pub breakpoints: Option<Breakpoints>,
    pub hosts: Option<Vec<String>>,
    pub output: Option<OutputImage>,
    pub post_breakpoint_transformations: Option<Vec<Transformation>>,
    pub rollout_duration: Option<i64>,
    pub transformations: Option<Vec<Transformation>>,
    pub variables: Option<Vec<Variable>>,
}

/// A video policy, as returned by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PolicyOutputVideo {
    pub id: String,
    pub version: i64,
    pub previous_version: i64,
    pub date_created: String,
    pub user: String,
    /// Always `true` for video policies.
    pub video: bool,
    pub breakpoints: Option<Breakpoints>,
    pub hosts: Option<Vec<String>>,
    pub output: Option<OutputVideo>,
    pub rollout_duration: Option<i64>,
    pub variables: Option<Vec<Variable>>,
}

/// A policy returned by the service.
///
/// The `video` field of the JSON object selects the variant. Objects without
/// that field, or where the field is not a boolean, fail to decode.
///
/// # Example
/// ```
/// # use edgegrid_imaging_v2::model::PolicyOutput;
/// let policy: PolicyOutput = serde_json::from_value(serde_json::json!({
///     "id": "thumbnails",
///     "video": false,
///     "version": 3,
/// }))?;
/// assert_eq!(policy.id(), "thumbnails");
/// assert!(policy.image().is_some());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PolicyOutput {
    Image(Box<PolicyOutputImage>),
    Video(Box<PolicyOutputVideo>),
}

impl PolicyOutput {
    /// The policy id.
    pub fn id(&self) -> &str {
        match self {
            Self::Image(p) => &p.id,
            Self::Video(p) => &p.id,
        }
    }

    /// The policy version.
    pub fn version(&self) -> i64 {
        match self {
            Self::Image(p) => p.version,
            Self::Video(p) => p.version,
        }
    }

    /// The image policy, if this is an image policy.
    pub fn image(&self) -> Option<&PolicyOutputImage> {
        match self {
            Self::Image(p) => Some(p),
            Self::Video(_) => None,
        }
    }

    /// The video policy, if this is a video policy.
    pub fn video(&self) -> Option<&PolicyOutputVideo> {
        match self {
            Self::Image(_) => None,
            Self::Video(p) => Some(p),
        }
    }
}

impl std::default::Default for PolicyOutput {
    fn default() -> Self {
        Self::Image(Box::default())
    }
}

impl<'de> Deserialize<'de> for PolicyOutput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let video = match object.get("video") {
            Some(serde_json::Value::Bool(v)) => *v,
            Some(_) => {
                return Err(D::Error::custom(
                    "'video' field on policyOutput entry should be a boolean",
                ));
            }
            None => {
                return Err(D::Error::custom(
                    "policyOutput should contain 'video' field",
                ));
            }
        };
        let object = serde_json::Value::Object(object);
        if video {
            serde_json::from_value(object)
                .map(|p| Self::Video(Box::new(p)))
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(object)
                .map(|p| Self::Image(Box::new(p)))
                .map_err(D::Error::custom)
        }
    }
}

/// The request message for [Policies::list_policies][crate::client::Policies::list_policies].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListPoliciesRequest {
    /// Either [NETWORK_STAGING] or [NETWORK_PRODUCTION].
    pub network: String,
    pub contract_id: String,
    pub policy_set_id: String,
}

impl ListPoliciesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [network][crate::model::ListPoliciesRequest::network].
    pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.network = v.into();
        self
    }

    /// Sets the value of [contract_id][crate::model::ListPoliciesRequest::contract_id].
    pub fn set_contract_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.contract_id = v.into();
        self
    }

    /// Sets the value of [policy_set_id][crate::model::ListPoliciesRequest::policy_set_id].
    pub fn set_policy_set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_set_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        Errors::new()
            .field("Network", validation::one_of(&self.network, NETWORKS))
            .field("ContractID", validation::required_str(&self.contract_id))
            .field("PolicySetID", validation::required_str(&self.policy_set_id))
            .into_result()
    }
}

/// The response message for [Policies::list_policies][crate::client::Policies::list_policies].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListPoliciesResponse {
    pub item_kind: String,
    pub items: Vec<PolicyOutput>,
    pub total_items: i64,
}

/// The request message for [Policies::get_policy][crate::client::Policies::get_policy].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetPolicyRequest {
    pub policy_id: String,
    /// Either [NETWORK_STAGING] or [NETWORK_PRODUCTION].
    pub network: String,
    pub contract_id: String,
    pub policy_set_id: String,
}

impl GetPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [policy_id][crate::model::GetPolicyRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [network][crate::model::GetPolicyRequest::network].
    pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.network = v.into();
        self
    }

    /// Sets the value of [contract_id][crate::model::GetPolicyRequest::contract_id].
    pub fn set_contract_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.contract_id = v.into();
        self
    }

    /// Sets the value of [policy_set_id][crate::model::GetPolicyRequest::policy_set_id].
    pub fn set_policy_set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_set_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(
            &self.policy_id,
            &self.network,
            &self.contract_id,
            &self.policy_set_id,
        )
        .into_result()
    }
}

/// The request message for [Policies::upsert_policy][crate::client::Policies::upsert_policy].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertPolicyRequest {
    pub policy_id: String,
    /// Either [NETWORK_STAGING] or [NETWORK_PRODUCTION].
    pub network: String,
    pub contract_id: String,
    pub policy_set_id: String,
    /// The new settings of the policy.
    pub policy: Option<PolicyInput>,
}

impl UpsertPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [policy_id][crate::model::UpsertPolicyRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [network][crate::model::UpsertPolicyRequest::network].
    pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.network = v.into();
        self
    }

    /// Sets the value of [contract_id][crate::model::UpsertPolicyRequest::contract_id].
    pub fn set_contract_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.contract_id = v.into();
        self
    }

    /// Sets the value of [policy_set_id][crate::model::UpsertPolicyRequest::policy_set_id].
    pub fn set_policy_set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_set_id = v.into();
        self
    }

    /// Sets the value of [policy][crate::model::UpsertPolicyRequest::policy].
    pub fn set_policy<T: std::convert::Into<crate::model::PolicyInput>>(mut self, v: T) -> Self {
        self.policy = std::option::Option::Some(v.into());
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        let errors = policy_errors(
            &self.policy_id,
            &self.network,
            &self.contract_id,
            &self.policy_set_id,
        );
        let errors = match &self.policy {
            None => errors.field("Policy", validation::required_some(&self.policy)),
            Some(p) => errors.nested("Policy", p.validate()),
        };
        errors.into_result()
    }
}

/// The response to policy changes.
///
/// Returned by [upsert_policy][crate::client::Policies::upsert_policy],
/// [delete_policy][crate::client::Policies::delete_policy], and
/// [rollback_policy][crate::client::Policies::rollback_policy].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PolicyResponse {
    pub description: String,
    pub id: String,
    /// E.g. `UPDATED` or `DELETED`.
    pub operation_performed: String,
}

/// The request message for [Policies::delete_policy][crate::client::Policies::delete_policy].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeletePolicyRequest {
    pub policy_id: String,
    /// Either [NETWORK_STAGING] or [NETWORK_PRODUCTION].
    pub network: String,
    pub contract_id: String,
    pub policy_set_id: String,
}

impl DeletePolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [policy_id][crate::model::DeletePolicyRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [network][crate::model::DeletePolicyRequest::network].
    pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.network = v.into();
        self
    }

    /// Sets the value of [contract_id][crate::model::DeletePolicyRequest::contract_id].
    pub fn set_contract_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.contract_id = v.into();
        self
    }

    /// Sets the value of [policy_set_id][crate::model::DeletePolicyRequest::policy_set_id].
    pub fn set_policy_set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_set_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(
            &self.policy_id,
            &self.network,
            &self.contract_id,
            &self.policy_set_id,
        )
        .into_result()
    }
}

/// The request message for [Policies::get_policy_history][crate::client::Policies::get_policy_history].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetPolicyHistoryRequest {
    pub policy_id: String,
    /// Either [NETWORK_STAGING] or [NETWORK_PRODUCTION].
    pub network: String,
    pub contract_id: String,
    pub policy_set_id: String,
}

impl GetPolicyHistoryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [policy_id][crate::model::GetPolicyHistoryRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [network][crate::model::GetPolicyHistoryRequest::network].
    pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.network = v.into();
        self
    }

    /// Sets the value of [contract_id][crate::model::GetPolicyHistoryRequest::contract_id].
    pub fn set_contract_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.contract_id = v.into();
        self
    }

    /// Sets the value of [policy_set_id][crate::model::GetPolicyHistoryRequest::policy_set_id].
    pub fn set_policy_set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_set_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(
            &self.policy_id,
            &self.network,
            &self.contract_id,
            &self.policy_set_id,
        )
        .into_result()
    }
}

/// The response message for [Policies::get_policy_history][crate::client::Policies::get_policy_history].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetPolicyHistoryResponse {
    pub item_kind: String,
    pub total_items: i64,
    pub items: Vec<PolicyHistoryItem>,
}

/// A change in the history of a policy.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PolicyHistoryItem {
    pub id: String,
    pub date_created: String,
    pub policy: String,
    pub action: String,
    pub user: String,
    pub version: i64,
}

/// The request message for [Policies::rollback_policy][crate::client::Policies::rollback_policy].
///
/// Rolling back restores the previous version of the policy.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RollbackPolicyRequest {
    pub policy_id: String,
    /// Either [NETWORK_STAGING] or [NETWORK_PRODUCTION].
    pub network: String,
    pub contract_id: String,
    pub policy_set_id: String,
}

impl RollbackPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [policy_id][crate::model::RollbackPolicyRequest::policy_id].
    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = v.into();
        self
    }

    /// Sets the value of [network][crate::model::RollbackPolicyRequest::network].
    pub fn set_network<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.network = v.into();
        self
    }

    /// Sets the value of [contract_id][crate::model::RollbackPolicyRequest::contract_id].
    pub fn set_contract_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.contract_id = v.into();
        self
    }

    /// Sets the value of [policy_set_id][crate::model::RollbackPolicyRequest::policy_set_id].
    pub fn set_policy_set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_set_id = v.into();
        self
    }

    pub fn validate(&self) -> Result<(), Errors> {
        policy_errors(
            &self.policy_id,
            &self.network,
            &self.contract_id,
            &self.policy_set_id,
        )
        .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn get_request() -> GetPolicyRequest {
        GetPolicyRequest::new()
            .set_policy_id("thumbnails")
            .set_network(NETWORK_STAGING)
            .set_contract_id("3-WNKXX1")
            .set_policy_set_id("570f9090-5dbe-11ec-8a0a-71665789c1d8")
    }

    #[test]
    fn policy_request_validation() {
        assert_eq!(get_request().validate(), Ok(()));

        let errors = GetPolicyRequest::new().validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "ContractID: cannot be blank; Network: cannot be blank; PolicyID: cannot be blank; PolicySetID: cannot be blank."
        );
    }

    #[test_case("."; "current")]
    #[test_case(".."; "parent")]
    fn policy_id_dot_segments(policy_id: &str) {
        let errors = get_request().set_policy_id(policy_id).validate().unwrap_err();
        assert_eq!(errors.to_string(), "PolicyID: cannot be a relative path segment.");
        let errors = DeletePolicyRequest::new()
            .set_policy_id(policy_id)
            .set_network(NETWORK_STAGING)
            .set_contract_id("3-WNKXX1")
            .set_policy_set_id("set")
            .validate()
            .unwrap_err();
        assert_eq!(errors.to_string(), "PolicyID: cannot be a relative path segment.");
    }

    #[test_case("staging", true)]
    #[test_case("production", true)]
    #[test_case("prod", false)]
    #[test_case("STAGING", false)]
    fn network(network: &str, ok: bool) {
        let request = ListPoliciesRequest::new()
            .set_network(network)
            .set_contract_id("3-WNKXX1")
            .set_policy_set_id("set");
        let got = request.validate();
        assert_eq!(got.is_ok(), ok, "{got:?}");
        if let Err(e) = got {
            assert_eq!(e.to_string(), "Network: has to be 'staging', 'production'.");
        }
    }

    #[test]
    fn upsert_requires_policy() {
        let request = UpsertPolicyRequest::new()
            .set_policy_id("thumbnails")
            .set_network(NETWORK_PRODUCTION)
            .set_contract_id("3-WNKXX1")
            .set_policy_set_id("set");
        let errors = request.clone().validate().unwrap_err();
        assert_eq!(errors.to_string(), "Policy: cannot be blank.");

        let request = request.set_policy(PolicyInputImage::new().set_rollout_duration(3600));
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn upsert_validates_nested_input() {
        let input = PolicyInputImage::new()
            .set_rollout_duration(60)
            .set_breakpoints(Breakpoints::new().set_widths([320, 0]))
            .set_variables([Variable::new().set_name("width").set_type("integer")])
            .set_transformations([Transformation::MaxColors(
                MaxColors::new().set_colors(512_i64),
            )]);
        let request = UpsertPolicyRequest::new()
            .set_policy_id("thumbnails")
            .set_network(NETWORK_PRODUCTION)
            .set_contract_id("3-WNKXX1")
            .set_policy_set_id("set")
            .set_policy(input);
        let errors = request.validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Policy: (Breakpoints: (Widths: 1: must be no less than 1.); \
             RolloutDuration: must be no less than 3600; \
             Transformations: (0: (Colors: must be no greater than 256.).); \
             Variables: (0: (DefaultValue: cannot be blank; Type: has to be 'bool', 'number', 'url', 'color', 'gravity', 'placement', 'scaleDimension', 'grayscaleType', 'aspectRatio', 'resizeType', 'dimension', 'perceptualQuality', 'string', 'focus'.).).)."
        );
    }

    #[test]
    fn variable_references_skip_literal_checks() {
        let input = PolicyInputImage::new().set_transformations([
            Transformation::MaxColors(MaxColors::new().set_colors(IntegerVariableInline::var("c"))),
            Transformation::Resize(Resize::new().set_aspect(StringVariableInline::var("aspect"))),
        ]);
        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn video_input_validation() {
        let input = PolicyInputVideo::new()
            .set_rollout_duration(604801)
            .set_output(OutputVideo::new().set_perceptual_quality("ultra".to_string()));
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Output: (PerceptualQuality: has to be 'high', 'mediumHigh', 'medium', 'mediumLow', 'low'.); RolloutDuration: must be no greater than 604800."
        );
    }

    #[test]
    fn transformations_round_trip() -> TestResult {
        let input = json!([
            {"transformation": "Blur", "sigma": 2.5},
            {"transformation": "Crop", "width": {"var": "cropWidth"}, "height": 200, "gravity": "Center"},
            {"transformation": "Grayscale", "type": "Rec709"},
            {"transformation": "Rotate", "degrees": 90}
        ]);
        let got: Vec<Transformation> = serde_json::from_value(input.clone())?;
        assert_eq!(
            got[1],
            Transformation::Crop(
                Crop::new()
                    .set_width(IntegerVariableInline::var("cropWidth"))
                    .set_height(200_i64)
                    .set_gravity("Center".to_string())
            )
        );
        assert_eq!(
            got[3],
            Transformation::Rotate(Rotate::new().set_degrees(90.0))
        );
        let rotate = serde_json::to_value(&got[3])?;
        assert_eq!(rotate, json!({"transformation": "Rotate", "degrees": 90.0}));
        Ok(())
    }

    #[test]
    fn policy_output_discriminator() -> TestResult {
        let got: PolicyOutput = serde_json::from_value(json!({
            "id": "videos",
            "video": true,
            "version": 2,
            "output": {"perceptualQuality": "mediumHigh"},
        }))?;
        let video = got.video().expect("expected a video policy");
        assert_eq!(got.id(), "videos");
        assert_eq!(got.version(), 2);
        assert_eq!(
            video.output,
            Some(OutputVideo::new().set_perceptual_quality("mediumHigh".to_string()))
        );
        assert!(got.image().is_none(), "{got:?}");

        let got: PolicyOutput = serde_json::from_value(json!({
            "id": "images",
            "video": false,
            "transformations": [{"transformation": "Trim", "fuzz": 0.1}],
        }))?;
        let image = got.image().expect("expected an image policy");
        assert_eq!(image.transformations.as_ref().map(Vec::len), Some(1));
        Ok(())
    }

    #[test_case(json!({"id": "p"}), "policyOutput should contain 'video' field")]
    #[test_case(json!({"id": "p", "video": "yes"}), "'video' field on policyOutput entry should be a boolean")]
    fn policy_output_bad_discriminator(input: serde_json::Value, want: &str) {
        let got = serde_json::from_value::<PolicyOutput>(input).unwrap_err();
        assert!(got.to_string().contains(want), "{got}");
    }

    #[test]
    fn list_response_decodes_each_item() -> TestResult {
        let got: ListPoliciesResponse = serde_json::from_value(json!({
            "itemKind": "POLICY",
            "totalItems": 2,
            "items": [
                {"id": ".auto", "video": false},
                {"id": "clips", "video": true},
            ],
        }))?;
        assert_eq!(got.total_items, 2);
        assert!(got.items[0].image().is_some(), "{got:?}");
        assert!(got.items[1].video().is_some(), "{got:?}");

        let bad = serde_json::from_value::<ListPoliciesResponse>(json!({
            "items": [{"id": ".auto", "video": false}, {"id": "clips"}],
        }));
        assert!(bad.is_err(), "{bad:?}");
        Ok(())
    }

    #[test]
    fn policy_input_serializes_inner_object() -> TestResult {
        let input = PolicyInput::from(
            PolicyInputImage::new()
                .set_rollout_duration(3600)
                .set_output(OutputImage::new().set_quality(IntegerVariableInline::var("q"))),
        );
        assert_eq!(
            serde_json::to_value(&input)?,
            json!({"rolloutDuration": 3600, "output": {"quality": {"var": "q"}}})
        );
        Ok(())
    }
}
