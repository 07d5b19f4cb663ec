use std::fmt;

/// Output sizing policy of a convolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvolutionType {
    /// Shrink the output to the region where the kernel fully overlaps the source.
    Inner,
    /// Expand the output to every position with partial overlap.
    Outer,
    /// Keep the output the same size as the source, with a zero boundary.
    #[default]
    Equiv,
}

/// Optimization strategy requested for an operation.
///
/// Only [`OptimizeLevel::First`] has an implementation; the others are
/// reported as unsupported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptimizeLevel {
    /// Plain shift-and-add evaluation.
    #[default]
    First,
    /// Reserved.
    Second,
    /// Reserved.
    Third,
    /// Reserved.
    Fourth,
}

/// Gradient direction of a derivative filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Horizontal gradient.
    X,
    /// Vertical gradient.
    Y,
    /// Diagonal gradient. Not implemented.
    Upright,
}

impl fmt::Display for ConvolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConvolutionType::Inner => "Inner",
            ConvolutionType::Outer => "Outer",
            ConvolutionType::Equiv => "Equiv",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for OptimizeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptimizeLevel::First => "First",
            OptimizeLevel::Second => "Second",
            OptimizeLevel::Third => "Third",
            OptimizeLevel::Fourth => "Fourth",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::X => "X",
            Direction::Y => "Y",
            Direction::Upright => "Upright",
        };
        write!(f, "{name}")
    }
}

/// Policies shared by the convolution engine and the filters built on it.
///
/// # Examples
///
/// ```
/// use viennacv_imgproc::{ConvolutionType, FilterConfig, OptimizeLevel};
///
/// let config = FilterConfig::default();
/// assert_eq!(config.convolution_type, ConvolutionType::Equiv);
/// assert_eq!(config.optimize_level, OptimizeLevel::First);
///
/// let config = config.with_optimize_level(OptimizeLevel::Second);
/// assert_eq!(config.optimize_level, OptimizeLevel::Second);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    /// Output sizing policy.
    pub convolution_type: ConvolutionType,
    /// Optimization strategy.
    pub optimize_level: OptimizeLevel,
}

impl FilterConfig {
    /// Create a configuration from both policies.
    pub fn new(convolution_type: ConvolutionType, optimize_level: OptimizeLevel) -> Self {
        Self {
            convolution_type,
            optimize_level,
        }
    }

    /// Replace the convolution type.
    pub fn with_convolution_type(mut self, convolution_type: ConvolutionType) -> Self {
        self.convolution_type = convolution_type;
        self
    }

    /// Replace the optimization level.
    pub fn with_optimize_level(mut self, optimize_level: OptimizeLevel) -> Self {
        self.optimize_level = optimize_level;
        self
    }
}
