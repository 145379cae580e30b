use crate::imaging::AttributeError;
use hashbrown::HashMap;

/// Names of the attributes read by the capsule adapters.
pub mod tokens {
    /// The spine length of both capsule schemas.
    pub const HEIGHT: &str = "height";
    /// The radius of the uniform capsule schema.
    pub const RADIUS: &str = "radius";
    /// The top cap radius of the tapered capsule schema.
    pub const RADIUS_TOP: &str = "radiusTop";
    /// The bottom cap radius of the tapered capsule schema.
    pub const RADIUS_BOTTOM: &str = "radiusBottom";
    /// The spine axis token, one of `"X"`, `"Y"` or `"Z"`.
    pub const AXIS: &str = "axis";
}

/// The time at which an attribute is evaluated.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TimeCode {
    /// The attribute's default (non-animated) value.
    #[default]
    Default,
    /// A point in time, in the host's time units.
    Sample(f64),
}

/// A value stored in an attribute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum AttributeValue {
    /// A double precision scalar.
    Double(f64),
    /// A single precision scalar.
    Float(f32),
    /// A token, e.g. an axis name.
    Token(String),
}

impl AttributeValue {
    /// A short name for the type of this value, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Double(_) => "double",
            AttributeValue::Float(_) => "float",
            AttributeValue::Token(_) => "token",
        }
    }

    /// This value as a double, if it is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            AttributeValue::Double(v) => Some(*v),
            AttributeValue::Float(v) => Some(*v as f64),
            AttributeValue::Token(_) => None,
        }
    }

    /// This value as a token, if it is one.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            AttributeValue::Token(t) => Some(t),
            _ => None,
        }
    }

    /// Blends `self` toward `other` by `t ∈ [0, 1]`.
    ///
    /// Scalars of the same type interpolate linearly. Anything else holds
    /// `self`.
    fn lerp(&self, other: &AttributeValue, t: f64) -> AttributeValue {
        match (self, other) {
            (AttributeValue::Double(a), AttributeValue::Double(b)) => {
                AttributeValue::Double(a + (b - a) * t)
            }
            (AttributeValue::Float(a), AttributeValue::Float(b)) => {
                AttributeValue::Float(a + (b - a) * t as f32)
            }
            _ => self.clone(),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Double(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Token(value.to_string())
    }
}

/// Read access to the attributes of a single primitive.
///
/// This is the seam between the capsule adapters and the host's scene
/// storage.
pub trait AttributeSource {
    /// The value of the attribute `name` at `time`, or `None` if it has no
    /// authored value.
    fn get(&self, name: &str, time: TimeCode) -> Option<AttributeValue>;

    /// Whether the attribute `name` may take different values over time.
    fn is_time_varying(&self, name: &str) -> bool;

    /// Reads a scalar attribute, widening floats to doubles.
    fn get_scalar(&self, name: &str, time: TimeCode) -> Result<f64, AttributeError> {
        let value = self
            .get(name, time)
            .ok_or_else(|| AttributeError::Missing(name.to_string()))?;
        value.as_scalar().ok_or_else(|| AttributeError::TypeMismatch {
            name: name.to_string(),
            expected: "scalar",
            found: value.type_name(),
        })
    }

    /// Reads a token attribute.
    fn get_token(&self, name: &str, time: TimeCode) -> Result<String, AttributeError> {
        match self.get(name, time) {
            Some(AttributeValue::Token(token)) => Ok(token),
            Some(value) => Err(AttributeError::TypeMismatch {
                name: name.to_string(),
                expected: "token",
                found: value.type_name(),
            }),
            None => Err(AttributeError::Missing(name.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Attribute {
    default: Option<AttributeValue>,
    // Sorted by time, no duplicates.
    samples: Vec<(f64, AttributeValue)>,
}

impl Attribute {
    fn value_at(&self, time: TimeCode) -> Option<AttributeValue> {
        let t = match time {
            TimeCode::Default => {
                return self
                    .default
                    .clone()
                    .or_else(|| self.samples.first().map(|s| s.1.clone()));
            }
            TimeCode::Sample(t) => t,
        };

        if self.samples.is_empty() {
            return self.default.clone();
        }

        let i = self.samples.partition_point(|(st, _)| *st <= t);
        if i == 0 {
            return Some(self.samples[0].1.clone());
        }

        let (t0, v0) = &self.samples[i - 1];
        match self.samples.get(i) {
            Some((t1, v1)) if *t0 != t => Some(v0.lerp(v1, (t - t0) / (t1 - t0))),
            _ => Some(v0.clone()),
        }
    }
}

/// An in-memory [`AttributeSource`].
///
/// Each attribute has an optional default value and a set of time samples.
/// Scalars interpolate linearly between samples and hold the first or last
/// sample outside of the sampled range; tokens hold the previous sample.
#[derive(Clone, Debug, Default)]
pub struct AttributeMap {
    attributes: HashMap<String, Attribute>,
}

impl AttributeMap {
    /// An empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default value of `name`.
    pub fn set_default(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.attributes.entry_ref(name).or_default().default = Some(value.into());
    }

    /// Sets the value of `name` at `time`, replacing any sample already
    /// authored at that time. Non-finite times are ignored.
    pub fn set_sample(&mut self, name: &str, time: f64, value: impl Into<AttributeValue>) {
        if !time.is_finite() {
            log::warn!("ignoring sample of `{}` at non-finite time {}", name, time);
            return;
        }

        let samples = &mut self.attributes.entry_ref(name).or_default().samples;
        let value = value.into();
        match samples.binary_search_by(|(t, _)| t.total_cmp(&time)) {
            Ok(i) => samples[i].1 = value,
            Err(i) => samples.insert(i, (time, value)),
        }
    }

    /// Builder variant of [`AttributeMap::set_default`].
    pub fn with_default(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.set_default(name, value);
        self
    }

    /// Builder variant of [`AttributeMap::set_sample`].
    pub fn with_sample(mut self, name: &str, time: f64, value: impl Into<AttributeValue>) -> Self {
        self.set_sample(name, time, value);
        self
    }

    /// Removes every value of `name`. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.attributes.remove(name).is_some()
    }

    /// Returns `true` if `name` has a default value or time samples.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}

impl AttributeSource for AttributeMap {
    fn get(&self, name: &str, time: TimeCode) -> Option<AttributeValue> {
        self.attributes.get(name)?.value_at(time)
    }

    fn is_time_varying(&self, name: &str) -> bool {
        self.attributes
            .get(name)
            .is_some_and(|attr| attr.samples.len() > 1)
    }
}
