use crate::foundation::core::Vec3;

/// Receiver of per-frame renderer parameters.
///
/// Implementations forward writes to whatever owns the shading state (a material, a uniform
/// block). Writes are fire-and-forget.
pub trait ParamSink {
    /// Set a scalar parameter.
    fn set_float(&mut self, name: &str, value: f64);
    /// Set a vector parameter.
    fn set_vector(&mut self, name: &str, value: Vec3);
}

/// Value of one recorded parameter write.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Scalar write.
    Float(f64),
    /// Vector write.
    Vector(Vec3),
}

/// In-memory sink for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    writes: Vec<(String, ParamValue)>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write in call order.
    pub fn writes(&self) -> &[(String, ParamValue)] {
        &self.writes
    }

    /// Latest scalar written under `name`.
    pub fn float(&self, name: &str) -> Option<f64> {
        self.latest(name).and_then(|v| match v {
            ParamValue::Float(f) => Some(f),
            ParamValue::Vector(_) => None,
        })
    }

    /// Latest vector written under `name`.
    pub fn vector(&self, name: &str) -> Option<Vec3> {
        self.latest(name).and_then(|v| match v {
            ParamValue::Vector(v) => Some(v),
            ParamValue::Float(_) => None,
        })
    }

    /// Number of writes made under `name`.
    pub fn write_count(&self, name: &str) -> usize {
        self.writes.iter().filter(|(n, _)| n == name).count()
    }

    /// Forget every recorded write.
    pub fn clear(&mut self) {
        self.writes.clear();
    }

    fn latest(&self, name: &str) -> Option<ParamValue> {
        self.writes
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }
}

impl ParamSink for RecordingSink {
    fn set_float(&mut self, name: &str, value: f64) {
        self.writes.push((name.to_owned(), ParamValue::Float(value)));
    }

    fn set_vector(&mut self, name: &str, value: Vec3) {
        self.writes.push((name.to_owned(), ParamValue::Vector(value)));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/sink.rs"]
mod tests;
