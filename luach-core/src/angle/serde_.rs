use super::Angle;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Angles travel as fractional degrees so that model parameters stay readable.
impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.as_degrees_fraction())
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let degrees = f64::deserialize(d)?;
        Ok(Angle::from_degrees(degrees))
    }
}
