use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct VehicleId(i64);

impl VehicleId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl AsRef<i64> for VehicleId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored vehicle. Field names match the `vehicles` table and the JSON
/// wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub ramal: i64,
    pub setor: String,
    pub plate: String,
    pub model: String,
    pub cor: String,
}

/// Canonical vehicle columns after alias resolution. `None` means the field
/// was not supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFields {
    pub name: Option<String>,
    pub ramal: Option<i64>,
    pub setor: Option<String>,
    pub plate: Option<String>,
    pub model: Option<String>,
    pub cor: Option<String>,
}

impl VehicleFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ramal.is_none()
            && self.setor.is_none()
            && self.plate.is_none()
            && self.model.is_none()
            && self.cor.is_none()
    }

    /// Name of the first required column that is missing, in table order.
    pub fn first_missing(&self) -> Option<&'static str> {
        if self.name.is_none() {
            Some("name")
        } else if self.ramal.is_none() {
            Some("ramal")
        } else if self.setor.is_none() {
            Some("setor")
        } else if self.plate.is_none() {
            Some("plate")
        } else if self.model.is_none() {
            Some("model")
        } else if self.cor.is_none() {
            Some("cor")
        } else {
            None
        }
    }

    /// Copies every present field onto `vehicle`.
    pub fn apply_to(&self, vehicle: &mut Vehicle) {
        if let Some(name) = &self.name {
            vehicle.name = name.clone();
        }
        if let Some(ramal) = self.ramal {
            vehicle.ramal = ramal;
        }
        if let Some(setor) = &self.setor {
            vehicle.setor = setor.clone();
        }
        if let Some(plate) = &self.plate {
            vehicle.plate = plate.clone();
        }
        if let Some(model) = &self.model {
            vehicle.model = model.clone();
        }
        if let Some(cor) = &self.cor {
            vehicle.cor = cor.clone();
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RamalRepr {
    Number(i64),
    Text(String),
}

/// Accepts an extension number either as a JSON integer or as a string
/// holding one, e.g. `100` or `"100"`.
pub fn deserialize_ramal<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RamalRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RamalRepr::Number(n)) => Ok(Some(n)),
        Some(RamalRepr::Text(s)) => {
            s.trim().parse::<i64>().map(Some).map_err(|_| {
                serde::de::Error::custom(format!(
                    "ramal must be an integer, got {s:?}"
                ))
            })
        }
    }
}
