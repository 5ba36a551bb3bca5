use serde::Serialize;

/// Flattened satellite positions. `labels[i]` names the satellite that produced `vertices[i]`.
#[derive(Serialize, Debug, Default, PartialEq)]
pub struct SatelliteLocations {
    vertices: Vec<[f64; 3]>,
    labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl SatelliteLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_data_found(message: impl Into<String>) -> Self {
        SatelliteLocations {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Appends a single point, keeping vertices and labels aligned.
    pub fn push(&mut self, label: &str, vertex: [f64; 3]) {
        self.vertices.push(vertex);
        self.labels.push(label.to_owned());
    }

    pub fn vertices(&self) -> &[[f64; 3]] {
        &self.vertices
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
