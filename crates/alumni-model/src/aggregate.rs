/// Total points for one alumnus over a filtered selection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AggregateRow {
    pub name: String,
    pub total_points: f64,
}

impl AggregateRow {
    pub fn new(name: impl Into<String>, total_points: f64) -> Self {
        Self {
            name: name.into(),
            total_points,
        }
    }
}
