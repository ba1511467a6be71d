use indexmap::IndexMap;

/// Mapping from operation name to the hex digest of that operation.
///
/// Entries keep insertion order (input document order, then in-document
/// operation order), which makes the serialized artifact reproducible.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct SignatureMap(IndexMap<String, String>);

impl SignatureMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, operation_name: &str) -> bool {
        self.0.contains_key(operation_name)
    }

    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn get(&self, operation_name: &str) -> Option<&str> {
        self.0.get(operation_name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, digest)| (name.as_str(), digest.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Serializes the map as a JSON object indented with two spaces.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }

    pub(crate) fn insert(&mut self, operation_name: String, digest: String) {
        self.0.insert(operation_name, digest);
    }
}
