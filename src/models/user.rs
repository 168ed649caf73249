use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    /// Outer `None` when the key is absent, inner `None` for an explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    pub phone: String,
    pub no_show_count: u32,
    pub restricted: bool,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
