use serde::{Deserialize, Deserializer, Serialize};

/// One academic article record from the collection dataset.
///
/// Records are immutable once loaded. Field names on the wire match the
/// dataset export format, so an exported filtered set can be re-ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Externally assigned identifier. Uniqueness is not enforced; lookups
    /// treat the first record carrying an id as the match.
    pub id: String,
    pub title: String,
    /// Ordered author names; element 0 is the first author. Legacy datasets
    /// carry this as a single `;`-delimited string, normalized at load time.
    #[serde(deserialize_with = "deserialize_authors")]
    pub authors: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Classification code, e.g. `math.DG`. Open set, no enum.
    pub category: String,
    /// `YYYY-MM-DD`-like date string. May be malformed in real data.
    pub published: String,
    pub link: String,
    pub pdf: String,
}

impl Article {
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(|name| name.as_str())
    }

    /// Publication year taken from the leading four characters of
    /// `published`. Malformed or short values yield `None`.
    pub fn year(&self) -> Option<i32> {
        self.published.get(..4).and_then(|prefix| prefix.parse().ok())
    }
}

fn deserialize_authors<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AuthorsField {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match AuthorsField::deserialize(deserializer)? {
        AuthorsField::List(names) => names,
        AuthorsField::Joined(joined) => joined
            .split(';')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
    })
}
