use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Dataset {
    pub scholars: Vec<Scholar>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scholar {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub short_bio: String,
    #[serde(default)]
    pub full_bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub works: Vec<String>,
    #[serde(default)]
    pub connections: Option<Relations>,
    #[serde(default)]
    pub is_central: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relations {
    #[serde(default)]
    pub colleagues: Vec<String>,
    #[serde(default)]
    pub spouse: Option<String>,
    #[serde(default)]
    pub coauthor: Option<String>,
    #[serde(default)]
    pub close_friend: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Dataset;

    #[test]
    fn dataset_parses_camel_case_fields() {
        let raw = r#"{
            "scholars": [
                {
                    "id": "lotman",
                    "name": "Юрий Михайлович Лотман",
                    "years": "1922–1993",
                    "shortBio": "Основатель тартуской школы",
                    "fullBio": "Литературовед и семиотик.",
                    "interests": ["семиотика"],
                    "achievements": ["Основал летние школы"],
                    "works": ["Структура художественного текста"],
                    "isCentral": true,
                    "connections": {
                        "colleagues": ["ivanov"],
                        "spouse": "mints",
                        "closeFriend": "egorov"
                    }
                },
                { "id": "mints", "name": "Зара Григорьевна Минц" }
            ],
            "connections": [
                { "source": "lotman", "target": "mints", "type": "spouse", "label": "супруги" }
            ]
        }"#;

        let dataset: Dataset = serde_json::from_str(raw).unwrap();
        assert_eq!(dataset.scholars.len(), 2);
        assert_eq!(dataset.connections.len(), 1);

        let lotman = &dataset.scholars[0];
        assert!(lotman.is_central);
        assert_eq!(lotman.short_bio, "Основатель тартуской школы");
        let relations = lotman.connections.as_ref().unwrap();
        assert_eq!(relations.spouse.as_deref(), Some("mints"));
        assert_eq!(relations.close_friend.as_deref(), Some("egorov"));
        assert_eq!(relations.coauthor, None);

        let mints = &dataset.scholars[1];
        assert!(!mints.is_central);
        assert!(mints.connections.is_none());
        assert!(mints.works.is_empty());

        assert_eq!(dataset.connections[0].kind, "spouse");
        assert_eq!(dataset.connections[0].label.as_deref(), Some("супруги"));
    }
}
