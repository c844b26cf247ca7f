use std::collections::HashMap;

use super::model::Scholar;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Spouse,
    Coauthor,
    Friendship,
    Collaboration,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 4] = [
        Self::Spouse,
        Self::Coauthor,
        Self::Friendship,
        Self::Collaboration,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "spouse" => Some(Self::Spouse),
            "coauthor" => Some(Self::Coauthor),
            "friendship" => Some(Self::Friendship),
            "collaboration" => Some(Self::Collaboration),
            _ => None,
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            Self::Spouse => "Супруги",
            Self::Coauthor => "Соавторы",
            Self::Friendship => "Близкая дружба",
            Self::Collaboration => "Коллеги",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationKind {
    Colleague,
    Spouse,
    Coauthor,
    CloseFriend,
}

impl RelationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Colleague => "коллега",
            Self::Spouse => "супруг(а)",
            Self::Coauthor => "соавтор",
            Self::CloseFriend => "близкий друг",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub kind: EdgeKind,
    pub label: Option<String>,
}

#[derive(Clone, Copy, Debug)]
pub struct RelationTag {
    pub target: usize,
    pub kind: RelationKind,
}

#[derive(Clone, Debug)]
pub struct ScholarGraph {
    pub scholars: Vec<Scholar>,
    pub edges: Vec<Edge>,
    pub index_by_id: HashMap<String, usize>,
}

impl ScholarGraph {
    pub fn relation_tags(&self, index: usize) -> Vec<RelationTag> {
        let mut tags = Vec::new();
        let Some(relations) = self
            .scholars
            .get(index)
            .and_then(|scholar| scholar.connections.as_ref())
        else {
            return tags;
        };

        for id in &relations.colleagues {
            if let Some(&target) = self.index_by_id.get(id) {
                tags.push(RelationTag {
                    target,
                    kind: RelationKind::Colleague,
                });
            }
        }

        for (reference, kind) in [
            (&relations.spouse, RelationKind::Spouse),
            (&relations.coauthor, RelationKind::Coauthor),
            (&relations.close_friend, RelationKind::CloseFriend),
        ] {
            if let Some(&target) = reference.as_ref().and_then(|id| self.index_by_id.get(id)) {
                tags.push(RelationTag { target, kind });
            }
        }

        tags
    }
}
