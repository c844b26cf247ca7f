use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::graph::{Edge, EdgeKind, ScholarGraph};
use super::model::Dataset;

pub fn load_graph(path: &str) -> Result<ScholarGraph> {
    let raw = fs::read_to_string(Path::new(path))
        .with_context(|| format!("failed to read dataset file {path}"))?;
    let dataset: Dataset =
        serde_json::from_str(&raw).with_context(|| format!("invalid dataset JSON in {path}"))?;

    Ok(resolve_graph(dataset))
}

pub(crate) fn resolve_graph(dataset: Dataset) -> ScholarGraph {
    let mut index_by_id = HashMap::with_capacity(dataset.scholars.len());
    for (index, scholar) in dataset.scholars.iter().enumerate() {
        index_by_id.insert(scholar.id.clone(), index);
    }

    let mut edges = Vec::with_capacity(dataset.connections.len());
    for connection in &dataset.connections {
        let Some(kind) = EdgeKind::parse(&connection.kind) else {
            log::warn!(
                "skipping connection {} -> {}: unknown type {:?}",
                connection.source,
                connection.target,
                connection.kind
            );
            continue;
        };

        let (Some(&source), Some(&target)) = (
            index_by_id.get(&connection.source),
            index_by_id.get(&connection.target),
        ) else {
            log::warn!(
                "skipping connection {} -> {}: endpoint does not match any scholar",
                connection.source,
                connection.target
            );
            continue;
        };

        if source == target {
            log::warn!("skipping self connection on {}", connection.source);
            continue;
        }

        edges.push(Edge {
            source,
            target,
            kind,
            label: connection.label.clone(),
        });
    }

    for scholar in &dataset.scholars {
        let Some(relations) = &scholar.connections else {
            continue;
        };

        let singles = [
            relations.spouse.as_ref(),
            relations.coauthor.as_ref(),
            relations.close_friend.as_ref(),
        ];
        for id in relations.colleagues.iter().chain(singles.into_iter().flatten()) {
            if !index_by_id.contains_key(id) {
                log::warn!(
                    "scholar {}: relation reference {id} does not match any scholar",
                    scholar.id
                );
            }
        }
    }

    ScholarGraph {
        scholars: dataset.scholars,
        edges,
        index_by_id,
    }
}
