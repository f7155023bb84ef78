//! Learning path construction.
//!
//! Culture entries and conversation scenarios are woven into one ordered
//! path (two culture nodes, then one conversation), cut into units of five,
//! and annotated from the learner's progress snapshot.

use crate::content::culture_entry_id;
use crate::types::{ConversationScenario, CultureContent, UserProgress};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Nodes per unit
pub const NODES_PER_UNIT: usize = 5;

/// Nodes rendered by default
pub const LEARNING_PATH_NODE_LIMIT: usize = 20;

const CULTURE_PER_ROUND: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Culture,
    Conversation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodePayload {
    Culture(CultureContent),
    Conversation(ConversationScenario),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    /// "culture-<title hash>" or "conversation-<scenario id>"
    pub id: String,
    /// Id the backend records completion under
    pub content_id: u64,
    pub title: String,
    pub xp_reward: u64,
    pub is_completed: bool,
    pub is_next_up: bool,
    pub is_locked: bool,
    pub unit_index: usize,
    pub unit_title: String,
    pub payload: NodePayload,
}

impl PathNode {
    pub fn kind(&self) -> NodeKind {
        match self.payload {
            NodePayload::Culture(_) => NodeKind::Culture,
            NodePayload::Conversation(_) => NodeKind::Conversation,
        }
    }

    fn culture(entry: &CultureContent, completed: &[u64]) -> Self {
        let content_id = culture_entry_id(&entry.title);
        Self {
            id: format!("culture-{}", content_id),
            content_id,
            title: entry.title.clone(),
            xp_reward: entry.xp_reward,
            is_completed: completed.contains(&content_id),
            is_next_up: false,
            is_locked: false,
            unit_index: 0,
            unit_title: String::new(),
            payload: NodePayload::Culture(entry.clone()),
        }
    }

    fn conversation(scenario: &ConversationScenario, completed: &[u64]) -> Self {
        Self {
            id: format!("conversation-{}", scenario.id),
            content_id: scenario.id,
            title: scenario.title.clone(),
            xp_reward: scenario.xp_reward,
            is_completed: completed.contains(&scenario.id),
            is_next_up: false,
            is_locked: false,
            unit_index: 0,
            unit_title: String::new(),
            payload: NodePayload::Conversation(scenario.clone()),
        }
    }
}

/// How locked nodes respond to being opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockPolicy {
    /// Locked nodes cannot be opened
    #[default]
    Enforced,
    /// Locking is display-only
    Advisory,
}

impl LockPolicy {
    pub fn can_open(&self, node: &PathNode) -> bool {
        match self {
            LockPolicy::Enforced => !node.is_locked,
            LockPolicy::Advisory => true,
        }
    }
}

/// Build the ordered learning path
pub fn build_learning_path(
    culture_entries: &[CultureContent],
    scenarios: &[ConversationScenario],
    progress: Option<&UserProgress>,
) -> Vec<PathNode> {
    let (completed_culture, completed_dialogues) = match progress {
        Some(p) => (
            p.completed_culture_entries.as_slice(),
            p.completed_dialogues.as_slice(),
        ),
        None => (&[][..], &[][..]),
    };

    let mut culture = culture_entries
        .iter()
        .map(|entry| PathNode::culture(entry, completed_culture))
        .peekable();
    let mut conversations = scenarios
        .iter()
        .map(|scenario| PathNode::conversation(scenario, completed_dialogues))
        .peekable();

    let mut nodes = Vec::with_capacity(culture_entries.len() + scenarios.len());
    while culture.peek().is_some() || conversations.peek().is_some() {
        nodes.extend(culture.by_ref().take(CULTURE_PER_ROUND));
        nodes.extend(conversations.next());
    }

    for (index, node) in nodes.iter_mut().enumerate() {
        node.unit_index = index / NODES_PER_UNIT;
        node.unit_title = format!("Unit {}", node.unit_index + 1);
    }

    match nodes.iter().position(|node| !node.is_completed) {
        Some(first) => {
            nodes[first].is_next_up = true;
            for node in nodes.iter_mut().skip(first + 1) {
                node.is_locked = !node.is_completed;
            }
        }
        None => {
            // Everything done: offer the first node again for practice
            if let Some(node) = nodes.first_mut() {
                node.is_next_up = true;
            }
        }
    }

    debug!(
        "Built learning path: {} nodes, {} completed",
        nodes.len(),
        nodes.iter().filter(|n| n.is_completed).count()
    );
    nodes
}

/// Group consecutive nodes by unit for rendering headers
pub fn units(nodes: &[PathNode]) -> Vec<(&str, &[PathNode])> {
    nodes
        .chunk_by(|a, b| a.unit_index == b.unit_index)
        .map(|chunk| (chunk[0].unit_title.as_str(), chunk))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn culture(title: &str) -> CultureContent {
        CultureContent {
            title: title.to_string(),
            content: format!("{} body", title),
            xp_reward: 15,
            language_text: String::new(),
            translated_text: String::new(),
        }
    }

    fn scenario(id: u64) -> ConversationScenario {
        ConversationScenario {
            id,
            title: format!("Scenario {}", id),
            description: String::new(),
            language_id: 1,
            xp_reward: 25,
            steps: Vec::new(),
        }
    }

    fn kinds(nodes: &[PathNode]) -> String {
        nodes
            .iter()
            .map(|n| match n.kind() {
                NodeKind::Culture => 'C',
                NodeKind::Conversation => 'V',
            })
            .collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build_learning_path(&[], &[], None).is_empty());
    }

    #[test]
    fn test_interleave_two_to_one() {
        let entries: Vec<_> = (0..4).map(|i| culture(&format!("c{}", i))).collect();
        let scenarios: Vec<_> = (1..=2).map(scenario).collect();
        let nodes = build_learning_path(&entries, &scenarios, None);
        assert_eq!(kinds(&nodes), "CCVCCV");
    }

    #[test]
    fn test_interleave_appends_remainder() {
        let entries: Vec<_> = (0..2).map(|i| culture(&format!("c{}", i))).collect();
        let scenarios: Vec<_> = (1..=4).map(scenario).collect();
        let nodes = build_learning_path(&entries, &scenarios, None);
        assert_eq!(kinds(&nodes), "CCVVVV");
        let ids: Vec<_> = nodes.iter().skip(2).map(|n| n.content_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let entries: Vec<_> = (0..5).map(|i| culture(&format!("c{}", i))).collect();
        let nodes = build_learning_path(&entries, &[scenario(9)], None);
        assert_eq!(kinds(&nodes), "CCVCCC");
    }

    #[test]
    fn test_units_of_five() {
        let entries: Vec<_> = (0..8).map(|i| culture(&format!("c{}", i))).collect();
        let scenarios: Vec<_> = (1..=4).map(scenario).collect();
        let nodes = build_learning_path(&entries, &scenarios, None);
        assert_eq!(nodes.len(), 12);
        assert_eq!(nodes[4].unit_index, 0);
        assert_eq!(nodes[5].unit_index, 1);
        assert_eq!(nodes[5].unit_title, "Unit 2");
        assert_eq!(nodes[11].unit_title, "Unit 3");

        let grouped = units(&nodes);
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[2].0, "Unit 3");
        assert_eq!(grouped[2].1.len(), 2);
    }

    #[test]
    fn test_next_up_and_locks() {
        let entries = vec![culture("a"), culture("b"), culture("c")];
        let scenarios = vec![scenario(7)];
        let progress = UserProgress {
            completed_culture_entries: vec![culture_entry_id("a"), culture_entry_id("c")],
            ..Default::default()
        };
        // Order: a, b, 7, c
        let nodes = build_learning_path(&entries, &scenarios, Some(&progress));
        assert!(nodes[0].is_completed);
        assert!(nodes[1].is_next_up);
        assert!(!nodes[1].is_locked);
        assert!(nodes[2].is_locked);
        // Completed nodes after next-up stay unlocked
        assert!(nodes[3].is_completed);
        assert!(!nodes[3].is_locked);
        assert_eq!(nodes.iter().filter(|n| n.is_next_up).count(), 1);
    }

    #[test]
    fn test_all_completed_reuses_first() {
        let entries = vec![culture("a"), culture("b")];
        let scenarios = vec![scenario(3)];
        let progress = UserProgress {
            completed_culture_entries: vec![culture_entry_id("a"), culture_entry_id("b")],
            completed_dialogues: vec![3],
            ..Default::default()
        };
        let nodes = build_learning_path(&entries, &scenarios, Some(&progress));
        assert!(nodes.iter().all(|n| n.is_completed && !n.is_locked));
        assert!(nodes[0].is_next_up);
        assert_eq!(nodes.iter().filter(|n| n.is_next_up).count(), 1);
    }

    #[test]
    fn test_without_progress_first_node_is_next() {
        let nodes = build_learning_path(&[culture("a")], &[scenario(1)], None);
        assert!(nodes[0].is_next_up);
        assert!(nodes[1].is_locked);
    }

    #[test]
    fn test_node_ids() {
        let nodes = build_learning_path(&[culture("a")], &[scenario(42)], None);
        assert_eq!(nodes[0].id, "culture-97");
        assert_eq!(nodes[1].id, "conversation-42");
        assert_eq!(nodes[1].content_id, 42);
    }

    #[test]
    fn test_lock_policy() {
        let nodes = build_learning_path(&[culture("a")], &[scenario(1)], None);
        assert!(LockPolicy::Enforced.can_open(&nodes[0]));
        assert!(!LockPolicy::Enforced.can_open(&nodes[1]));
        assert!(LockPolicy::Advisory.can_open(&nodes[1]));
    }
}
