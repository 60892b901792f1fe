//! Scene graph: node arena plus the render set
//!
//! Nodes are created once and never destroyed. The render set is the
//! ordered list of node handles drawn each frame; nodes can leave and rejoin
//! it without changing identity.

use super::geometry::{create_axes, AxisLine, CubeFrame};
use super::grid;
use super::pie::{create_sector_pair, Sector};

/// Handle to a node in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub enum Node {
    Cube(CubeFrame),
    Axis(AxisLine),
    Sector(Sector),
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    render_set: Vec<NodeId>,
    /// Sector nodes, positive before negative for each cell
    pie_nodes: Vec<NodeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full visualization: 27 cubes, 3 axes, 27 sector pairs
    pub fn build() -> Self {
        let mut scene = Self::new();
        let cells = grid::layout();

        for c in &cells {
            scene.add(Node::Cube(CubeFrame::new(c.cube_size, c.cube_position)));
        }
        for axis in create_axes() {
            scene.add(Node::Axis(axis));
        }
        for c in &cells {
            let pair = create_sector_pair(c.percent, c.pie_position, c.cell);
            for sector in pair.sectors() {
                let id = scene.add(Node::Sector(sector));
                scene.pie_nodes.push(id);
            }
        }

        log::info!(
            "Scene built: {} nodes ({} pie sectors)",
            scene.node_count(),
            scene.pie_nodes.len()
        );
        scene
    }

    /// Add a node and place it in the render set
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.render_set.push(id);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Put a node back into the render set. No-op if already present.
    pub fn show(&mut self, id: NodeId) {
        if id.0 < self.nodes.len() && !self.is_visible(id) {
            self.render_set.push(id);
        }
    }

    /// Take a node out of the render set. No-op if absent.
    pub fn hide(&mut self, id: NodeId) {
        self.render_set.retain(|&n| n != id);
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.render_set.contains(&id)
    }

    /// Handles currently in the render set, in draw order
    pub fn render_set(&self) -> &[NodeId] {
        &self.render_set
    }

    /// Nodes currently in the render set
    pub fn visible_nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.render_set.iter().filter_map(move |&id| self.get(id).map(|n| (id, n)))
    }

    pub fn pie_nodes(&self) -> &[NodeId] {
        &self.pie_nodes
    }

    /// Sectors currently in the render set
    pub fn visible_sectors(&self) -> impl Iterator<Item = &Sector> {
        self.visible_nodes().filter_map(|(_, node)| match node {
            Node::Sector(s) => Some(s),
            _ => None,
        })
    }

    /// Add or remove every pie sector from the render set
    pub fn set_pies_visible(&mut self, visible: bool) {
        let pies = self.pie_nodes.clone();
        for id in pies {
            if visible {
                self.show(id);
            } else {
                self.hide(id);
            }
        }
        log::debug!("Pie charts {}", if visible { "shown" } else { "hidden" });
    }

    /// True when every pie sector is in the render set
    pub fn pies_visible(&self) -> bool {
        !self.pie_nodes.is_empty() && self.pie_nodes.iter().all(|&id| self.is_visible(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_build_counts() {
        let scene = Scene::build();
        assert_eq!(scene.node_count(), grid::CELL_COUNT + 3 + grid::CELL_COUNT * 2);
        assert_eq!(scene.pie_nodes().len(), 54);
        assert_eq!(scene.render_set().len(), scene.node_count());
        assert!(scene.pies_visible());
    }

    #[test]
    fn test_toggle_roundtrip_restores_same_handles() {
        let mut scene = Scene::build();
        let before: BTreeSet<NodeId> = scene.render_set().iter().copied().collect();

        scene.set_pies_visible(false);
        assert_eq!(scene.visible_sectors().count(), 0);
        assert_eq!(scene.render_set().len(), grid::CELL_COUNT + 3);
        assert!(!scene.pies_visible());

        scene.set_pies_visible(true);
        let after: BTreeSet<NodeId> = scene.render_set().iter().copied().collect();
        assert_eq!(before, after);
        assert_eq!(scene.render_set().len(), before.len());
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut scene = Scene::build();
        scene.set_pies_visible(true);
        assert_eq!(scene.render_set().len(), scene.node_count());

        scene.set_pies_visible(false);
        scene.set_pies_visible(false);
        assert_eq!(scene.render_set().len(), grid::CELL_COUNT + 3);
    }

    #[test]
    fn test_pie_nodes_alternate_polarity() {
        use crate::scene::pie::Polarity;
        let scene = Scene::build();
        for (i, &id) in scene.pie_nodes().iter().enumerate() {
            match scene.get(id) {
                Some(Node::Sector(s)) => {
                    let expected = if i % 2 == 0 { Polarity::Positive } else { Polarity::Negative };
                    assert_eq!(s.polarity, expected);
                }
                other => panic!("expected sector, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_show_ignores_unknown_handle() {
        let mut scene = Scene::new();
        scene.show(NodeId(42));
        assert!(scene.render_set().is_empty());
    }
}
