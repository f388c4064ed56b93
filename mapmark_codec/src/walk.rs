//! Depth-first, order-preserving child walk
//! 深度优先、保序的子图层遍历

use crate::layer::{ChildNode, ChildSettings};

/// Flatten a child tree into encode order, one record per leaf.
/// `root_level` is true only for direct, non-nested children.
/// 将子图层树展平为编码顺序，每个叶子一条记录。
/// 仅直接（非嵌套）子节点的 `root_level` 为 true。
pub fn flatten(nodes: &[ChildNode]) -> Vec<ChildSettings> {
  let mut out = Vec::new();
  walk(nodes, true, &mut out);
  out
}

fn walk(nodes: &[ChildNode], root: bool, out: &mut Vec<ChildSettings>) {
  for node in nodes {
    match node {
      ChildNode::Group(children) => walk(children, false, out),
      ChildNode::Entry(c) => out.push(ChildSettings {
        root_level: root,
        ..c.clone()
      }),
    }
  }
}
