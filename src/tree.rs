//! Internal module for rendering a scanned tree as connector-prefixed lines.

use crate::scan::TreeNode;

/// Renders the tree in the style of the `tree` command.
///
/// The root renders as `<name>/`; directory entries carry a trailing slash.
/// Elbow connectors are decided over the filtered children, so the last
/// visible entry of a directory always gets `└── `.
pub(crate) fn render_tree(root: &TreeNode) -> String {
    let mut lines = vec![format!("{}/", root.name)];
    render_children(&root.children, "", &mut lines);
    lines.join("\n")
}

fn render_children(children: &[TreeNode], prefix: &str, lines: &mut Vec<String>) {
    for (index, child) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        let connector = if is_last { "└── " } else { "├── " };
        let suffix = if child.is_dir { "/" } else { "" };
        lines.push(format!("{prefix}{connector}{}{suffix}", child.name));
        if child.is_dir {
            let child_prefix = if is_last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            render_children(&child.children, &child_prefix, lines);
        }
    }
}
